use crate::structs::named_count::NamedCount;
use crate::structs::named_share::NamedShare;

pub struct ShareCalculator;

impl ShareCalculator {
    /// Each entry's share of the list total, in input order.
    pub fn shares(counts: &[NamedCount]) -> Vec<NamedShare> {
        let total = Self::total(counts);

        counts
            .iter()
            .map(|c| NamedShare {
                name: c.name.clone(),
                count: c.count,
                percentage: Self::percentage(c.count, total),
            })
            .collect()
    }

    /// `part` as a percentage of `total`; zero when `total` is zero.
    pub fn percentage(part: u32, total: u32) -> f64 {
        if total == 0 {
            0.0
        } else {
            f64::from(part) / f64::from(total) * 100.0
        }
    }

    /// Whole-number percentage, rounded half away from zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(percentage: f64) -> u32 {
        percentage.round() as u32
    }

    pub fn total(counts: &[NamedCount]) -> u32 {
        counts.iter().map(|c| c.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::survey_data::SURVEY_DATA;

    #[test]
    fn marketing_types_round_like_pie_labels() {
        let shares = ShareCalculator::shares(&SURVEY_DATA.marketing_types);
        let rounded: Vec<u32> = shares.iter().map(NamedShare::rounded_percentage).collect();
        assert_eq!(rounded, vec![43, 43, 14]);
        assert_eq!(shares[2].name, "Mostly paid");
    }

    #[test]
    fn content_creation_teams_share() {
        let shares = ShareCalculator::shares(&SURVEY_DATA.content_creation_teams);
        assert_eq!(shares[0].rounded_percentage(), 76);
        assert_eq!(ShareCalculator::total(&SURVEY_DATA.content_creation_teams), 21);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let counts = vec![NamedCount::new("a", 0), NamedCount::new("b", 0)];
        let shares = ShareCalculator::shares(&counts);
        assert!(shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(ShareCalculator::percentage(3, 0), 0.0);
        assert_eq!(ShareCalculator::rounded(ShareCalculator::percentage(11, 19)), 58);
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(ShareCalculator::shares(&[]).is_empty());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "weak")]
    Weak,
}

impl RatingTier {
    /// Mean ratings of 4 and above are strong, 3 and above moderate.
    pub fn from_value(value: f64) -> Self {
        if value >= 4.0 {
            Self::Strong
        } else if value >= 3.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(RatingTier::from_value(4.0), RatingTier::Strong);
        assert_eq!(RatingTier::from_value(3.99), RatingTier::Moderate);
        assert_eq!(RatingTier::from_value(3.0), RatingTier::Moderate);
        assert_eq!(RatingTier::from_value(2.4), RatingTier::Weak);
    }
}

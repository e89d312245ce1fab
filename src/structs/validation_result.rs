use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.errors.is_empty();
        self
    }

    pub fn summary(&self) -> String {
        let mut out = if self.is_valid {
            "✅ Validation passed".to_string()
        } else {
            format!("❌ Validation failed with {} errors", self.errors.len())
        };

        if !self.warnings.is_empty() {
            out.push_str(&format!("\n⚠️ {} warnings found", self.warnings.len()));
        }

        for error in &self.errors {
            out.push_str(&format!("\n   ❌ {error}"));
        }

        for warning in &self.warnings {
            out.push_str(&format!("\n   ⚠️ {warning}"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_failures() {
        let passed = ValidationResult::from_findings(vec![], vec!["odd".to_string()]);
        let failed = ValidationResult::from_findings(vec!["broken".to_string()], vec![]);

        let merged = passed.merge(failed);
        assert!(!merged.is_valid);
        assert_eq!(merged.errors, vec!["broken"]);
        assert_eq!(merged.warnings, vec!["odd"]);
        assert!(merged.summary().starts_with("❌ Validation failed with 1 errors"));
    }
}

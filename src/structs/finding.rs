use serde::{Deserialize, Serialize};

/// One headline statistic, e.g. `Top issue: Too much editing needed (10 mentions)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub label: String,
    pub detail: String,
}

impl Finding {
    pub fn new(label: &str, detail: String) -> Self {
        Self {
            label: label.to_string(),
            detail,
        }
    }
}

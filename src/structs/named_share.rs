use serde::{Deserialize, Serialize};
use crate::services::share_calculator::ShareCalculator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShare {
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}

impl NamedShare {
    pub fn rounded_percentage(&self) -> u32 {
        ShareCalculator::rounded(self.percentage)
    }
}

use serde::{Deserialize, Serialize};

/// Groups the six histogram buckets into pairs: ratings 1-2, 3-4 and 5-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketBand {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "middle")]
    Middle,
    #[serde(rename = "high")]
    High,
}

impl BucketBand {
    pub const fn from_index(index: usize) -> Self {
        if index < 2 {
            Self::Low
        } else if index < 4 {
            Self::Middle
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Middle => "middle",
            Self::High => "high",
        }
    }
}

use serde::{Deserialize, Serialize};

/// Share status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    Unmounted,
    Mounting,
    Mounted,
    Unmounting,
}

impl ShareStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareStatus::Unmounted => "unmounted",
            ShareStatus::Mounting => "mounting",
            ShareStatus::Mounted => "mounted",
            ShareStatus::Unmounting => "unmounting",
        }
    }
}

impl std::str::FromStr for ShareStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unmounted" => ShareStatus::Unmounted,
            "mounting" => ShareStatus::Mounting,
            "mounted" => ShareStatus::Mounted,
            "unmounting" => ShareStatus::Unmounting,
            _ => ShareStatus::Unmounted,
        })
    }
}

impl std::fmt::Display for ShareStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};

/// Read a stored activation flag.
///
/// Only an explicit `false` means inactive. A missing flag is active.
pub fn is_flag_active(flag: Option<bool>) -> bool {
    flag != Some(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Inactive,
}

impl ActivityStatus {
    pub fn from_flag(flag: Option<bool>) -> Self {
        if is_flag_active(flag) {
            ActivityStatus::Active
        } else {
            ActivityStatus::Inactive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ActivityStatus::Active),
            "inactive" => Ok(ActivityStatus::Inactive),
            _ => Err(()),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Data sources the user has opted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Permissions {
    pub notifications: bool,
    pub screen_time: bool,
    pub voice: bool,
    pub wearable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Baseline,
    Enhanced,
    Advanced,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Baseline => "baseline",
            AppMode::Enhanced => "enhanced",
            AppMode::Advanced => "advanced",
        }
    }
}

// Notifications alone never raise the mode.
pub fn determine_mode(perms: &Permissions) -> AppMode {
    if perms.wearable {
        AppMode::Advanced
    } else if perms.voice || perms.screen_time {
        AppMode::Enhanced
    } else {
        AppMode::Baseline
    }
}

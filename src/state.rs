use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tone::Tone;

pub const OVERWHELMED: &str = "overwhelmed";
pub const EXHAUSTED: &str = "exhausted";
pub const FOCUSED: &str = "focused";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Normal,
    High,
}

impl Energy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Normal => "normal",
            Energy::High => "high",
        }
    }

    /// Energy implied by a situational check-in answer.
    pub fn from_situation(tag: &str) -> Self {
        match tag {
            OVERWHELMED | EXHAUSTED => Energy::Low,
            _ => Energy::Normal,
        }
    }
}

impl Default for Energy {
    fn default() -> Self {
        Energy::Normal
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored voice check-in. Entries recorded before tone analysis existed carry no tone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioEntry {
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_ref: Option<String>,
}

impl AudioEntry {
    pub fn with_tone(tone: Tone) -> Self {
        Self {
            tone: Some(tone),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// The summary when one was written, otherwise the full content.
    pub fn text(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => &self.content,
        }
    }
}

/// Read-only snapshot of everything the analysis functions look at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserState {
    #[serde(alias = "energyLevel")]
    pub energy: Energy,
    pub situations: Vec<String>,
    pub audios: Vec<AudioEntry>,
    pub journals: Vec<JournalEntry>,
}

impl UserState {
    pub fn has_situation(&self, tag: &str) -> bool {
        self.situations.iter().any(|s| s == tag)
    }

    pub fn has_history(&self) -> bool {
        !self.audios.is_empty() || !self.journals.is_empty()
    }
}

//! Result evaluation.
//!
//! Classifies a finished reel: exact registry match, near miss, or loss.
//! Near miss is deliberately narrow: only a 2-symbol prefix match against
//! the primary pattern counts, nothing proximity-based.

use super::pattern::{self, PatternEntry};

/// Classification of a finished reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Result matched a registry entry exactly
    Matched(&'static PatternEntry),
    /// No match, but the result starts with the primary pattern's prefix
    NearMiss,
    Loss,
}

impl Outcome {
    /// Evaluate a joined result string.
    pub fn evaluate(result: &str) -> Self {
        if let Some(entry) = pattern::lookup(result) {
            return Self::Matched(entry);
        }
        if result.starts_with(pattern::NEAR_MISS_PREFIX) {
            return Self::NearMiss;
        }
        Self::Loss
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matched(_) => "matched",
            Self::NearMiss => "near_miss",
            Self::Loss => "loss",
        }
    }

    /// The matched registry entry, if any.
    pub fn entry(&self) -> Option<&'static PatternEntry> {
        match self {
            Self::Matched(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Result message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Matched(entry) => entry.display_name,
            Self::NearMiss => "惜しい！もう一息！",
            Self::Loss => "残念！スガシカオじゃないね...",
        }
    }

    /// Theme token for the rendering layer.
    pub fn theme_tag(&self) -> &'static str {
        match self {
            Self::Matched(entry) => entry.theme_tag,
            Self::NearMiss => "close-theme",
            Self::Loss => "failure-theme",
        }
    }

    /// Background token for the rendering layer.
    pub fn background_tag(&self) -> &'static str {
        match self {
            Self::Matched(entry) => entry.background_tag,
            Self::NearMiss => "bg-close-light",
            Self::Loss => "bg-failure-light",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "result": self.as_str(),
            "message": self.message(),
            "theme": self.theme_tag(),
            "background": self.background_tag(),
            "reward": self.entry().map(|e| e.reward_to_json()),
        })
    }
}

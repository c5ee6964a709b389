//! Reaction kinds and per-announcement tallies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of reaction a user can leave on an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Up,
    Down,
    Heart,
}

impl ReactionType {
    /// Every reaction kind, in display order.
    pub const ALL: [ReactionType; 3] = [ReactionType::Up, ReactionType::Down, ReactionType::Heart];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Heart => "heart",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid reaction type '{value}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Reaction counts grouped by kind. Kinds nobody used count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTally {
    pub up: u64,
    pub down: u64,
    pub heart: u64,
}

impl ReactionTally {
    pub fn record(&mut self, kind: ReactionType) {
        match kind {
            ReactionType::Up => self.up += 1,
            ReactionType::Down => self.down += 1,
            ReactionType::Heart => self.heart += 1,
        }
    }
}

impl FromIterator<ReactionType> for ReactionTally {
    fn from_iter<I: IntoIterator<Item = ReactionType>>(iter: I) -> Self {
        let mut tally = Self::default();
        for kind in iter {
            tally.record(kind);
        }
        tally
    }
}

/// Validate a caller-supplied user identifier.
///
/// Identifiers are trusted as-is; the only requirement is that one was sent.
pub fn validate_user_id(user_id: &str) -> Result<(), String> {
    if user_id.trim().is_empty() {
        return Err("X-User-Id header is required".to_string());
    }
    Ok(())
}

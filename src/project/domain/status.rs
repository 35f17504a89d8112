//! Shared lifecycle status for projects and tasks.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status shared by projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created but not yet started.
    New,
    /// Work is under way.
    Active,
    /// Work has been finished.
    Closed,
    /// Withdrawn after being closed.
    Removed,
}

impl Status {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] = [Self::New, Self::Active, Self::Closed, Self::Removed];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Removed => "removed",
        }
    }

    /// Returns `true` for `New` and `Active`.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::Active)
    }

    /// Returns `true` for `Closed` and `Removed`.
    ///
    /// A project may only close once every task it owns is settled.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !self.is_open()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "removed" => Ok(Self::Removed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

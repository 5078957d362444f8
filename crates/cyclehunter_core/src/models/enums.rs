//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Reference frame a body position is computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frame {
    /// Position as seen from Earth.
    #[default]
    Geocentric,
    /// Position as seen from the Sun.
    Heliocentric,
}

impl Frame {
    /// Prefix used in display names ("G." or "H.").
    pub fn prefix(&self) -> &'static str {
        match self {
            Frame::Geocentric => "G.",
            Frame::Heliocentric => "H.",
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frame::Geocentric => write!(f, "geocentric"),
            Frame::Heliocentric => write!(f, "heliocentric"),
        }
    }
}

//! The marker record and its color palette.

use crate::error::{CoreError, CoreResult};
use crate::timecode::{format_clock, format_timecode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix Resolve puts in front of marker colors in EDL detail lines.
pub const RESOLVE_COLOR_PREFIX: &str = "ResolveColor";

/// Marker colors understood by DaVinci Resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarkerColor {
    #[default]
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Pink,
    Purple,
    Fuchsia,
    Rose,
    Lavender,
    Sky,
    Mint,
    Lemon,
    Sand,
    Cocoa,
    Cream,
}

impl MarkerColor {
    /// The full palette, in the order Resolve lists it.
    pub const ALL: [MarkerColor; 16] = [
        MarkerColor::Blue,
        MarkerColor::Cyan,
        MarkerColor::Green,
        MarkerColor::Yellow,
        MarkerColor::Red,
        MarkerColor::Pink,
        MarkerColor::Purple,
        MarkerColor::Fuchsia,
        MarkerColor::Rose,
        MarkerColor::Lavender,
        MarkerColor::Sky,
        MarkerColor::Mint,
        MarkerColor::Lemon,
        MarkerColor::Sand,
        MarkerColor::Cocoa,
        MarkerColor::Cream,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Blue => "Blue",
            MarkerColor::Cyan => "Cyan",
            MarkerColor::Green => "Green",
            MarkerColor::Yellow => "Yellow",
            MarkerColor::Red => "Red",
            MarkerColor::Pink => "Pink",
            MarkerColor::Purple => "Purple",
            MarkerColor::Fuchsia => "Fuchsia",
            MarkerColor::Rose => "Rose",
            MarkerColor::Lavender => "Lavender",
            MarkerColor::Sky => "Sky",
            MarkerColor::Mint => "Mint",
            MarkerColor::Lemon => "Lemon",
            MarkerColor::Sand => "Sand",
            MarkerColor::Cocoa => "Cocoa",
            MarkerColor::Cream => "Cream",
        }
    }

    /// Parses the `|C:` token of an EDL detail line, with or without the
    /// `ResolveColor` prefix.
    pub fn from_resolve_token(token: &str) -> CoreResult<Self> {
        token
            .strip_prefix(RESOLVE_COLOR_PREFIX)
            .unwrap_or(token)
            .parse()
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerColor {
    type Err = CoreError;

    /// Case-insensitive color lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MarkerColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Validation(format!("Unknown color '{}'", wanted)))
    }
}

/// A named point in time within a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub name: String,
    pub time_seconds: u64,
    pub color: MarkerColor,
}

impl Timestamp {
    pub fn new(name: impl Into<String>, time_seconds: u64) -> Self {
        Self {
            name: name.into(),
            time_seconds,
            color: MarkerColor::default(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: MarkerColor) -> Self {
        self.color = color;
        self
    }

    /// One-line description used by the EDL workflow listings,
    /// e.g. `(00:15:30:00, Blue) Big Save`.
    #[must_use]
    pub fn describe_with_color(&self) -> String {
        format!(
            "({}, {}) {}",
            format_timecode(self.time_seconds, 0),
            self.color,
            self.name
        )
    }
}

impl fmt::Display for Timestamp {
    /// Chapter-style description, e.g. `(15:30) Big Save`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", format_clock(self.time_seconds), self.name)
    }
}

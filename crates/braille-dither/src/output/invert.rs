//! Theme-dependent dot inversion.

use std::fmt;
use std::str::FromStr;

use crate::api::ParseThemeError;

/// Display theme the output will be shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(ParseThemeError::new(s))
        }
    }
}

/// Whether the rendered dots must be flipped.
///
/// Raised dots mark dark samples. On a light theme the braille glyphs are
/// drawn dark, so they are flipped unless the user asked for inversion;
/// on a dark theme they are flipped only when inversion is requested.
///
/// | invert | theme | flip |
/// |--------|-------|------|
/// | false  | Light | yes  |
/// | false  | Dark  | no   |
/// | true   | Light | no   |
/// | true   | Dark  | yes  |
#[inline]
pub fn needs_invert(invert: bool, theme: Theme) -> bool {
    invert != (theme == Theme::Light)
}

/// Flip the 8 dot bits of every character in `row`.
///
/// Only the low byte of each codepoint is touched, which for braille
/// characters is exactly the dot mask. Applying it twice restores the row.
pub fn invert_row(row: &str) -> String {
    row.chars()
        .map(|c| char::from_u32(c as u32 ^ 0xFF).unwrap_or(c))
        .collect()
}

//! Parse errors for user-facing option names.

use std::fmt;

use crate::dither::Style;
use crate::output::Theme;

/// Error returned when a string does not name a [`Style`].
///
/// The message lists every accepted name, so it can be shown to users
/// unchanged.
///
/// # Example
///
/// ```
/// use braille_dither::Style;
///
/// let err = "sharp".parse::<Style>().unwrap_err();
/// assert_eq!(err.input(), "sharp");
/// assert_eq!(
///     err.to_string(),
///     "invalid style: must be one of the following: normal, contrast, edge, smooth, brightness"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError {
    input: String,
}

impl ParseStyleError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid style: must be one of the following: ")?;
        for (i, style) in Style::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(style.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseStyleError {}

/// Error returned when a string does not name a [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    input: String,
}

impl ParseThemeError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid theme: must be either {} or {}",
            Theme::Light,
            Theme::Dark
        )
    }
}

impl std::error::Error for ParseThemeError {}

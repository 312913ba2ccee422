//! Color values for palettes and page themes.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Parse a `#rrggbb` literal (leading `#` optional).
    pub fn from_hex(literal: &str) -> Result<Self, ConfigError> {
        let hex = literal.strip_prefix('#').unwrap_or(literal);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ConfigError::InvalidColor(literal.to_string()));
        }
        let channel = |range: Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ConfigError::InvalidColor(literal.to_string()))
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_literals() {
        assert_eq!(Rgb::from_hex("#1b73ee").unwrap(), Rgb::new(0x1b, 0x73, 0xee));
        assert_eq!(Rgb::from_hex("F44336").unwrap(), Rgb::new(0xf4, 0x43, 0x36));
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["#fff", "#gggggg", "", "#12345", "#1234567"] {
            assert!(Rgb::from_hex(bad).is_err(), "expected error for {bad:?}");
        }
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgb::new(0x03, 0x13, 0x29).to_string(), "#031329");
    }
}

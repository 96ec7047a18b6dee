//! Card background colors: hex parsing (#RGB, #RRGGBB) and conversion
//! to the raster color type.

use crate::types::{Result, SheetError};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color chosen by the user for a card background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CardColor {
    pub const WHITE: CardColor = CardColor {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

impl Default for CardColor {
    fn default() -> Self {
        CardColor::WHITE
    }
}

impl FromStr for CardColor {
    type Err = SheetError;

    /// Parse `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SheetError::Color(s.to_string()));
        }

        match hex.len() {
            3 => {
                let bytes = hex.as_bytes();
                Ok(CardColor::new(
                    expand_nibble(bytes[0]),
                    expand_nibble(bytes[1]),
                    expand_nibble(bytes[2]),
                ))
            }
            6 => {
                let parse = |range| {
                    u8::from_str_radix(&hex[range], 16)
                        .map_err(|_| SheetError::Color(s.to_string()))
                };
                Ok(CardColor::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
            }
            _ => Err(SheetError::Color(s.to_string())),
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Expand a single hex nibble: 'f' -> 0xff, 'a' -> 0xaa.
fn expand_nibble(b: u8) -> u8 {
    let v = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    };
    v << 4 | v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c: CardColor = "#1a2b3c".parse().unwrap();
        assert_eq!(c, CardColor::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_parse_three_digit_expands() {
        let c: CardColor = "#f80".parse().unwrap();
        assert_eq!(c, CardColor::new(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_without_hash() {
        let c: CardColor = "ffffff".parse().unwrap();
        assert_eq!(c, CardColor::WHITE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("#12345".parse::<CardColor>().is_err());
        assert!("#gggggg".parse::<CardColor>().is_err());
        assert!("".parse::<CardColor>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let c = CardColor::new(1, 2, 3);
        let parsed: CardColor = c.to_string().parse().unwrap();
        assert_eq!(parsed, c);
    }
}

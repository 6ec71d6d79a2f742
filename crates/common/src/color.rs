//! RGBA colour type used for rendered pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit-per-channel RGBA colour.
///
/// Serializes as a `#rrggbb` hex string; alpha is not part of the text form
/// and is always 255 when parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// Packed `0xRRGGBB` value (alpha dropped).
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

/// Error returned when a colour string is not `#rrggbb` / `rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}': expected 6 hex digits, e.g. #ff8800")]
pub struct ParseColorError(String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_opaque_black_and_white() {
        assert_eq!(Rgba::default(), Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::WHITE.to_array(), [255, 255, 255, 255]);
    }

    #[test]
    fn from_hex_forces_alpha() {
        let c = Rgba::from_hex(0xFF8000);
        assert_eq!(c, Rgba::new(0xFF, 0x80, 0x00, 255));

        // High byte is not alpha.
        let c = Rgba::from_hex(0x12345678);
        assert_eq!(c, Rgba::new(0x34, 0x56, 0x78, 255));
    }

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!("#00ff00".parse::<Rgba>(), Ok(Rgba::new(0, 255, 0, 255)));
        assert_eq!("0000FF".parse::<Rgba>(), Ok(Rgba::new(0, 0, 255, 255)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("#fff".parse::<Rgba>().is_err());
        assert!("zzzzzz".parse::<Rgba>().is_err());
        assert!("".parse::<Rgba>().is_err());
        assert!("+12345".parse::<Rgba>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let c = Rgba::from_hex(0x1a2b3c);
        assert_eq!(c.to_string(), "#1a2b3c");
        assert_eq!(c.to_string().parse::<Rgba>(), Ok(c));
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgba::WHITE).expect("serialize");
        assert_eq!(json, "\"#ffffff\"");
        let back: Rgba = serde_json::from_str("\"#102030\"").expect("deserialize");
        assert_eq!(back, Rgba::from_hex(0x102030));
    }
}

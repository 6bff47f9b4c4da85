use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

use crate::error::PetalError;

/// Name of a design token within a category, e.g. "card-pink".
pub type TokenName = String;

/// Name of a theme category, e.g. "colors" or "spacing".
pub type CategoryName = String;

/// A parsed `#RRGGBB` color literal.
///
/// The document schema stores color values verbatim; this type is the checked
/// view used by validation and by consumers that want the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True if `value` is a well-formed `#RRGGBB` literal.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<HexColor>().is_ok()
    }
}

impl FromStr for HexColor {
    type Err = PetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PetalError::InvalidColorFormat { value: s.to_string() };
        let hex = s.strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| malformed())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| malformed())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| malformed())?;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

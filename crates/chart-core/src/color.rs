// File: crates/chart-core/src/color.rs
// Summary: RGBA color value object and the paint option (random default, none, solid).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// 8-bit RGBA color. Serialized as `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque color from `0xRRGGBB`; bits above 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// `0xRRGGBB`, alpha dropped.
    pub const fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(hex.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// `rrggbb` when opaque, `rrggbbaa` otherwise.
    pub fn hex(&self) -> String {
        if self.a == 255 {
            format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Opaque color with uniformly random channels.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_hex(s) }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::from_hex(&s) }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self { c.to_string() }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self { Self::rgb(r, g, b) }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self { Self::new(r, g, b, a) }
}

/// How a fill, outline or slice is colored.
///
/// `Random` is the default: a fresh opaque color is drawn from the random
/// source handed to [`Paint::resolve`] at draw time. `None` draws nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    #[default]
    Random,
    None,
    Solid(Rgba),
}

impl Paint {
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rgba> {
        match *self {
            Paint::Random => Some(Rgba::random(rng)),
            Paint::None => None,
            Paint::Solid(c) => Some(c),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self { Paint::Solid(c) }
}

impl From<Option<Rgba>> for Paint {
    fn from(c: Option<Rgba>) -> Self {
        c.map_or(Paint::None, Paint::Solid)
    }
}

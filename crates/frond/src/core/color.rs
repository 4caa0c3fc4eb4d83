use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 32-bit color in `0xAARRGGBB` layout.
///
/// Serializes as a `#RRGGBB` or `#AARRGGBB` hex string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Pure black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Pure white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Pure red.
    pub const RED: Self = Self(0xFFFF_0000);
    /// Pure green.
    pub const GREEN: Self = Self(0xFF00_FF00);
    /// Pure blue.
    pub const BLUE: Self = Self(0xFF00_00FF);
    /// Pure yellow.
    pub const YELLOW: Self = Self(0xFFFF_FF00);
    /// Teal.
    pub const TEAL: Self = Self(0xFF00_8080);
    /// Medium gray.
    pub const GRAY: Self = Self(0xFF80_8080);
    /// Dark gray.
    pub const DARK_GRAY: Self = Self(0xFF40_4040);
    /// Light gray.
    pub const LIGHT_GRAY: Self = Self(0xFFC0_C0C0);
    /// Very dark gray.
    pub const CHARCOAL: Self = Self(0xFF20_2020);

    /// An opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    /// A color from components including alpha.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Alpha component.
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self(self.0 & 0x00FF_FFFF | (a as u32) << 24)
    }

    /// Linear interpolation toward `other`; `t` is clamped to 0..=1.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::argb(
            mix(self.a(), other.a()),
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }

    /// Mix toward white by `t`.
    pub fn lighten(self, t: f32) -> Self {
        self.lerp(Self::WHITE.with_alpha(self.a()), t)
    }

    /// Mix toward black by `t`.
    pub fn darken(self, t: f32) -> Self {
        self.lerp(Self::BLACK.with_alpha(self.a()), t)
    }

    /// Composite this color over `dst`, scaling source alpha by `coverage`.
    pub fn over(self, dst: Self, coverage: u8) -> Self {
        let alpha = self.a() as u32 * coverage as u32 / 255;
        if alpha == 0 {
            return dst;
        }
        if alpha == 255 {
            return self;
        }
        let inv = 255 - alpha;
        let ch = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * inv) / 255) as u8;
        let out_a = alpha + dst.a() as u32 * inv / 255;
        Self::argb(
            out_a.min(255) as u8,
            ch(self.r(), dst.r()),
            ch(self.g(), dst.g()),
            ch(self.b(), dst.b()),
        )
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`. The leading `#` is optional.
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let v = u32::from_str_radix(hex, 16).map_err(|_| Error::Invalid(format!("color {s}")))?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | v)),
            8 => Ok(Self(v)),
            _ => Err(Error::Invalid(format!("color {s}"))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let c = Color(0x80123456);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(Color::rgb(1, 2, 3), Color(0xFF010203));
    }

    #[test]
    fn parse_and_display() -> Result<()> {
        assert_eq!(Color::parse("#ff0000")?, Color::RED);
        assert_eq!(Color::parse("80FFFFFF")?, Color::WHITE.with_alpha(0x80));
        assert!(Color::parse("#fff").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
        assert_eq!(Color::TEAL.to_string(), "#008080");
        assert_eq!(Color(0x10203040).to_string(), "#10203040");
        Ok(())
    }

    #[test]
    fn compositing() {
        assert_eq!(Color::RED.over(Color::BLUE, 255), Color::RED);
        assert_eq!(Color::RED.over(Color::BLUE, 0), Color::BLUE);
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE, 255), Color::BLUE);
        let half = Color::WHITE.over(Color::BLACK, 128);
        assert_eq!(half.a(), 0xFF);
        assert!(half.r() > 120 && half.r() < 136);
    }

    #[test]
    fn serde_roundtrip() -> Result<()> {
        let json = serde_json::to_string(&Color::TEAL)?;
        assert_eq!(json, "\"#008080\"");
        let back: Color = serde_json::from_str(&json)?;
        assert_eq!(back, Color::TEAL);
        Ok(())
    }
}

// Canvas pixel color and the arithmetic the undo journal relies on.
//
// `+` and `-` wrap per channel (mod 256) instead of clamping. Undo stores
// `new - old` and later subtracts it again, which is only exact with
// wrapping arithmetic. The result of either operator is always opaque.
use crate::error::Error;
use serde::Deserialize;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Per-channel max against `brush` scaled by `intensity` (alpha untouched).
    /// Never darkens: painting over existing paint keeps the brighter channel.
    pub fn brightened(self, brush: Color, intensity: f32) -> Self {
        let scale = |c: u8| (c as f32 * intensity) as u8;
        Self {
            r: self.r.max(scale(brush.r)),
            g: self.g.max(scale(brush.g)),
            b: self.b.max(scale(brush.b)),
            a: self.a,
        }
    }

    /// Pack as 0x00RRGGBB (the layout minifb displays).
    #[inline]
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.wrapping_add(rhs.r),
            self.g.wrapping_add(rhs.g),
            self.b.wrapping_add(rhs.b),
        )
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.wrapping_sub(rhs.r),
            self.g.wrapping_sub(rhs.g),
            self.b.wrapping_sub(rhs.b),
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#RRGGBB` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

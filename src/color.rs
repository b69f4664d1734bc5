use serde::Deserialize;

use crate::error::BrandgenResult;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> BrandgenResult<Self> {
        parse_hex(s).map_err(crate::error::BrandgenError::validation)
    }

    /// Convert to premultiplied RGBA8 bytes.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { ((u16::from(c) * a + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_rgb_and_rgba() {
        assert_eq!(Rgba8::from_hex("#2D8CFF").unwrap(), Rgba8::rgb(45, 140, 255));
        assert_eq!(
            Rgba8::from_hex("2d8cffd9").unwrap(),
            Rgba8::rgba(45, 140, 255, 217)
        );
        assert!(Rgba8::from_hex("#123").is_err());
        assert!(Rgba8::from_hex("#GG0000").is_err());
    }

    #[test]
    fn premul_scales_channels_by_alpha() {
        assert_eq!(Rgba8::rgb(45, 140, 255).to_premul(), [45, 140, 255, 255]);
        assert_eq!(
            Rgba8::rgba(255, 255, 255, 217).to_premul(),
            [217, 217, 217, 217]
        );
        assert_eq!(Rgba8::rgba(80, 90, 100, 0).to_premul(), [0, 0, 0, 0]);
    }
}

use rand::Rng;
use std::fmt;

/// 24-bit sRGB colour as used by A-Frame's `color` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Uniform over the whole 24-bit range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_hex(rng.gen_range(0..=0xFF_FFFF))
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Self::from_hex),
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let expand = |n: u32| ((n & 0xF) * 0x11) as u8;
                Some(Self::new(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

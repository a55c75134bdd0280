//! RGB colors with OOXML hex serialization

use std::fmt;

/// Solid RGB color as used by `a:srgbClr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form without prefix, e.g. "FFC107"
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_zero_padded_uppercase() {
        assert_eq!(Rgb::new(0x1A, 0x1A, 0x2E).hex(), "1A1A2E");
        assert_eq!(Rgb::new(0, 0xC1, 7).hex(), "00C107");
        assert_eq!(format!("{}", Rgb::new(255, 255, 255)), "FFFFFF");
    }
}

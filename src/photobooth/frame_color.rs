use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A CSS-style hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3, 6 or 8 hex digits: {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

impl FrameColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for FrameColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(trimmed.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(trimmed.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseColorError::InvalidDigit(trimmed.to_string()))
        };
        // #abc expands each nibble: a -> aa
        let short = |index: usize| channel(index..index + 1).map(|v| v * 17);

        match digits.len() {
            3 => Ok(Self::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ParseColorError::InvalidLength(trimmed.to_string())),
        }
    }
}

impl fmt::Display for FrameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for FrameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameColor({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color: FrameColor = "#ff8000".parse().unwrap();
        assert_eq!(color, FrameColor::rgb(255, 128, 0));
    }

    #[test]
    fn test_parse_short_form() {
        let color: FrameColor = "#f80".parse().unwrap();
        assert_eq!(color, FrameColor::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_with_alpha() {
        let color: FrameColor = "#ffffffb2".parse().unwrap();
        assert_eq!(color, FrameColor::rgba(255, 255, 255, 178));
        assert_eq!(color.to_hex(), "#ffffffb2");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "red".parse::<FrameColor>(),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            "#12345".parse::<FrameColor>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<FrameColor>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }
}

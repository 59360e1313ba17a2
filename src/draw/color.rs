//! RGBA color type, hex parsing, and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use strokepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let parsed = Color::from_hex("#FF0000").unwrap();
/// assert_eq!(red, parsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a 6-hex-digit color string, with or without a `#` prefix.
    ///
    /// Alpha is always fixed at 1.0. Returns `None` when the input does not
    /// match the expected pattern; callers treat that as a non-fatal no-op
    /// (keep the previous color, skip the draw).
    pub fn from_hex(spec: &str) -> Option<Self> {
        let digits = spec.strip_prefix('#').unwrap_or(spec);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };

        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: 1.0,
        })
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_prefixed_and_bare_strings() {
        assert_eq!(Color::from_hex("#FF0000"), Some(RED));
        assert_eq!(Color::from_hex("00FF00"), Some(GREEN));
        assert_eq!(Color::from_hex("#0000ff"), Some(BLUE));
    }

    #[test]
    fn from_hex_scales_channels_and_fixes_alpha() {
        let color = Color::from_hex("#336699").expect("valid hex");
        assert!((color.r - 0x33 as f64 / 255.0).abs() < f64::EPSILON);
        assert!((color.g - 0x66 as f64 / 255.0).abs() < f64::EPSILON);
        assert!((color.b - 0x99 as f64 / 255.0).abs() < f64::EPSILON);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Color::from_hex("zzz").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#1234567").is_none());
        assert!(Color::from_hex("gg0000").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ffé").is_none());
    }
}

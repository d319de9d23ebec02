//! FILENAME: chart-engine/src/color.rs
//! PURPOSE: Colours for chart areas.
//! CONTEXT: Each dataset (or pie slice) gets the next colour of a golden
//! angle walk around the HSL hue circle, so neighbouring series contrast.

/// An opaque RGB colour. Transparency is appended to the hex form by
/// `ChartArea`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Converts HSL (hue in degrees, saturation and lightness in 0..=1).
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = lightness - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Color::new(channel(r), channel(g), channel(b))
    }

    /// Lowercase "#rrggbb".
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hands out one colour per chart element.
#[derive(Debug, Clone)]
pub struct ColorDispenser {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Default for ColorDispenser {
    fn default() -> Self {
        ColorDispenser::new()
    }
}

impl ColorDispenser {
    pub const SPIN: f64 = 137.5;

    /// Starts from hsl(240, 40%, 50%).
    pub fn new() -> Self {
        ColorDispenser {
            hue: 240.0,
            saturation: 0.4,
            lightness: 0.5,
        }
    }

    pub fn dispense_color(&mut self) -> String {
        self.hue = (self.hue + Self::SPIN) % 360.0;
        Color::from_hsl(self.hue, self.saturation, self.lightness).to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsl(360.0, 0.0, 1.0), Color::new(255, 255, 255));
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Color::new(255, 128, 0).to_hex(), "#ff8000");
        assert_eq!(Color::new(0, 171, 10).to_hex(), "#00ab0a");
    }

    #[test]
    fn test_dispenser_spins_golden_angle() {
        let mut dispenser = ColorDispenser::new();
        let first = dispenser.dispense_color();
        let second = dispenser.dispense_color();

        assert_eq!(first, Color::from_hsl(17.5, 0.4, 0.5).to_hex());
        assert_eq!(second, Color::from_hsl(155.0, 0.4, 0.5).to_hex());
        assert_ne!(first, second);
        assert_eq!(first.len(), 7);
    }
}

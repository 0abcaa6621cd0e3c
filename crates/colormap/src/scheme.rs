//! Color value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_u8(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_channel(p, q, h)),
            to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// CSS `hsl()` notation, e.g. `hsl(230, 100%, 45%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn grey_when_unsaturated() {
        assert_eq!(Hsl::new(200.0, 0.0, 50.0).to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn css_notation() {
        assert_eq!(Hsl::new(230.0, 100.0, 45.0).to_string(), "hsl(230, 100%, 45%)");
        assert_eq!(Hsl::new(115.0, 100.0, 47.5).to_string(), "hsl(115, 100%, 47.5%)");
    }

    #[test]
    fn hex_notation() {
        assert_eq!(Rgb::new(66, 133, 244).to_hex(), "#4285f4");
    }
}

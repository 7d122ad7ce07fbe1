use std::fmt;

use crate::foundation::{
    error::{AuroraError, AuroraResult},
    math::{lerp, unit_to_u8},
};

/// Opaque sRGB color with 8-bit channels, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> AuroraResult<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AuroraError::validation(format!(
                "expected a #rrggbb color, got '{s}'"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|e| AuroraError::validation(format!("invalid hex color '{s}': {e}")))?;
        Ok(Self {
            r: (v >> 16) as u8,
            g: (v >> 8 & 0xff) as u8,
            b: (v & 0xff) as u8,
        })
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = AuroraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

/// sRGB color with float channels in 0..=255 space.
///
/// Interpolated colors are kept as floats so repeated small steps keep approaching the
/// target instead of stalling on integer truncation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RgbF {
    /// Red channel, 0..=255.
    pub r: f64,
    /// Green channel, 0..=255.
    pub g: f64,
    /// Blue channel, 0..=255.
    pub b: f64,
}

impl RgbF {
    /// Move `t` of the way toward `target`, channel-wise.
    pub fn lerp_toward(self, target: Rgb8, t: f64) -> Self {
        Self {
            r: lerp(self.r, f64::from(target.r), t),
            g: lerp(self.g, f64::from(target.g), t),
            b: lerp(self.b, f64::from(target.b), t),
        }
    }

    /// Round to the nearest 8-bit color.
    pub fn to_rgb8(self) -> Rgb8 {
        let q = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        Rgb8::new(q(self.r), q(self.g), q(self.b))
    }

    /// Largest absolute channel difference to `target`.
    pub fn max_channel_distance(self, target: Rgb8) -> f64 {
        (self.r - f64::from(target.r))
            .abs()
            .max((self.g - f64::from(target.g)).abs())
            .max((self.b - f64::from(target.b)).abs())
    }
}

impl From<Rgb8> for RgbF {
    fn from(c: Rgb8) -> Self {
        Self {
            r: f64::from(c.r),
            g: f64::from(c.g),
            b: f64::from(c.b),
        }
    }
}

/// CSS-style hue/saturation/lightness color with alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    /// Hue in degrees; any value, wrapped into [0, 360).
    pub h: f64,
    /// Saturation, 0..=1.
    pub s: f64,
    /// Lightness, 0..=1.
    pub l: f64,
    /// Alpha, 0..=1.
    pub a: f64,
}

impl Hsla {
    /// Construct from components.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Straight (non-premultiplied) RGB channels in 0..=1.
    pub fn to_rgb_unit(self) -> [f64; 3] {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        if s == 0.0 {
            return [l, l, l];
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        ]
    }

    /// Straight RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb_unit();
        [
            unit_to_u8(r),
            unit_to_u8(g),
            unit_to_u8(b),
            unit_to_u8(self.a),
        ]
    }

    /// CSS functional notation, e.g. `hsla(210.0, 100%, 70%, 0.80)`.
    pub fn to_css(self) -> String {
        format!(
            "hsla({:.1}, {:.0}%, {:.0}%, {:.2})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.a
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

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

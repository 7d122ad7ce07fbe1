use crate::foundation::{
    color::{Rgb8, RgbF},
    error::{AuroraError, AuroraResult},
    math::lerp,
};

/// Closed set of built-in themes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    /// Muted blue.
    Calm,
    /// Purple/green cyberpunk.
    NeonDark,
    /// Deep blue.
    Ocean,
    /// Warm solar nebula.
    Sunset,
    /// Monochrome on white.
    Professional,
    /// Green radar energy.
    DarkGlow,
    /// Fast red alert.
    Critical,
}

impl ThemeId {
    /// Number of themes.
    pub const COUNT: usize = 7;

    /// Every theme, in registry order.
    pub const ALL: [ThemeId; Self::COUNT] = [
        ThemeId::Calm,
        ThemeId::NeonDark,
        ThemeId::Ocean,
        ThemeId::Sunset,
        ThemeId::Professional,
        ThemeId::DarkGlow,
        ThemeId::Critical,
    ];

    /// Alias names and the theme each one stands for.
    pub const ALIASES: [(&'static str, ThemeId); 3] = [
        ("normal", ThemeId::NeonDark),
        ("warning", ThemeId::Sunset),
        ("default", ThemeId::Calm),
    ];

    /// Canonical name.
    pub fn id(self) -> &'static str {
        match self {
            ThemeId::Calm => "calm",
            ThemeId::NeonDark => "neon_dark",
            ThemeId::Ocean => "ocean",
            ThemeId::Sunset => "sunset",
            ThemeId::Professional => "professional",
            ThemeId::DarkGlow => "dark_glow",
            ThemeId::Critical => "critical",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Built-in preset for this theme.
    pub fn builtin_preset(self) -> ThemePreset {
        match self {
            ThemeId::Calm => ThemePreset {
                hue_a: 210.0,
                hue_b: 190.0,
                saturation: 70.0,
                background: [Rgb8::new(0x0f, 0x17, 0x2a), Rgb8::new(0x02, 0x06, 0x17)],
                animation_speed: 0.002,
                blob_count: 6,
                blob_opacity: 0.4,
            },
            ThemeId::NeonDark => ThemePreset {
                hue_a: 280.0,
                hue_b: 140.0,
                saturation: 90.0,
                background: [Rgb8::new(0x1a, 0x0b, 0x2e), Rgb8::new(0x05, 0x0a, 0x14)],
                animation_speed: 0.004,
                blob_count: 8,
                blob_opacity: 0.5,
            },
            ThemeId::Ocean => ThemePreset {
                hue_a: 200.0,
                hue_b: 240.0,
                saturation: 80.0,
                background: [Rgb8::new(0x02, 0x10, 0x24), Rgb8::new(0x05, 0x2e, 0x3e)],
                animation_speed: 0.002,
                blob_count: 7,
                blob_opacity: 0.5,
            },
            ThemeId::Sunset => ThemePreset {
                hue_a: 10.0,
                hue_b: 40.0,
                saturation: 85.0,
                background: [Rgb8::new(0x2e, 0x0b, 0x0b), Rgb8::new(0x1a, 0x05, 0x05)],
                animation_speed: 0.003,
                blob_count: 7,
                blob_opacity: 0.45,
            },
            ThemeId::Professional => ThemePreset {
                hue_a: 210.0,
                hue_b: 0.0,
                saturation: 0.0,
                background: [Rgb8::new(0xff, 0xff, 0xff), Rgb8::new(0xf1, 0xf5, 0xf9)],
                animation_speed: 0.003,
                blob_count: 6,
                blob_opacity: 0.15,
            },
            ThemeId::DarkGlow => ThemePreset {
                hue_a: 160.0,
                hue_b: 180.0,
                saturation: 90.0,
                background: [Rgb8::new(0x00, 0x1a, 0x10), Rgb8::new(0x00, 0x00, 0x00)],
                animation_speed: 0.003,
                blob_count: 6,
                blob_opacity: 0.4,
            },
            ThemeId::Critical => ThemePreset {
                hue_a: 0.0,
                hue_b: 340.0,
                saturation: 95.0,
                background: [Rgb8::new(0x2b, 0x05, 0x05), Rgb8::new(0x00, 0x00, 0x00)],
                animation_speed: 0.015,
                blob_count: 10,
                blob_opacity: 0.6,
            },
        }
    }
}

/// Named bundle of visual parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemePreset {
    /// Primary hue (blobs, glow), degrees.
    pub hue_a: f64,
    /// Secondary hue (fog), degrees.
    pub hue_b: f64,
    /// Blob saturation in percent.
    pub saturation: f64,
    /// Vertical background gradient, top then bottom.
    pub background: [Rgb8; 2],
    /// Blob speed factor.
    pub animation_speed: f64,
    /// Blobs per batch at full quality.
    pub blob_count: u32,
    /// Blob center alpha.
    pub blob_opacity: f64,
}

impl ThemePreset {
    /// Range checks applied to configured overrides.
    pub fn validate(&self) -> AuroraResult<()> {
        if !(0.0..360.0).contains(&self.hue_a) || !(0.0..360.0).contains(&self.hue_b) {
            return Err(AuroraError::validation("preset hues must be in [0, 360)"));
        }
        if !(0.0..=100.0).contains(&self.saturation) {
            return Err(AuroraError::validation(
                "preset saturation must be in [0, 100]",
            ));
        }
        if !(0.0..=1.0).contains(&self.blob_opacity) {
            return Err(AuroraError::validation(
                "preset blob_opacity must be in [0, 1]",
            ));
        }
        if !self.animation_speed.is_finite() || self.animation_speed < 0.0 {
            return Err(AuroraError::validation(
                "preset animation_speed must be finite and >= 0",
            ));
        }
        if self.blob_count == 0 {
            return Err(AuroraError::validation("preset blob_count must be >= 1"));
        }
        Ok(())
    }
}

/// Working copy of the active preset's interpolable fields.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    /// Interpolated primary hue.
    pub hue_a: f64,
    /// Interpolated secondary hue.
    pub hue_b: f64,
    /// Interpolated saturation, percent.
    pub saturation: f64,
    /// Interpolated background gradient endpoints.
    pub background: [RgbF; 2],
    /// Interpolated speed factor.
    pub animation_speed: f64,
    /// Interpolated blob alpha.
    pub blob_opacity: f64,
}

impl RenderConfig {
    /// Exact copy of `preset`'s values.
    pub fn from_preset(preset: &ThemePreset) -> Self {
        Self {
            hue_a: preset.hue_a,
            hue_b: preset.hue_b,
            saturation: preset.saturation,
            background: [preset.background[0].into(), preset.background[1].into()],
            animation_speed: preset.animation_speed,
            blob_opacity: preset.blob_opacity,
        }
    }

    /// Move every field `t` of the way toward `target`.
    pub fn approach(&mut self, target: &ThemePreset, t: f64) {
        self.hue_a = lerp(self.hue_a, target.hue_a, t);
        self.hue_b = lerp(self.hue_b, target.hue_b, t);
        self.saturation = lerp(self.saturation, target.saturation, t);
        self.animation_speed = lerp(self.animation_speed, target.animation_speed, t);
        self.blob_opacity = lerp(self.blob_opacity, target.blob_opacity, t);
        self.background[0] = self.background[0].lerp_toward(target.background[0], t);
        self.background[1] = self.background[1].lerp_toward(target.background[1], t);
    }
}

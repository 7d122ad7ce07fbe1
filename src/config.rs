use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{AuroraError, AuroraResult},
    theme::{
        preset::{ThemeId, ThemePreset},
        registry::ThemeRegistry,
    },
};

/// Overrides [`EngineConfig::seed`].
pub const ENV_SEED: &str = "AURORA_SEED";
/// Overrides [`EngineConfig::landing_mode`] (`1`/`true`/`0`/`false`).
pub const ENV_LANDING_MODE: &str = "AURORA_LANDING_MODE";
/// Overrides [`EngineConfig::low_fps_threshold`].
pub const ENV_LOW_FPS_THRESHOLD: &str = "AURORA_LOW_FPS_THRESHOLD";
/// Overrides [`EngineConfig::initial_theme`].
pub const ENV_INITIAL_THEME: &str = "AURORA_INITIAL_THEME";

/// What happens after the engine degrades to low-performance mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PerformancePolicy {
    /// Stay degraded for the lifetime of the renderer.
    #[default]
    OneWay,
    /// Restore full quality after `sustain_windows` consecutive sampling windows at or above
    /// `recover_fps`.
    Recover {
        /// Frame rate that counts as healthy again.
        recover_fps: u32,
        /// Consecutive healthy windows required.
        sustain_windows: u32,
    },
}

/// Tunables for a [`crate::Renderer`]. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Theme used when the host attribute is absent or unresolvable.
    pub initial_theme: String,
    /// Reduced-motion mode: slower blobs and fog.
    pub landing_mode: bool,
    /// Blob generator seed; random when `None`.
    pub seed: Option<u64>,
    /// Fraction of the remaining distance the render config covers per frame.
    pub lerp_speed: f64,
    /// Animation time added per frame.
    pub time_step: f64,
    /// Sampled frame rates below this degrade quality.
    pub low_fps_threshold: u32,
    /// Length of one FPS sampling window, host milliseconds.
    pub fps_window_ms: u64,
    /// Floor for the halved blob count in low-performance mode.
    pub min_degraded_blobs: u32,
    /// Degradation policy.
    pub performance_policy: PerformancePolicy,
    /// Blob speed multiplier in landing mode.
    pub landing_speed_factor: f64,
    /// Fog drift multiplier in landing mode.
    pub landing_fog_factor: f64,
    /// Radius added to every shockwave per frame.
    pub shockwave_growth: f64,
    /// Alpha removed from every shockwave per frame.
    pub shockwave_decay: f64,
    /// Ring stroke width in pixels.
    pub shockwave_line_width: f64,
    /// Fraction of the remaining distance the cursor covers per frame.
    pub cursor_smoothing: f64,
    /// Cursor layer scale applied on pointer-down.
    pub cursor_pulse_scale: f64,
    /// How long the pulse lasts, host milliseconds.
    pub cursor_pulse_ms: u64,
    /// Replacement presets keyed by theme.
    pub presets: BTreeMap<ThemeId, ThemePreset>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_theme: ThemeId::Calm.id().to_string(),
            landing_mode: false,
            seed: None,
            lerp_speed: 0.03,
            time_step: 0.01,
            low_fps_threshold: 20,
            fps_window_ms: 1000,
            min_degraded_blobs: 3,
            performance_policy: PerformancePolicy::OneWay,
            landing_speed_factor: 0.3,
            landing_fog_factor: 0.5,
            shockwave_growth: 5.0,
            shockwave_decay: 0.02,
            shockwave_line_width: 2.0,
            cursor_smoothing: 0.15,
            cursor_pulse_scale: 0.98,
            cursor_pulse_ms: 150,
            presets: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config file.
    pub fn from_json_path(path: &Path) -> AuroraResult<Self> {
        let f = File::open(path).map_err(|e| {
            AuroraError::config(format!("open config '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| AuroraError::serde(format!("parse config '{}': {e}", path.display())))
    }

    /// Apply `AURORA_*` process environment overrides.
    pub fn with_env_overrides(self) -> AuroraResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `AURORA_*` overrides from an arbitrary lookup.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AuroraResult<Self> {
        if let Some(v) = lookup(ENV_SEED) {
            let seed = v
                .trim()
                .parse::<u64>()
                .map_err(|e| AuroraError::config(format!("{ENV_SEED}='{v}': {e}")))?;
            self.seed = Some(seed);
        }
        if let Some(v) = lookup(ENV_LANDING_MODE) {
            self.landing_mode = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(AuroraError::config(format!(
                        "{ENV_LANDING_MODE}='{v}' is not a boolean"
                    )));
                }
            };
        }
        if let Some(v) = lookup(ENV_LOW_FPS_THRESHOLD) {
            self.low_fps_threshold = v
                .trim()
                .parse::<u32>()
                .map_err(|e| AuroraError::config(format!("{ENV_LOW_FPS_THRESHOLD}='{v}': {e}")))?;
        }
        if let Some(v) = lookup(ENV_INITIAL_THEME) {
            self.initial_theme = v.trim().to_string();
        }
        Ok(self)
    }

    /// Consistency checks; run by [`crate::Renderer::new`].
    pub fn validate(&self) -> AuroraResult<()> {
        fn unit_factor(name: &str, v: f64) -> AuroraResult<()> {
            if !(v > 0.0 && v <= 1.0) {
                return Err(AuroraError::config(format!("{name} must be in (0, 1]")));
            }
            Ok(())
        }

        unit_factor("lerp_speed", self.lerp_speed)?;
        unit_factor("cursor_smoothing", self.cursor_smoothing)?;
        unit_factor("landing_speed_factor", self.landing_speed_factor)?;
        unit_factor("landing_fog_factor", self.landing_fog_factor)?;
        unit_factor("cursor_pulse_scale", self.cursor_pulse_scale)?;
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(AuroraError::config("time_step must be > 0"));
        }
        if !(self.shockwave_decay.is_finite() && self.shockwave_decay > 0.0) {
            return Err(AuroraError::config("shockwave_decay must be > 0"));
        }
        if !(self.shockwave_growth.is_finite() && self.shockwave_growth > 0.0) {
            return Err(AuroraError::config("shockwave_growth must be > 0"));
        }
        if !(self.shockwave_line_width.is_finite() && self.shockwave_line_width > 0.0) {
            return Err(AuroraError::config("shockwave_line_width must be > 0"));
        }
        if self.low_fps_threshold == 0 {
            return Err(AuroraError::config("low_fps_threshold must be > 0"));
        }
        if self.fps_window_ms == 0 {
            return Err(AuroraError::config("fps_window_ms must be > 0"));
        }
        if self.min_degraded_blobs == 0 {
            return Err(AuroraError::config("min_degraded_blobs must be > 0"));
        }
        if let PerformancePolicy::Recover {
            recover_fps,
            sustain_windows,
        } = self.performance_policy
        {
            if recover_fps < self.low_fps_threshold {
                return Err(AuroraError::config(
                    "performance_policy.recover_fps must be >= low_fps_threshold",
                ));
            }
            if sustain_windows == 0 {
                return Err(AuroraError::config(
                    "performance_policy.sustain_windows must be > 0",
                ));
            }
        }
        Ok(())
    }

    /// Registry with this config's preset overrides applied.
    pub fn registry(&self) -> AuroraResult<ThemeRegistry> {
        ThemeRegistry::with_overrides(&self.presets)
    }
}

use std::{sync::mpsc, time::Duration};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use tracing::{debug, error, info, warn};

use crate::{
    config::EngineConfig,
    engine::{
        EventSender, HostEvent,
        entities::{Blob, Cursor, FogLayer, Shockwave},
        perf::{FpsSample, PerformanceGovernor, PerformanceTransition},
    },
    foundation::{
        color::Hsla,
        core::{Point, Viewport},
        error::{AuroraError, AuroraResult},
    },
    host::{GLOW_COLOR_PROPERTY, Host},
    render::backend::{BackendKind, BlobPaint, FogBand, FrameBackend, Ring, create_backend},
    theme::{
        preset::{RenderConfig, ThemeId, ThemePreset},
        registry::ThemeRegistry,
    },
};

const BLOB_VELOCITY_SCALE: f64 = 100.0;
const BLOB_CENTER_LIGHTNESS: f64 = 0.6;
const BLOB_RIM_LIGHTNESS: f64 = 0.2;
const FOG_HALF_HEIGHT: f64 = 100.0;
const FOG_SHIFT_AMPLITUDE: f64 = 100.0;
const FOG_SHIFT_RATE: f64 = 0.2;
const FOG_SATURATION: f64 = 0.3;
const FOG_LIGHTNESS: f64 = 0.7;
const FOG_ALPHA: f64 = 0.08;
const GLOW_SATURATION: f64 = 1.0;
const GLOW_LIGHTNESS: f64 = 0.7;
const GLOW_ALPHA: f64 = 0.8;

/// Renderer lifecycle. There is no stopped state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed; [`Renderer::start`] has not succeeded yet.
    Uninitialized,
    /// Started; the host drives [`Renderer::frame`] indefinitely.
    Running,
}

/// Everything the frame step mutates.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenderState {
    current_theme: ThemeId,
    render_config: RenderConfig,
    blobs: Vec<Blob>,
    fog_layers: [FogLayer; 3],
    shockwaves: Vec<Shockwave>,
    cursor: Cursor,
    viewport: Viewport,
    time: f64,
    low_performance: bool,
    #[serde(skip)]
    cursor_pulse_until: Option<Duration>,
}

impl RenderState {
    /// Active theme.
    pub fn current_theme(&self) -> ThemeId {
        self.current_theme
    }

    /// Interpolated working copy of the active preset.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Current blob batch.
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// The three fog layers.
    pub fn fog_layers(&self) -> &[FogLayer; 3] {
        &self.fog_layers
    }

    /// Live shockwaves, oldest first.
    pub fn shockwaves(&self) -> &[Shockwave] {
        &self.shockwaves
    }

    /// Cursor glow position and target.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Surface size the blobs were generated for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Elapsed animation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Whether quality is degraded.
    pub fn low_performance(&self) -> bool {
        self.low_performance
    }

    fn regenerate_blobs(&mut self, rng: &mut Pcg64, preset: &ThemePreset, min_degraded: u32) {
        let count = blob_count(preset.blob_count, self.low_performance, min_degraded);
        self.blobs = (0..count)
            .map(|_| Blob::random(rng, self.viewport))
            .collect();
    }
}

/// Blobs per batch: the preset count, or half of it (at least `min_degraded`, at most the
/// preset count) in low-performance mode.
pub(crate) fn blob_count(preset_count: u32, low_performance: bool, min_degraded: u32) -> usize {
    let n = if low_performance {
        (preset_count / 2).max(min_degraded).min(preset_count)
    } else {
        preset_count
    };
    n as usize
}

/// Animated background renderer.
///
/// Owned explicitly by whatever composes the page. [`Renderer::start`] moves it from
/// [`Lifecycle::Uninitialized`] to [`Lifecycle::Running`]; after that the host calls
/// [`Renderer::frame`] once per display refresh for as long as it lives. There is no stop.
pub struct Renderer {
    config: EngineConfig,
    registry: ThemeRegistry,
    fallback_theme: ThemeId,
    landing_mode: bool,
    rng: Pcg64,
    governor: PerformanceGovernor,
    backend: Option<Box<dyn FrameBackend>>,
    state: Option<RenderState>,
    events_tx: mpsc::Sender<HostEvent>,
    events_rx: mpsc::Receiver<HostEvent>,
    frames_rendered: u64,
}

impl Renderer {
    /// Validate `config` and build an uninitialized renderer.
    pub fn new(config: EngineConfig) -> AuroraResult<Self> {
        config.validate()?;
        let registry = config.registry()?;
        let fallback_theme = registry.resolve(&config.initial_theme).ok_or_else(|| {
            AuroraError::config(format!(
                "initial_theme '{}' is not a registered theme",
                config.initial_theme
            ))
        })?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let governor = PerformanceGovernor::new(
            config.performance_policy,
            config.low_fps_threshold,
            Duration::from_millis(config.fps_window_ms),
        );
        let (events_tx, events_rx) = mpsc::channel();
        Ok(Self {
            landing_mode: config.landing_mode,
            config,
            registry,
            fallback_theme,
            rng: Pcg64::seed_from_u64(seed),
            governor,
            backend: None,
            state: None,
            events_tx,
            events_rx,
            frames_rendered: 0,
        })
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        if self.state.is_some() {
            Lifecycle::Running
        } else {
            Lifecycle::Uninitialized
        }
    }

    /// Simulation state; `None` until started.
    pub fn state(&self) -> Option<&RenderState> {
        self.state.as_ref()
    }

    /// Theme registry in use.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Effective configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether landing (reduced-motion) mode is on.
    pub fn landing_mode(&self) -> bool {
        self.landing_mode
    }

    /// Most recent FPS sample.
    pub fn last_fps_sample(&self) -> Option<FpsSample> {
        self.governor.last_sample()
    }

    /// Frames rendered since start.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Handle for queueing events from other parts of the page.
    pub fn event_sender(&self) -> EventSender {
        EventSender::new(self.events_tx.clone())
    }

    /// Acquire the surface, build the initial state and request the first frame.
    ///
    /// A missing surface aborts start entirely: the error is logged, nothing is mounted and
    /// the renderer stays uninitialized. Starting a running renderer is a no-op.
    #[tracing::instrument(skip_all)]
    pub fn start(&mut self, host: &mut dyn Host) -> AuroraResult<()> {
        if self.state.is_some() {
            debug!("renderer already running");
            return Ok(());
        }

        let Some(viewport) = host.surface() else {
            error!("drawing surface not found; renderer not started");
            return Err(AuroraError::surface("drawing surface not found"));
        };
        let backend = match create_backend(BackendKind::Cpu, viewport) {
            Ok(b) => b,
            Err(e) => {
                error!(error = %e, "drawing surface unusable; renderer not started");
                return Err(e);
            }
        };

        let theme = host
            .theme_attribute()
            .and_then(|name| self.registry.resolve(&name))
            .unwrap_or(self.fallback_theme);
        let preset = *self.registry.preset(theme);

        let mut state = RenderState {
            current_theme: theme,
            render_config: RenderConfig::from_preset(&preset),
            blobs: Vec::new(),
            fog_layers: FogLayer::initial_set(),
            shockwaves: Vec::new(),
            cursor: Cursor::default(),
            viewport,
            time: 0.0,
            low_performance: self.governor.is_low_performance(),
            cursor_pulse_until: None,
        };
        state.regenerate_blobs(&mut self.rng, &preset, self.config.min_degraded_blobs);

        host.mount_cursor_layer();
        self.governor.reset_window(host.now());
        self.backend = Some(backend);
        self.state = Some(state);

        info!(
            theme = theme.id(),
            width = viewport.width,
            height = viewport.height,
            landing_mode = self.landing_mode,
            "renderer started"
        );
        host.request_frame();
        Ok(())
    }

    /// Switch to the theme named `name` (canonical name or alias) and regenerate blobs.
    ///
    /// Unknown names, and calls before start, leave everything unchanged and return `false`.
    pub fn set_theme(&mut self, name: &str) -> bool {
        let Some(id) = self.registry.resolve(name) else {
            debug!(theme = name, "ignoring unknown theme");
            return false;
        };
        let Some(state) = self.state.as_mut() else {
            debug!(theme = name, "ignoring theme change before start");
            return false;
        };
        state.current_theme = id;
        let preset = *self.registry.preset(id);
        state.regenerate_blobs(&mut self.rng, &preset, self.config.min_degraded_blobs);
        info!(theme = id.id(), requested = name, "theme changed");
        true
    }

    /// Rebind to a new surface size and regenerate blobs.
    pub fn resize(&mut self, viewport: Viewport) -> AuroraResult<()> {
        let (Some(state), Some(backend)) = (self.state.as_mut(), self.backend.as_mut()) else {
            return Err(AuroraError::lifecycle("resize before start"));
        };
        backend.resize(viewport)?;
        state.viewport = viewport;
        let preset = *self.registry.preset(state.current_theme);
        state.regenerate_blobs(&mut self.rng, &preset, self.config.min_degraded_blobs);
        debug!(width = viewport.width, height = viewport.height, "resized");
        Ok(())
    }

    /// Update the cursor target only; the displayed cursor follows during frames.
    pub fn pointer_move(&mut self, at: Point) {
        if let Some(state) = self.state.as_mut() {
            state.cursor.target = at;
        }
    }

    /// Spawn a shockwave at `at` and pulse the cursor layer.
    pub fn pointer_down(&mut self, host: &mut dyn Host, at: Point) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.shockwaves.push(Shockwave::new(at));
        host.set_cursor_layer_scale(self.config.cursor_pulse_scale);
        state.cursor_pulse_until =
            Some(host.now() + Duration::from_millis(self.config.cursor_pulse_ms));
    }

    /// Toggle landing (reduced-motion) mode.
    pub fn set_landing_mode(&mut self, enabled: bool) {
        self.landing_mode = enabled;
        info!(enabled, "landing mode");
    }

    /// Apply one host event immediately.
    pub fn handle_event(&mut self, host: &mut dyn Host, event: HostEvent) -> AuroraResult<()> {
        match event {
            HostEvent::Resize(viewport) => self.resize(viewport)?,
            HostEvent::PointerMove(at) => self.pointer_move(at),
            HostEvent::PointerDown(at) => self.pointer_down(host, at),
            HostEvent::ThemeChanged(name) => {
                self.set_theme(&name);
            }
            HostEvent::LandingMode(enabled) => self.set_landing_mode(enabled),
        }
        Ok(())
    }

    /// Run one frame step and present the result.
    ///
    /// Queued events that fail to apply are logged and skipped; the frame still runs.
    pub fn frame(&mut self, host: &mut dyn Host) -> AuroraResult<()> {
        if self.state.is_none() {
            return Err(AuroraError::lifecycle("frame requested before start"));
        }
        while let Ok(event) = self.events_rx.try_recv() {
            if let Err(e) = self.handle_event(host, event) {
                warn!(error = %e, "queued host event rejected");
            }
        }

        let now = host.now();
        self.sample_performance(now);

        let (Some(state), Some(backend)) = (self.state.as_mut(), self.backend.as_mut()) else {
            return Err(AuroraError::lifecycle("frame requested before start"));
        };
        let target = self.registry.preset(state.current_theme);
        state.render_config.approach(target, self.config.lerp_speed);
        state.time += self.config.time_step;
        let cfg = state.render_config;
        let time = state.time;
        let viewport = state.viewport;

        backend.fill_background(cfg.background[0].to_rgb8(), cfg.background[1].to_rgb8());

        if !state.low_performance {
            let drift = if self.landing_mode {
                self.config.landing_fog_factor
            } else {
                1.0
            };
            for (i, layer) in state.fog_layers.iter_mut().enumerate() {
                layer.drift(drift);
                backend.fog_band(&FogBand {
                    center_y: layer.vertical_fraction * viewport.height_f64(),
                    half_height: FOG_HALF_HEIGHT,
                    x_shift: (time * FOG_SHIFT_RATE + i as f64).sin() * FOG_SHIFT_AMPLITUDE,
                    color: Hsla::new(cfg.hue_b, FOG_SATURATION, FOG_LIGHTNESS, FOG_ALPHA),
                });
            }
        }

        let speed_mult = if self.landing_mode {
            self.config.landing_speed_factor
        } else {
            1.0
        };
        let step = cfg.animation_speed * BLOB_VELOCITY_SCALE * speed_mult;
        let saturation = cfg.saturation / 100.0;
        for (i, blob) in state.blobs.iter_mut().enumerate() {
            blob.advance(step, viewport);
            let hue = blob.hue(cfg.hue_a, time, i);
            backend.blob(&BlobPaint {
                center: blob.position,
                radius: blob.radius,
                inner: Hsla::new(hue, saturation, BLOB_CENTER_LIGHTNESS, cfg.blob_opacity),
                outer: Hsla::new(hue, saturation, BLOB_RIM_LIGHTNESS, 0.0),
            });
        }

        let (growth, decay) = (self.config.shockwave_growth, self.config.shockwave_decay);
        state.shockwaves.retain_mut(|wave| wave.step(growth, decay));
        let rings: Vec<Ring> = state.shockwaves.iter().map(Shockwave::ring).collect();
        backend.rings(&rings, self.config.shockwave_line_width)?;

        state.cursor.follow(self.config.cursor_smoothing);
        let glow = Hsla::new(cfg.hue_a, GLOW_SATURATION, GLOW_LIGHTNESS, GLOW_ALPHA);
        host.set_style_property(GLOW_COLOR_PROPERTY, &glow.to_css());
        host.move_cursor_marker(state.cursor.position);
        if let Some(until) = state.cursor_pulse_until
            && now >= until
        {
            host.set_cursor_layer_scale(1.0);
            state.cursor_pulse_until = None;
        }

        host.present(backend.frame());
        self.frames_rendered += 1;
        host.request_frame();
        Ok(())
    }

    fn sample_performance(&mut self, now: Duration) {
        let Some(transition) = self.governor.tick(now) else {
            return;
        };
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let fps = self.governor.last_sample().map(|s| s.fps).unwrap_or_default();
        match transition {
            PerformanceTransition::Degraded => {
                warn!(fps, "low frame rate detected; reducing quality");
            }
            PerformanceTransition::Recovered => {
                info!(fps, "frame rate recovered; restoring quality");
            }
        }
        state.low_performance = self.governor.is_low_performance();
        let preset = *self.registry.preset(state.current_theme);
        state.regenerate_blobs(&mut self.rng, &preset, self.config.min_degraded_blobs);
    }
}

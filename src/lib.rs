//! Aurora is an animated procedural background renderer.
//!
//! A [`Renderer`] owns a premultiplied RGBA8 frame buffer, a [`ThemeRegistry`] and the
//! simulation state (blobs, fog layers, shockwaves, cursor). The embedding environment
//! implements [`Host`]: it provides the drawing surface, the clock and the outbound
//! channels (presented frames, the `--glow-color` style property, the cursor marker).
//!
//! # Frame step
//!
//! 1. **Sample**: count frames per host second and degrade to low-performance mode when the
//!    rate drops below the configured threshold.
//! 2. **Interpolate**: move the working [`RenderConfig`] a fixed fraction toward the active
//!    [`ThemePreset`].
//! 3. **Draw**: background gradient, fog bands (screen), blobs (lighten), shockwave rings.
//! 4. **Sync**: smooth the cursor, publish the glow color, present, request the next frame.
//!
//! The lifecycle is `Uninitialized -> Running`. There is no stop: once [`Renderer::start`]
//! succeeds the host keeps calling [`Renderer::frame`] for as long as it lives.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic with a seed**: given [`EngineConfig::seed`] and a host clock, frames are
//!   reproducible byte for byte.
#![forbid(unsafe_code)]

mod config;
mod engine;
mod foundation;
mod host;
mod render;
mod theme;

pub use config::{ENV_INITIAL_THEME, ENV_LANDING_MODE, ENV_LOW_FPS_THRESHOLD, ENV_SEED};
pub use config::{EngineConfig, PerformancePolicy};
pub use engine::entities::{Blob, Cursor, FogLayer, Shockwave};
pub use engine::perf::{FpsSample, PerformanceGovernor, PerformanceTransition};
pub use engine::renderer::{Lifecycle, RenderState, Renderer};
pub use engine::{EventSender, HostEvent};
pub use foundation::color::{Hsla, Rgb8, RgbF};
pub use foundation::core::{Point, Vec2, Viewport};
pub use foundation::error::{AuroraError, AuroraResult};
pub use host::{GLOW_COLOR_PROPERTY, HeadlessHost, Host, THEME_ATTRIBUTE};
pub use render::backend::{
    BackendKind, BlobPaint, FogBand, FrameBackend, FrameRGBA, Ring, create_backend,
};
pub use render::cpu::CpuBackend;
pub use theme::preset::{RenderConfig, ThemeId, ThemePreset};
pub use theme::registry::ThemeRegistry;

use std::{collections::BTreeMap, time::Duration};

use crate::{
    foundation::core::{Point, Viewport},
    render::backend::FrameRGBA,
};

/// Root attribute carrying the shared theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Style property carrying the glow color derived from the active hue.
pub const GLOW_COLOR_PROPERTY: &str = "--glow-color";

/// The environment a [`crate::Renderer`] draws into.
///
/// A browser shim maps these onto the canvas, the document root and `requestAnimationFrame`;
/// [`HeadlessHost`] keeps everything in memory.
pub trait Host {
    /// Size of the drawing surface, or `None` when there is none.
    fn surface(&mut self) -> Option<Viewport>;

    /// Current value of the shared theme attribute.
    fn theme_attribute(&self) -> Option<String>;

    /// Monotonic host clock.
    fn now(&self) -> Duration;

    /// Create the cursor container and its marker.
    fn mount_cursor_layer(&mut self);

    /// Move the cursor marker to `at` (surface pixels).
    fn move_cursor_marker(&mut self, at: Point);

    /// Scale the cursor container; `1.0` is the resting size.
    fn set_cursor_layer_scale(&mut self, scale: f64);

    /// Publish a style custom property for other stylesheets.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Show a finished frame.
    fn present(&mut self, frame: &FrameRGBA);

    /// Ask to be driven again on the next display refresh.
    fn request_frame(&mut self);
}

/// In-memory [`Host`] with a manually advanced clock.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    surface: Option<Viewport>,
    attributes: BTreeMap<String, String>,
    clock: Duration,
    style: BTreeMap<String, String>,
    cursor_layer_mounts: u32,
    marker: Option<Point>,
    layer_scale: f64,
    presented: u64,
    frame_requests: u64,
    last_frame: Option<FrameRGBA>,
}

impl HeadlessHost {
    /// Host with a surface of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            surface: Some(viewport),
            attributes: BTreeMap::new(),
            clock: Duration::ZERO,
            style: BTreeMap::new(),
            cursor_layer_mounts: 0,
            marker: None,
            layer_scale: 1.0,
            presented: 0,
            frame_requests: 0,
            last_frame: None,
        }
    }

    /// Host whose page has no drawing surface.
    pub fn without_surface() -> Self {
        Self {
            surface: None,
            ..Self::new(Viewport::new(0, 0))
        }
    }

    /// Builder: set the shared theme attribute.
    pub fn with_theme_attribute(mut self, name: impl Into<String>) -> Self {
        self.set_theme_attribute(name);
        self
    }

    /// Set the shared theme attribute.
    pub fn set_theme_attribute(&mut self, name: impl Into<String>) {
        self.attributes
            .insert(THEME_ATTRIBUTE.to_string(), name.into());
    }

    /// Replace the surface (or remove it).
    pub fn set_surface(&mut self, surface: Option<Viewport>) {
        self.surface = surface;
    }

    /// Advance the clock.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
    }

    /// Value of a published style property.
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Last cursor marker position.
    pub fn cursor_marker(&self) -> Option<Point> {
        self.marker
    }

    /// How many times the cursor layer was mounted.
    pub fn cursor_layer_mounts(&self) -> u32 {
        self.cursor_layer_mounts
    }

    /// Current cursor layer scale.
    pub fn cursor_layer_scale(&self) -> f64 {
        self.layer_scale
    }

    /// Frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Frame requests received so far.
    pub fn frame_requests(&self) -> u64 {
        self.frame_requests
    }

    /// Most recently presented frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }
}

impl Host for HeadlessHost {
    fn surface(&mut self) -> Option<Viewport> {
        self.surface
    }

    fn theme_attribute(&self) -> Option<String> {
        self.attributes.get(THEME_ATTRIBUTE).cloned()
    }

    fn now(&self) -> Duration {
        self.clock
    }

    fn mount_cursor_layer(&mut self) {
        self.cursor_layer_mounts += 1;
    }

    fn move_cursor_marker(&mut self, at: Point) {
        self.marker = Some(at);
    }

    fn set_cursor_layer_scale(&mut self, scale: f64) {
        self.layer_scale = scale;
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    fn present(&mut self, frame: &FrameRGBA) {
        self.presented += 1;
        if let Some(last) = self.last_frame.as_mut() {
            last.clone_from(frame);
        } else {
            self.last_frame = Some(frame.clone());
        }
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }
}

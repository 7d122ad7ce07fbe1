use crate::foundation::error::{AuroraError, AuroraResult};

pub use kurbo::{Point, Vec2};

/// Largest surface side the CPU rasterizer accepts.
pub(crate) const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;

/// Size of the drawing surface in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Construct a viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as `f64`, for simulation math.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for simulation math.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// `true` when either side is zero; nothing is rasterized in that case.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Reject surfaces the rasterizer cannot address.
    pub fn ensure_rasterizable(self) -> AuroraResult<Self> {
        if self.width > MAX_SURFACE_SIDE || self.height > MAX_SURFACE_SIDE {
            return Err(AuroraError::surface(format!(
                "surface {}x{} exceeds {MAX_SURFACE_SIDE} px per side",
                self.width, self.height
            )));
        }
        Ok(self)
    }
}

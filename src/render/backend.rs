use crate::{
    foundation::{
        color::{Hsla, Rgb8},
        core::{Point, Viewport},
        error::AuroraResult,
    },
    render::cpu::CpuBackend,
};

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Transparent frame of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            data: vec![0; viewport.rgba8_len()],
            premultiplied: true,
        }
    }

    /// Pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Horizontal fog band: a vertical transparent → `color` → transparent ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogBand {
    /// Band centre, pixels from the top.
    pub center_y: f64,
    /// Half the band height.
    pub half_height: f64,
    /// Horizontal displacement of the band's left edge.
    pub x_shift: f64,
    /// Peak color; `a` is the alpha at the centre line.
    pub color: Hsla,
}

/// Radial glow from `inner` at the centre to `outer` at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobPaint {
    /// Centre.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
    /// Color at the centre.
    pub inner: Hsla,
    /// Color at the rim.
    pub outer: Hsla,
}

/// White circle outline at the given alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Centre.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Stroke alpha, 0..=1.
    pub alpha: f64,
}

/// Drawing surface for the frame passes.
pub trait FrameBackend {
    /// Reallocate for a new surface size. Contents are undefined afterwards.
    fn resize(&mut self, viewport: Viewport) -> AuroraResult<()>;

    /// Opaque vertical gradient over the whole frame.
    fn fill_background(&mut self, top: Rgb8, bottom: Rgb8);

    /// Screen-blend one fog band.
    fn fog_band(&mut self, band: &FogBand);

    /// Lighten-blend one blob.
    fn blob(&mut self, blob: &BlobPaint);

    /// Stroke shockwave rings over the frame.
    fn rings(&mut self, rings: &[Ring], line_width: f64) -> AuroraResult<()>;

    /// The frame as drawn so far.
    fn frame(&self) -> &FrameRGBA;
}

/// Available rasterizers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Software rasterizer.
    #[default]
    Cpu,
}

/// Create a backend sized for `viewport`.
pub fn create_backend(kind: BackendKind, viewport: Viewport) -> AuroraResult<Box<dyn FrameBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuBackend::new(viewport)?)),
    }
}

use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        color::Rgb8,
        core::Viewport,
        error::{AuroraError, AuroraResult},
        math::{lerp, unit_to_u8},
    },
    render::{
        backend::{BlobPaint, FogBand, FrameBackend, FrameRGBA, Ring},
        composite::{self, BlendMode, PremulRgba8},
    },
};

const RING_TOLERANCE: f64 = 0.1;

/// Software rasterizer over a premultiplied RGBA8 frame.
///
/// Gradients and blend modes are evaluated per pixel here; ring strokes go through
/// `vello_cpu` into an overlay that is composited source-over.
pub struct CpuBackend {
    viewport: Viewport,
    frame: FrameRGBA,
    overlay: Option<vello_cpu::Pixmap>,
}

impl CpuBackend {
    /// Allocate a frame for `viewport`.
    pub fn new(viewport: Viewport) -> AuroraResult<Self> {
        let viewport = viewport.ensure_rasterizable()?;
        Ok(Self {
            viewport,
            frame: FrameRGBA::new(viewport),
            overlay: None,
        })
    }

    fn surface_dims(&self) -> AuroraResult<(u16, u16)> {
        let w: u16 = self
            .viewport
            .width
            .try_into()
            .map_err(|_| AuroraError::surface("surface width exceeds u16"))?;
        let h: u16 = self
            .viewport
            .height
            .try_into()
            .map_err(|_| AuroraError::surface("surface height exceeds u16"))?;
        Ok((w, h))
    }

    fn row_mut(&mut self, y: usize, x0: usize, x1: usize) -> &mut [u8] {
        let stride = self.viewport.width as usize * 4;
        let start = y * stride;
        &mut self.frame.data[start + x0 * 4..start + x1 * 4]
    }
}

impl FrameBackend for CpuBackend {
    fn resize(&mut self, viewport: Viewport) -> AuroraResult<()> {
        let viewport = viewport.ensure_rasterizable()?;
        if viewport != self.viewport {
            self.viewport = viewport;
            self.frame = FrameRGBA::new(viewport);
            self.overlay = None;
        }
        Ok(())
    }

    fn fill_background(&mut self, top: Rgb8, bottom: Rgb8) {
        let (w, h) = (self.viewport.width as usize, self.viewport.height as usize);
        if w == 0 || h == 0 {
            return;
        }
        for y in 0..h {
            let t = (y as f64 + 0.5) / h as f64;
            let ch = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round() as u8;
            let px = [ch(top.r, bottom.r), ch(top.g, bottom.g), ch(top.b, bottom.b), 255];
            for d in self.row_mut(y, 0, w).chunks_exact_mut(4) {
                d.copy_from_slice(&px);
            }
        }
    }

    fn fog_band(&mut self, band: &FogBand) {
        let (w, h) = (self.viewport.width_f64(), self.viewport.height_f64());
        if self.viewport.is_empty() || band.half_height <= 0.0 || band.color.a <= 0.0 {
            return;
        }
        let x0 = band.x_shift.round().clamp(0.0, w) as usize;
        let x1 = (band.x_shift + w).round().clamp(0.0, w) as usize;
        if x0 >= x1 {
            return;
        }
        let top = band.center_y - band.half_height;
        let y0 = top.floor().clamp(0.0, h) as usize;
        let y1 = (band.center_y + band.half_height).ceil().clamp(0.0, h) as usize;

        let [r, g, b] = band.color.to_rgb_unit();
        for y in y0..y1 {
            let pos = ((y as f64 + 0.5) - top) / (2.0 * band.half_height);
            if !(0.0..=1.0).contains(&pos) {
                continue;
            }
            let ramp = 1.0 - (pos - 0.5).abs() * 2.0;
            let src = premul_unit(r, g, b, band.color.a * ramp);
            composite::blend_span(BlendMode::Screen, self.row_mut(y, x0, x1), src);
        }
    }

    fn blob(&mut self, blob: &BlobPaint) {
        if self.viewport.is_empty() || blob.radius <= 0.0 {
            return;
        }
        let (w, h) = (self.viewport.width_f64(), self.viewport.height_f64());
        let c = blob.center;
        let x0 = (c.x - blob.radius).floor().clamp(0.0, w) as usize;
        let x1 = (c.x + blob.radius).ceil().clamp(0.0, w) as usize;
        let y0 = (c.y - blob.radius).floor().clamp(0.0, h) as usize;
        let y1 = (c.y + blob.radius).ceil().clamp(0.0, h) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let inner = blob.inner.to_rgb_unit();
        let outer = blob.outer.to_rgb_unit();
        let inv_r = 1.0 / blob.radius;
        for y in y0..y1 {
            let dy = y as f64 + 0.5 - c.y;
            let row = self.row_mut(y, x0, x1);
            for (i, d) in row.chunks_exact_mut(4).enumerate() {
                let dx = (x0 + i) as f64 + 0.5 - c.x;
                let t = (dx * dx + dy * dy).sqrt() * inv_r;
                if t >= 1.0 {
                    continue;
                }
                let src = premul_unit(
                    lerp(inner[0], outer[0], t),
                    lerp(inner[1], outer[1], t),
                    lerp(inner[2], outer[2], t),
                    lerp(blob.inner.a, blob.outer.a, t),
                );
                let out = composite::blend(BlendMode::Lighten, [d[0], d[1], d[2], d[3]], src);
                d.copy_from_slice(&out);
            }
        }
    }

    fn rings(&mut self, rings: &[Ring], line_width: f64) -> AuroraResult<()> {
        if rings.is_empty() || self.viewport.is_empty() {
            return Ok(());
        }
        let (w, h) = self.surface_dims()?;

        let overlay = self
            .overlay
            .get_or_insert_with(|| vello_cpu::Pixmap::new(w, h));
        clear_pixmap(overlay);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(line_width));
        for ring in rings {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                255,
                255,
                255,
                unit_to_u8(ring.alpha),
            ));
            let circle = vello_cpu::kurbo::Circle::new(
                vello_cpu::kurbo::Point::new(ring.center.x, ring.center.y),
                ring.radius,
            );
            ctx.stroke_path(&circle.to_path(RING_TOLERANCE));
        }
        ctx.flush();
        ctx.render_to_pixmap(overlay);

        composite::layer_over(&mut self.frame.data, overlay.data_as_u8_slice())
    }

    fn frame(&self) -> &FrameRGBA {
        &self.frame
    }
}

fn premul_unit(r: f64, g: f64, b: f64, a: f64) -> PremulRgba8 {
    let a = a.clamp(0.0, 1.0);
    [
        unit_to_u8(r * a),
        unit_to_u8(g * a),
        unit_to_u8(b * a),
        unit_to_u8(a),
    ]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

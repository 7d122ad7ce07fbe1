use crate::foundation::{
    error::{AuroraError, AuroraResult},
    math::mul_div255_u16,
};

pub(crate) type PremulRgba8 = [u8; 4];

/// Separable blend modes used by the frame passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlendMode {
    /// Source-over.
    Over,
    /// `1 - (1 - s)(1 - d)`; fog bands.
    Screen,
    /// Channel-wise max; overlapping blobs brighten instead of occluding.
    Lighten,
}

pub(crate) fn blend(mode: BlendMode, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match mode {
        BlendMode::Over => over(dst, src),
        BlendMode::Screen => screen(dst, src),
        BlendMode::Lighten => lighten(dst, src),
    }
}

/// Premultiplied source-over: `Sc + Dc*(1-Sa)`.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv_sa = 255 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = sat_u8(u16::from(src[i]) + mul_div255_u16(u16::from(dst[i]), inv_sa));
    }
    out
}

/// Premultiplied screen: `Sc + Dc - Sc*Dc`.
pub(crate) fn screen(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let mut out = [0u8; 4];
    for i in 0..4 {
        let s = u16::from(src[i]);
        let d = u16::from(dst[i]);
        out[i] = sat_u8(s + d - mul_div255_u16(s, d));
    }
    out
}

/// Premultiplied lighten: `max(Sc*Da, Dc*Sa) + Sc*(1-Da) + Dc*(1-Sa)`.
pub(crate) fn lighten(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let sa = u16::from(src[3]);
    let da = u16::from(dst[3]);
    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = u16::from(src[i]);
        let d = u16::from(dst[i]);
        let mixed = mul_div255_u16(s, da).max(mul_div255_u16(d, sa));
        out[i] = sat_u8(mixed + mul_div255_u16(s, 255 - da) + mul_div255_u16(d, 255 - sa));
    }
    out[3] = sat_u8(sa + da - mul_div255_u16(sa, da));
    out
}

/// Blend one premultiplied color over every pixel of a packed RGBA8 span.
pub(crate) fn blend_span(mode: BlendMode, dst: &mut [u8], src: PremulRgba8) {
    if src[3] == 0 {
        return;
    }
    for d in dst.chunks_exact_mut(4) {
        let out = blend(mode, [d[0], d[1], d[2], d[3]], src);
        d.copy_from_slice(&out);
    }
}

/// Composite a same-sized premultiplied layer source-over onto `dst`.
pub(crate) fn layer_over(dst: &mut [u8], layer: &[u8]) -> AuroraResult<()> {
    if dst.len() != layer.len() || !dst.len().is_multiple_of(4) {
        return Err(AuroraError::render(format!(
            "layer of {} bytes does not match frame of {} bytes",
            layer.len(),
            dst.len()
        )));
    }
    for (d, l) in dst.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [l[0], l[1], l[2], l[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn sat_u8(v: u16) -> u8 {
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

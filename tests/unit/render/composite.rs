use super::*;

#[test]
fn over_translucent_src_keeps_part_of_dst() {
    let dst = [0, 0, 200, 255];
    let src = [102, 0, 0, 102];
    assert_eq!(over(dst, src), [102, 0, 120, 255]);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn transparent_src_is_noop_for_every_mode() {
    let dst = [10, 20, 30, 255];
    for mode in [BlendMode::Over, BlendMode::Screen, BlendMode::Lighten] {
        assert_eq!(blend(mode, dst, [0, 0, 0, 0]), dst);
    }
}

#[test]
fn screen_never_darkens() {
    let dst = [40, 80, 120, 255];
    let src = [30, 10, 60, 90];
    let out = screen(dst, src);
    for i in 0..4 {
        assert!(out[i] >= dst[i]);
    }
    assert_eq!(out[3], 255);
}

#[test]
fn screen_with_white_saturates() {
    assert_eq!(screen([10, 20, 30, 255], [255, 255, 255, 255]), [255; 4]);
}

#[test]
fn lighten_over_opaque_takes_channel_max_when_src_opaque() {
    let dst = [100, 10, 200, 255];
    let src = [50, 120, 150, 255];
    assert_eq!(lighten(dst, src), [100, 120, 200, 255]);
}

#[test]
fn lighten_keeps_brighter_dst_under_translucent_src() {
    let dst = [200, 200, 200, 255];
    let src = [40, 40, 40, 102];
    assert_eq!(lighten(dst, src), dst);
}

#[test]
fn blend_span_touches_every_pixel() {
    let mut span = [0u8, 0, 0, 255].repeat(3);
    blend_span(BlendMode::Lighten, &mut span, [9, 8, 7, 255]);
    assert_eq!(span, [9u8, 8, 7, 255].repeat(3));
}

#[test]
fn layer_over_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(layer_over(&mut dst, &[0u8; 4]).is_err());
}

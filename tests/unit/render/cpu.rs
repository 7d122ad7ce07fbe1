use super::*;
use crate::foundation::{color::Hsla, core::Point};

fn backend(w: u32, h: u32) -> CpuBackend {
    CpuBackend::new(Viewport::new(w, h)).unwrap()
}

#[test]
fn background_is_opaque_vertical_gradient() {
    let mut b = backend(4, 100);
    b.fill_background(Rgb8::new(0, 0, 0), Rgb8::new(200, 100, 50));
    let f = b.frame();
    let top = f.pixel(0, 0).unwrap();
    let bottom = f.pixel(3, 99).unwrap();
    assert_eq!(top[3], 255);
    assert_eq!(bottom[3], 255);
    assert!(top[0] < 5);
    assert!(bottom[0] > 195);
    assert_eq!(f.pixel(0, 50), f.pixel(3, 50));
}

#[test]
fn fog_band_brightens_only_inside_the_band() {
    let mut b = backend(8, 100);
    b.fill_background(Rgb8::new(10, 10, 10), Rgb8::new(10, 10, 10));
    b.fog_band(&FogBand {
        center_y: 50.0,
        half_height: 20.0,
        x_shift: 0.0,
        color: Hsla::new(190.0, 0.3, 0.7, 0.5),
    });
    let f = b.frame();
    assert_eq!(f.pixel(4, 5).unwrap(), [10, 10, 10, 255]);
    assert_eq!(f.pixel(4, 95).unwrap(), [10, 10, 10, 255]);
    let mid = f.pixel(4, 50).unwrap();
    assert!(mid[2] > 10);
    assert_eq!(mid[3], 255);
}

#[test]
fn shifted_fog_band_leaves_uncovered_columns_alone() {
    let mut b = backend(10, 20);
    b.fill_background(Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0));
    b.fog_band(&FogBand {
        center_y: 10.0,
        half_height: 10.0,
        x_shift: 5.0,
        color: Hsla::new(0.0, 0.0, 1.0, 1.0),
    });
    let f = b.frame();
    assert_eq!(f.pixel(2, 10).unwrap(), [0, 0, 0, 255]);
    assert!(f.pixel(7, 10).unwrap()[0] > 0);
}

#[test]
fn blob_is_brightest_at_centre_and_absent_outside() {
    let mut b = backend(64, 64);
    b.fill_background(Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0));
    b.blob(&BlobPaint {
        center: Point::new(32.0, 32.0),
        radius: 20.0,
        inner: Hsla::new(210.0, 0.7, 0.6, 0.4),
        outer: Hsla::new(210.0, 0.7, 0.2, 0.0),
    });
    let f = b.frame();
    let centre = f.pixel(32, 32).unwrap();
    let edge = f.pixel(32, 50).unwrap();
    assert!(centre[2] > edge[2]);
    assert_eq!(f.pixel(2, 2).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn lighten_does_not_darken_a_bright_background() {
    let mut b = backend(16, 16);
    b.fill_background(Rgb8::new(255, 255, 255), Rgb8::new(255, 255, 255));
    b.blob(&BlobPaint {
        center: Point::new(8.0, 8.0),
        radius: 8.0,
        inner: Hsla::new(0.0, 1.0, 0.2, 1.0),
        outer: Hsla::new(0.0, 1.0, 0.2, 0.0),
    });
    assert_eq!(b.frame().pixel(8, 8).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn blob_fully_outside_is_ignored() {
    let mut b = backend(8, 8);
    b.fill_background(Rgb8::new(1, 2, 3), Rgb8::new(1, 2, 3));
    let before = b.frame().clone();
    b.blob(&BlobPaint {
        center: Point::new(-100.0, -100.0),
        radius: 10.0,
        inner: Hsla::new(0.0, 1.0, 0.5, 1.0),
        outer: Hsla::new(0.0, 1.0, 0.5, 0.0),
    });
    assert_eq!(b.frame(), &before);
}

#[test]
fn no_rings_is_a_noop() {
    let mut b = backend(8, 8);
    b.fill_background(Rgb8::new(1, 2, 3), Rgb8::new(1, 2, 3));
    let before = b.frame().clone();
    b.rings(&[], 2.0).unwrap();
    assert_eq!(b.frame(), &before);
}

#[test]
fn ring_stroke_lands_on_its_circumference() {
    let mut b = backend(64, 64);
    b.fill_background(Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0));
    b.rings(
        &[Ring {
            center: Point::new(32.0, 32.0),
            radius: 20.0,
            alpha: 1.0,
        }],
        2.0,
    )
    .unwrap();
    let f = b.frame();
    assert!(f.pixel(52, 32).unwrap()[0] > 100);
    assert_eq!(f.pixel(32, 32).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn resize_reallocates_the_frame() {
    let mut b = backend(8, 8);
    b.resize(Viewport::new(3, 2)).unwrap();
    assert_eq!(b.frame().data.len(), 3 * 2 * 4);
    assert!(b.resize(Viewport::new(100_000, 2)).is_err());
}

use super::*;

#[test]
fn hex_parse_and_format_are_inverse() {
    let c = Rgb8::from_hex("#0f172a").unwrap();
    assert_eq!(c, Rgb8::new(0x0f, 0x17, 0x2a));
    assert_eq!(c.to_hex(), "#0f172a");
    assert_eq!(Rgb8::from_hex("020617").unwrap(), Rgb8::new(0x02, 0x06, 0x17));
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#fff", "#12345g", "#1234567", "blue"] {
        let err = Rgb8::from_hex(bad).unwrap_err();
        assert!(matches!(err, AuroraError::Validation(_)), "{bad}");
    }
}

#[test]
fn rgb8_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgb8::new(255, 0, 16)).unwrap();
    assert_eq!(json, "\"#ff0010\"");
    let back: Rgb8 = serde_json::from_str("\"#F1F5F9\"").unwrap();
    assert_eq!(back, Rgb8::new(0xf1, 0xf5, 0xf9));
    assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
}

#[test]
fn float_color_keeps_approaching_without_stalling() {
    let target = Rgb8::new(2, 6, 23);
    let mut c = RgbF::from(Rgb8::new(0, 0, 0));
    let mut last = c.max_channel_distance(target);
    for _ in 0..200 {
        c = c.lerp_toward(target, 0.03);
        let d = c.max_channel_distance(target);
        assert!(d < last);
        last = d;
    }
    assert_eq!(c.to_rgb8(), target);
}

#[test]
fn hsl_primaries() {
    assert_eq!(Hsla::new(0.0, 1.0, 0.5, 1.0).to_rgba8(), [255, 0, 0, 255]);
    assert_eq!(Hsla::new(120.0, 1.0, 0.5, 1.0).to_rgba8(), [0, 255, 0, 255]);
    assert_eq!(Hsla::new(240.0, 1.0, 0.5, 0.0).to_rgba8(), [0, 0, 255, 0]);
    assert_eq!(Hsla::new(-120.0, 1.0, 0.5, 1.0).to_rgba8(), [0, 0, 255, 255]);
}

#[test]
fn zero_saturation_is_grey() {
    assert_eq!(Hsla::new(210.0, 0.0, 0.6, 1.0).to_rgba8(), [153, 153, 153, 255]);
}

#[test]
fn css_notation_is_stable() {
    assert_eq!(
        Hsla::new(210.0, 1.0, 0.7, 0.8).to_css(),
        "hsla(210.0, 100%, 70%, 0.80)"
    );
}

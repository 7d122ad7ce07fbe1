/// Linear interpolation; `t = 0` yields `a`, `t = 1` yields `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Map a unit float to a `u8` channel with rounding and clamping.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
        assert!((lerp(0.0, 10.0, 0.03) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn mul_div255_rounds() {
        assert_eq!(mul_div255_u16(255, 255), 255);
        assert_eq!(mul_div255_u16(255, 0), 0);
        assert_eq!(mul_div255_u16(128, 255), 128);
        assert_eq!(mul_div255_u16(128, 128), 64);
    }

    #[test]
    fn unit_to_u8_clamps() {
        assert_eq!(unit_to_u8(-1.0), 0);
        assert_eq!(unit_to_u8(2.0), 255);
        assert_eq!(unit_to_u8(0.5), 128);
    }
}

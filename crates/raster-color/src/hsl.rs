//! HSL <-> linear RGB conversion, per CSS Color Module 4.
//!
//! These operate on de-multiplied channels in `[0, 1]` (RGB) / hue in
//! degrees, saturation and lightness in `[0, 1]` (HSL). Premultiplication
//! and gamma are handled one layer up in [`crate::color`].

/// Converts linear RGB (`[0,1]` each) to HSL (`h` in `[0, 360)`, `s`/`l` in
/// `[0, 1]`).
///
/// If the conversion lands on negative saturation (out-of-gamut RGB), the
/// hue is rotated 180° and the absolute value of `s` is kept.
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;
    let l = (min + max) / 2.0;

    let mut s = if l <= 0.0 || l >= 1.0 { 0.0 } else { (max - l) / l.min(1.0 - l) };

    let mut h = if range == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / range).rem_euclid(6.0))
    } else if max == g {
        60.0 * (((b - r) / range) + 2.0)
    } else {
        60.0 * (((r - g) / range) + 4.0)
    };

    if s < 0.0 {
        h = (h + 180.0).rem_euclid(360.0);
        s = s.abs();
    }

    (h.rem_euclid(360.0), s, l)
}

/// Converts HSL (`h` in degrees, `s`/`l` in `[0,1]`) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let channel = |n: f32| -> f32 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let a = s * l.min(1.0 - l);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    (channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primary_colors() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(h, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(l, 0.5, epsilon = 1e-4);

        let (h, s, l) = rgb_to_hsl(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(h, 120.0, epsilon = 1e-4);
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(l, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_hsl_to_rgb_yellow() {
        // HSL(60, 1, 0.5) is pure yellow.
        let (r, g, b) = hsl_to_rgb(60.0, 1.0, 0.5);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_grayscale_has_zero_saturation() {
        let (_, s, l) = rgb_to_hsl(0.5, 0.5, 0.5);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(l, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let cases = [(0.8, 0.2, 0.4), (0.1, 0.9, 0.3), (0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];
        for (r, g, b) in cases {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (r2, g2, b2) = hsl_to_rgb(h, s, l);
            assert_abs_diff_eq!(r, r2, epsilon = 1e-4);
            assert_abs_diff_eq!(g, g2, epsilon = 1e-4);
            assert_abs_diff_eq!(b, b2, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_black_white_zero_saturation() {
        let (_, s_black, l_black) = rgb_to_hsl(0.0, 0.0, 0.0);
        assert_eq!(s_black, 0.0);
        assert_eq!(l_black, 0.0);
        let (_, s_white, l_white) = rgb_to_hsl(1.0, 1.0, 1.0);
        assert_eq!(s_white, 0.0);
        assert_eq!(l_white, 1.0);
    }
}

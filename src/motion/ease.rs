//! Easing curves for tweens
//!
//! Every animated property on the page runs through one of these curves.
//! `Signature` is the site's house curve, a `cubic-bezier(0.16, 1, 0.3, 1)`
//! that rushes in and settles slowly.

/// An easing curve mapping normalized time `t` in `[0, 1]` to progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// GSAP `power2.out`
    OutQuad,
    /// GSAP `power3.out`
    OutCubic,
    /// CSS `ease-out`, used by the trail fade
    EaseOut,
    /// The site's `[0.16, 1, 0.3, 1]` curve
    Signature,
    /// Arbitrary CSS-style cubic bezier with control points (x1, y1, x2, y2)
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::Signature => bezier(0.16, 1.0, 0.3, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1
fn axis(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn axis_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluate a CSS cubic-bezier timing function at `x`.
///
/// Solves x(s) = x with Newton iterations, falling back to bisection when the
/// slope flattens out.
fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = axis(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return axis(y1, y2, s);
        }
        let slope = axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..40 {
        let v = axis(x1, x2, s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::EaseOut,
        Ease::Signature,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert!((ease.apply(7.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn signature_front_loads_progress() {
        // Most of the travel happens early
        assert!(Ease::Signature.apply(0.2) > 0.6);
        assert!(Ease::Signature.apply(0.5) > 0.9);
    }

    #[test]
    fn linear_bezier_matches_identity() {
        let ease = Ease::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((ease.apply(t) - t).abs() < 1e-5);
        }
    }
}

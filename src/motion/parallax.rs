//! Scroll-linked transform
//!
//! Maps the page scroll offset to a derived offset with a clamped linear
//! interpolation. The hero backdrop uses it to drift slower than the content.

/// Clamped linear map from a scroll domain to an output range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLinkedTransform {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScrollLinkedTransform {
    /// Build a transform mapping `domain` onto `range`.
    ///
    /// A reversed domain is normalized so the transform stays a function of
    /// increasing scroll.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        if domain.0 <= domain.1 {
            Self { domain, range }
        } else {
            Self {
                domain: (domain.1, domain.0),
                range: (range.1, range.0),
            }
        }
    }

    /// The hero parallax: `[0, 800]` scroll pixels onto `[0, max_px]`
    pub fn hero(max_px: f64) -> Self {
        Self::new((0.0, 800.0), (0.0, max_px))
    }

    /// Derived value for a scroll offset; never extrapolates past the range
    pub fn apply(&self, offset: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if offset <= d0 {
            return r0;
        }
        if offset >= d1 {
            return r1;
        }
        let t = (offset - d0) / (d1 - d0);
        r0 + (r1 - r0) * t
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl Default for ScrollLinkedTransform {
    fn default() -> Self {
        Self::hero(200.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_both_ends() {
        let t = ScrollLinkedTransform::default();
        assert_eq!(t.apply(-50.0), 0.0);
        assert_eq!(t.apply(0.0), 0.0);
        assert_eq!(t.apply(800.0), 200.0);
        assert_eq!(t.apply(5000.0), 200.0);
    }

    #[test]
    fn linear_in_between() {
        let t = ScrollLinkedTransform::default();
        assert_eq!(t.apply(400.0), 100.0);
        assert_eq!(t.apply(200.0), 50.0);
        assert_eq!(t.apply(600.0), 150.0);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let t = ScrollLinkedTransform::default();
        let mut last = f64::MIN;
        let mut offset = -100.0;
        while offset <= 1000.0 {
            let v = t.apply(offset);
            assert!(v >= last);
            last = v;
            offset += 7.5;
        }
    }

    #[test]
    fn degenerate_domain_steps() {
        let t = ScrollLinkedTransform::new((100.0, 100.0), (0.0, 10.0));
        assert_eq!(t.apply(99.0), 0.0);
        assert_eq!(t.apply(100.0), 0.0);
        assert_eq!(t.apply(101.0), 10.0);
    }

    #[test]
    fn reversed_domain_is_normalized() {
        let t = ScrollLinkedTransform::new((800.0, 0.0), (200.0, 0.0));
        assert_eq!(t.domain(), (0.0, 800.0));
        assert_eq!(t.apply(400.0), 100.0);
    }
}

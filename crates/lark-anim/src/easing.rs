//! Easing curves and the public easing-name route table.
//!
//! Curves are addressed as a (family, direction) pair, the way the
//! interpolation engine exposes them. Application code names curves with
//! the public string identifiers (`"easeInOutQuad"`); [`resolve`] routes
//! a name to its curve and falls back to linear for anything it does not
//! recognise.

/// Curve family: the shape of the easing equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sinusoidal,
    Exponential,
    Circular,
    Back,
}

/// Curve direction: which end(s) of the animation the easing applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveDirection {
    /// No shaping; only meaningful for [`CurveFamily::Linear`].
    None,
    In,
    Out,
    InOut,
}

/// An easing curve: maps linear progress (0..1) to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EasingCurve {
    pub family: CurveFamily,
    pub direction: CurveDirection,
}

impl EasingCurve {
    pub const LINEAR: Self = Self {
        family: CurveFamily::Linear,
        direction: CurveDirection::None,
    };

    pub fn new(family: CurveFamily, direction: CurveDirection) -> Self {
        Self { family, direction }
    }

    /// Evaluate the curve at linear progress `t`.
    ///
    /// Input is clamped to 0..1. Output is 0 at 0 and 1 at 1 for every
    /// curve, but the back family overshoots in between.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.direction {
            CurveDirection::None => t,
            CurveDirection::In => ease_in(self.family, t),
            CurveDirection::Out => ease_out(self.family, t),
            CurveDirection::InOut => ease_in_out(self.family, t),
        }
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Route table from public easing names to (family, direction).
const EASING_ROUTES: &[(&str, CurveFamily, CurveDirection)] = &[
    ("linear", CurveFamily::Linear, CurveDirection::None),
    // Penner equations
    ("easeInQuad", CurveFamily::Quadratic, CurveDirection::In),
    ("easeOutQuad", CurveFamily::Quadratic, CurveDirection::Out),
    ("easeInOutQuad", CurveFamily::Quadratic, CurveDirection::InOut),
    ("easeInCubic", CurveFamily::Cubic, CurveDirection::In),
    ("easeOutCubic", CurveFamily::Cubic, CurveDirection::Out),
    ("easeInOutCubic", CurveFamily::Cubic, CurveDirection::InOut),
    ("easeInQuart", CurveFamily::Quartic, CurveDirection::In),
    ("easeOutQuart", CurveFamily::Quartic, CurveDirection::Out),
    ("easeInOutQuart", CurveFamily::Quartic, CurveDirection::InOut),
    ("easeInQuint", CurveFamily::Quintic, CurveDirection::In),
    ("easeOutQuint", CurveFamily::Quintic, CurveDirection::Out),
    ("easeInOutQuint", CurveFamily::Quintic, CurveDirection::InOut),
    ("easeInSine", CurveFamily::Sinusoidal, CurveDirection::In),
    ("easeOutSine", CurveFamily::Sinusoidal, CurveDirection::Out),
    ("easeInOutSine", CurveFamily::Sinusoidal, CurveDirection::InOut),
    ("easeInExpo", CurveFamily::Exponential, CurveDirection::In),
    ("easeOutExpo", CurveFamily::Exponential, CurveDirection::Out),
    ("easeInOutExpo", CurveFamily::Exponential, CurveDirection::InOut),
    ("easeInCirc", CurveFamily::Circular, CurveDirection::In),
    ("easeOutCirc", CurveFamily::Circular, CurveDirection::Out),
    ("easeInOutCirc", CurveFamily::Circular, CurveDirection::InOut),
    ("easeInBack", CurveFamily::Back, CurveDirection::In),
    ("easeOutBack", CurveFamily::Back, CurveDirection::Out),
    ("easeInOutBack", CurveFamily::Back, CurveDirection::InOut),
    // Legacy alias carried by existing layouts.
    ("easeFromTo", CurveFamily::Quartic, CurveDirection::InOut),
];

/// Resolve a public easing name to its curve.
///
/// Unrecognised names fall back to linear; not an error.
pub fn resolve(name: &str) -> EasingCurve {
    EASING_ROUTES
        .iter()
        .find(|(route, _, _)| *route == name)
        .map(|&(_, family, direction)| EasingCurve { family, direction })
        .unwrap_or(EasingCurve::LINEAR)
}

/// Resolve an optional easing name; absent names are linear.
pub fn resolve_optional(name: Option<&str>) -> EasingCurve {
    name.map(resolve).unwrap_or(EasingCurve::LINEAR)
}

const BACK_OVERSHOOT: f64 = 1.70158;

fn ease_in(family: CurveFamily, t: f64) -> f64 {
    match family {
        CurveFamily::Linear => t,
        CurveFamily::Quadratic => t * t,
        CurveFamily::Cubic => t * t * t,
        CurveFamily::Quartic => t * t * t * t,
        CurveFamily::Quintic => t * t * t * t * t,
        CurveFamily::Sinusoidal => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
        CurveFamily::Exponential => {
            if t == 0.0 {
                0.0
            } else {
                (10.0 * (t - 1.0)).exp2()
            }
        }
        CurveFamily::Circular => 1.0 - (1.0 - t * t).sqrt(),
        CurveFamily::Back => {
            let s = BACK_OVERSHOOT;
            t * t * ((s + 1.0) * t - s)
        }
    }
}

fn ease_out(family: CurveFamily, t: f64) -> f64 {
    match family {
        CurveFamily::Linear => t,
        CurveFamily::Quadratic => t * (2.0 - t),
        CurveFamily::Cubic => {
            let t = t - 1.0;
            t * t * t + 1.0
        }
        CurveFamily::Quartic => {
            let t = t - 1.0;
            1.0 - t * t * t * t
        }
        CurveFamily::Quintic => {
            let t = t - 1.0;
            t * t * t * t * t + 1.0
        }
        CurveFamily::Sinusoidal => (t * std::f64::consts::FRAC_PI_2).sin(),
        CurveFamily::Exponential => {
            if t == 1.0 {
                1.0
            } else {
                1.0 - (-10.0 * t).exp2()
            }
        }
        CurveFamily::Circular => {
            let t = t - 1.0;
            (1.0 - t * t).sqrt()
        }
        CurveFamily::Back => {
            let s = BACK_OVERSHOOT;
            let t = t - 1.0;
            t * t * ((s + 1.0) * t + s) + 1.0
        }
    }
}

fn ease_in_out(family: CurveFamily, t: f64) -> f64 {
    match family {
        CurveFamily::Linear => t,
        CurveFamily::Quadratic => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t
            } else {
                let t = t - 1.0;
                -0.5 * (t * (t - 2.0) - 1.0)
            }
        }
        CurveFamily::Cubic => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t
            } else {
                let t = t - 2.0;
                0.5 * (t * t * t + 2.0)
            }
        }
        CurveFamily::Quartic => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t * t
            } else {
                let t = t - 2.0;
                -0.5 * (t * t * t * t - 2.0)
            }
        }
        CurveFamily::Quintic => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t * t * t
            } else {
                let t = t - 2.0;
                0.5 * (t * t * t * t * t + 2.0)
            }
        }
        CurveFamily::Sinusoidal => 0.5 * (1.0 - (std::f64::consts::PI * t).cos()),
        CurveFamily::Exponential => {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * (10.0 * (t - 1.0)).exp2()
            } else {
                0.5 * (2.0 - (-10.0 * (t - 1.0)).exp2())
            }
        }
        CurveFamily::Circular => {
            let t = t * 2.0;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                let t = t - 2.0;
                0.5 * ((1.0 - t * t).sqrt() + 1.0)
            }
        }
        CurveFamily::Back => {
            let s = BACK_OVERSHOOT * 1.525;
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                let t = t - 2.0;
                0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn all_curves() -> Vec<EasingCurve> {
        EASING_ROUTES
            .iter()
            .map(|&(_, family, direction)| EasingCurve { family, direction })
            .collect()
    }

    #[test]
    fn test_linear() {
        let linear = EasingCurve::LINEAR;
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(linear.evaluate(t), t));
        }
    }

    #[test]
    fn test_every_curve_hits_the_endpoints() {
        for curve in all_curves() {
            assert!(approx_eq(curve.evaluate(0.0), 0.0), "{curve:?} at 0");
            assert!(approx_eq(curve.evaluate(1.0), 1.0), "{curve:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in all_curves() {
            assert!(approx_eq(curve.evaluate(-0.5), 0.0), "{curve:?}");
            assert!(approx_eq(curve.evaluate(1.5), 1.0), "{curve:?}");
        }
    }

    #[test]
    fn test_quadratic_shape() {
        let ease_in = resolve("easeInQuad");
        let ease_out = resolve("easeOutQuad");
        assert!(approx_eq(ease_in.evaluate(0.5), 0.25));
        assert!(approx_eq(ease_out.evaluate(0.5), 0.75));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        for name in ["easeInOutQuad", "easeInOutCubic", "easeInOutSine"] {
            let curve = resolve(name);
            assert!(approx_eq(curve.evaluate(0.5), 0.5), "{name}");
            assert!(
                approx_eq(curve.evaluate(0.25) + curve.evaluate(0.75), 1.0),
                "{name}"
            );
        }
    }

    #[test]
    fn test_in_is_slower_than_out_early_on() {
        for family in [
            CurveFamily::Quadratic,
            CurveFamily::Cubic,
            CurveFamily::Quartic,
            CurveFamily::Quintic,
            CurveFamily::Sinusoidal,
            CurveFamily::Exponential,
            CurveFamily::Circular,
        ] {
            let ease_in = EasingCurve::new(family, CurveDirection::In);
            let ease_out = EasingCurve::new(family, CurveDirection::Out);
            assert!(
                ease_in.evaluate(0.25) < ease_out.evaluate(0.25),
                "{family:?}"
            );
        }
    }

    #[test]
    fn test_back_overshoots() {
        let back_in = resolve("easeInBack");
        let back_out = resolve("easeOutBack");
        // In dips below the start, out overshoots past the end.
        assert!(back_in.evaluate(0.2) < 0.0);
        assert!(back_out.evaluate(0.8) > 1.0);
    }

    #[test]
    fn test_route_table_resolution() {
        assert_eq!(
            resolve("easeInCubic"),
            EasingCurve::new(CurveFamily::Cubic, CurveDirection::In)
        );
        assert_eq!(
            resolve("easeOutCirc"),
            EasingCurve::new(CurveFamily::Circular, CurveDirection::Out)
        );
        assert_eq!(
            resolve("easeInOutExpo"),
            EasingCurve::new(CurveFamily::Exponential, CurveDirection::InOut)
        );
        assert_eq!(resolve("linear"), EasingCurve::LINEAR);
    }

    #[test]
    fn test_ease_from_to_is_quartic_in_out() {
        assert_eq!(resolve("easeFromTo"), resolve("easeInOutQuart"));
    }

    #[test]
    fn test_unrecognised_names_fall_back_to_linear() {
        assert_eq!(resolve("bounceyCastle"), EasingCurve::LINEAR);
        assert_eq!(resolve(""), EasingCurve::LINEAR);
        // Case matters for the public names.
        assert_eq!(resolve("easeinquad"), EasingCurve::LINEAR);
    }

    #[test]
    fn test_resolve_optional() {
        assert_eq!(resolve_optional(None), EasingCurve::LINEAR);
        assert_eq!(
            resolve_optional(Some("easeOutQuad")),
            EasingCurve::new(CurveFamily::Quadratic, CurveDirection::Out)
        );
    }
}

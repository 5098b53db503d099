use crate::point2::Point2;
use crate::NativeFloat;

/// Blend four scalar control values at interpolation parameter `t` using the
/// cubic Bernstein weights:
/// `B(t) = (1 - t)³ * p0 + 3 * (1 - t)² * t * p1 + 3 * (1 - t) * t² * p2 + t³ * p3`
///
/// Defined for any real `t`; points on the curve correspond to `t` in [0,1].
/// For a curve in the plane this is applied once per coordinate axis.
pub fn cubic_blend(
    p0: NativeFloat,
    p1: NativeFloat,
    p2: NativeFloat,
    p3: NativeFloat,
    t: NativeFloat,
) -> NativeFloat {
    let one_t = 1.0 - t;
    one_t * one_t * one_t * p0
        + 3.0 * one_t * one_t * t * p1
        + 3.0 * one_t * t * t * p2
        + t * t * t * p3
}

/// A 2d cubic Bezier curve defined by four points: the starting point, two
/// successive control points and the ending point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Point2,
    pub(crate) ctrl1: Point2,
    pub(crate) ctrl2: Point2,
    pub(crate) end: Point2,
}

impl CubicBezier {
    pub fn new(start: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate the curve at `t` by direct evaluation of the polynomial,
    /// blending each coordinate axis independently with [`cubic_blend`].
    pub fn eval(&self, t: NativeFloat) -> Point2 {
        Point2::new(
            cubic_blend(self.start.x, self.ctrl1.x, self.ctrl2.x, self.end.x, t),
            cubic_blend(self.start.y, self.ctrl1.y, self.ctrl2.y, self.end.y, t),
        )
    }

    /// Evaluate the curve elementwise over a slice of parameter values,
    /// yielding one point per value in the same order.
    pub fn eval_each<'a>(&'a self, ts: &'a [NativeFloat]) -> impl Iterator<Item = Point2> + 'a {
        ts.iter().map(move |&t| self.eval(t))
    }

    /// The control points in drawing order: start, ctrl1, ctrl2, end.
    pub fn control_polygon(&self) -> [Point2; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::linspace;
    use crate::EPSILON;
    use std::vec::Vec;

    #[test]
    fn eval_endpoints() {
        let bezier = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );

        // check if start/end points match
        assert!(bezier.eval(0.0).distance(Point2::new(0.0, 1.77)) < EPSILON);
        assert!(bezier.eval(1.0).distance(Point2::new(3.2, -4.0)) < EPSILON);
    }

    #[test]
    fn blend_endpoints() {
        for &(p0, p1, p2, p3) in &[(0.0, 0.0, 0.0, 1.0), (1.5, -2.0, 0.3, 7.7)] {
            assert!((cubic_blend(p0, p1, p2, p3, 0.0) - p0).abs() < EPSILON);
            assert!((cubic_blend(p0, p1, p2, p3, 1.0) - p3).abs() < EPSILON);
        }
    }

    #[test]
    fn blend_midpoint_cubic_term() {
        // with the first three values zeroed only the t³ term contributes
        assert!((cubic_blend(0.0, 0.0, 0.0, 1.0, 0.5) - 0.125).abs() < EPSILON);
    }

    #[test]
    fn blend_is_affine_invariant() {
        let k = 2.5;
        let nsteps = 100;
        for t in 0..=nsteps {
            let t = t as NativeFloat * 1.0 / (nsteps as NativeFloat);
            let b = cubic_blend(0.3, 0.7, -0.2, 1.1, t);
            let scaled = cubic_blend(0.3 * k, 0.7 * k, -0.2 * k, 1.1 * k, t);
            assert!((scaled - k * b).abs() < 1e-9);
        }
    }

    #[test]
    fn eval_matches_pointwise_blend() {
        // blending whole points must agree with the per-axis evaluation
        let bezier = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(2.9, 0.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat * 1.0 / (nsteps as NativeFloat);
            let one_t = 1.0 - t;
            let blended = bezier.start * (one_t * one_t * one_t)
                + bezier.ctrl1 * (3.0 * one_t * one_t * t)
                + bezier.ctrl2 * (3.0 * one_t * t * t)
                + bezier.end * (t * t * t);
            assert!(blended.distance(bezier.eval(t)) < EPSILON);
        }
    }

    #[test]
    fn eval_each_matches_scalar_eval() {
        let bezier = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(2.9, 0.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );

        let ts: Vec<NativeFloat> = linspace(0.0, 1.0, 257).collect();
        let points: Vec<Point2> = bezier.eval_each(&ts).collect();
        assert_eq!(points.len(), ts.len());
        for (p, &t) in points.iter().zip(ts.iter()) {
            assert!(p.distance(bezier.eval(t)) < EPSILON);
        }
    }
}

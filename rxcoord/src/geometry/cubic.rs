//! Cubic Bézier curve utilities.
//!
//! The reaction curve is two of these joined at the transition state; the
//! renderer only needs the control points, the rest is used for sampling.

use serde::{Deserialize, Serialize};

use super::flatten::flatten_cubic;
use crate::model::CurvePoint;

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: CurvePoint, // Start point
    pub p1: CurvePoint, // First control point
    pub p2: CurvePoint, // Second control point
    pub p3: CurvePoint, // End point
}

impl CubicBezier {
    pub fn new(p0: CurvePoint, p1: CurvePoint, p2: CurvePoint, p3: CurvePoint) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> CurvePoint {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        CurvePoint {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// Evaluate the tangent (derivative) at parameter t.
    pub fn tangent(&self, t: f32) -> CurvePoint {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        CurvePoint {
            x: 3.0 * mt2 * (self.p1.x - self.p0.x)
                + 6.0 * mt * t * (self.p2.x - self.p1.x)
                + 3.0 * t2 * (self.p3.x - self.p2.x),
            y: 3.0 * mt2 * (self.p1.y - self.p0.y)
                + 6.0 * mt * t * (self.p2.y - self.p1.y)
                + 3.0 * t2 * (self.p3.y - self.p2.y),
        }
    }

    /// Split the curve at parameter t using de Casteljau subdivision.
    ///
    /// Returns two cubic curves: the first from 0..t, the second from t..1.
    pub fn split_at(&self, t: f32) -> (CubicBezier, CubicBezier) {
        let p01 = lerp(self.p0, self.p1, t);
        let p12 = lerp(self.p1, self.p2, t);
        let p23 = lerp(self.p2, self.p3, t);

        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);

        let p0123 = lerp(p012, p123, t); // The split point

        (
            CubicBezier::new(self.p0, p01, p012, p0123),
            CubicBezier::new(p0123, p123, p23, self.p3),
        )
    }

    /// Polyline approximation within `tol` pixels, starting at `p0` and ending at `p3`.
    pub fn flatten(&self, tol: f32) -> Vec<CurvePoint> {
        let mut points = vec![self.p0];
        flatten_cubic(&mut points, self, tol, 0);
        points
    }

    /// `(min_y, max_y)` of the control polygon. The curve lies inside it.
    pub fn hull_y_range(&self) -> (f32, f32) {
        let ys = [self.p0.y, self.p1.y, self.p2.y, self.p3.y];
        ys.iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)))
    }
}

#[inline]
fn lerp(a: CurvePoint, b: CurvePoint, t: f32) -> CurvePoint {
    CurvePoint {
        x: a.x + t * (b.x - a.x),
        y: a.y + t * (b.y - a.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::{approx_eq, EPS_POS};

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            CurvePoint::new(0.0, 100.0),
            CurvePoint::new(50.0, 100.0),
            CurvePoint::new(50.0, 0.0),
            CurvePoint::new(100.0, 0.0),
        )
    }

    #[test]
    fn eval_hits_endpoints_and_midpoint() {
        let c = s_curve();
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
        let mid = c.eval(0.5);
        assert!(approx_eq(mid.x, 50.0, EPS_POS));
        assert!(approx_eq(mid.y, 50.0, EPS_POS));
    }

    #[test]
    fn tangent_at_ends_follows_handles() {
        let c = s_curve();
        assert_eq!(c.tangent(0.0), CurvePoint::new(150.0, 0.0));
        assert_eq!(c.tangent(1.0), CurvePoint::new(150.0, 0.0));
    }

    #[test]
    fn split_halves_meet_on_curve() {
        let c = s_curve();
        let (a, b) = c.split_at(0.3);
        let on = c.eval(0.3);
        assert!(approx_eq(a.p3.x, on.x, EPS_POS) && approx_eq(a.p3.y, on.y, EPS_POS));
        assert_eq!(a.p3, b.p0);
        assert_eq!(a.p0, c.p0);
        assert_eq!(b.p3, c.p3);
    }

    #[test]
    fn flatten_stays_inside_hull() {
        let c = s_curve();
        let pts = c.flatten(0.25);
        assert!(pts.len() > 2);
        assert_eq!(pts[0], c.p0);
        assert_eq!(*pts.last().unwrap(), c.p3);
        let (lo, hi) = c.hull_y_range();
        assert!(pts.iter().all(|p| p.y >= lo - EPS_POS && p.y <= hi + EPS_POS));
    }
}

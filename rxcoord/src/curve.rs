//! Reaction-coordinate curve model.
//!
//! A one-step reaction is drawn as two cubic Béziers: reactants rise to the
//! transition state, then fall to products. Everything here is a pure
//! function of [`CurveInput`] and a [`Layout`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::{CatalystParams, Layout};
use crate::geometry::cubic::CubicBezier;
use crate::model::{CurveInput, CurvePoint};

/// One command of an SVG-style path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(CurvePoint),
    CubicTo { c1: CurvePoint, c2: CurvePoint, to: CurvePoint },
}

/// Move/cubic path equivalent to the joined curve segments.
///
/// `Display` renders the `d` attribute form, e.g. `M 100 360 C 220 360 350 150 470 150`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    commands: Vec<PathCommand>,
}

impl PathSpec {
    /// Joins `segments` end to start; only the first one contributes a move.
    pub fn from_segments(segments: &[CubicBezier]) -> Self {
        let mut commands = Vec::with_capacity(segments.len() + 1);
        if let Some(first) = segments.first() {
            commands.push(PathCommand::MoveTo(first.p0));
        }
        for s in segments {
            commands.push(PathCommand::CubicTo { c1: s.p1, c2: s.p2, to: s.p3 });
        }
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::CubicTo { c1, c2, to } => {
                    write!(f, "C {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)?
                }
            }
        }
        Ok(())
    }
}

impl Serialize for PathSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Geometry of one energy curve plus the landmarks the renderer labels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveDescription {
    pub reactant: CurvePoint,
    pub product: CurvePoint,
    pub transition: CurvePoint,
    pub segment1: CubicBezier,
    pub segment2: CubicBezier,
    pub path: PathSpec,
}

impl CurveDescription {
    /// Reactant-to-transition rise in screen units (Eₐ bracket length).
    pub fn activation_height(&self) -> f32 {
        self.reactant.y - self.transition.y
    }

    /// `product.y - reactant.y`: negative for exothermic, positive for endothermic.
    pub fn enthalpy_offset(&self) -> f32 {
        self.product.y - self.reactant.y
    }

    /// Polyline through both segments, reactant first, with no duplicated join.
    pub fn polyline(&self, tol: f32) -> Vec<CurvePoint> {
        let mut pts = self.segment1.flatten(tol);
        pts.extend(self.segment2.flatten(tol).into_iter().skip(1));
        pts
    }

    /// `n` uniform parameter steps per segment: `2n + 1` points, join shared.
    /// `n == 0` is treated as one step.
    pub fn sample(&self, n: usize) -> Vec<CurvePoint> {
        let n = n.max(1);
        let mut pts = Vec::with_capacity(2 * n + 1);
        for (k, seg) in [&self.segment1, &self.segment2].into_iter().enumerate() {
            let first = if k == 0 { 0 } else { 1 };
            for i in first..=n {
                pts.push(seg.eval(i as f32 / n as f32));
            }
        }
        pts
    }
}

pub fn build_curve(input: CurveInput) -> CurveDescription {
    build_curve_with(&Layout::default(), input)
}

/// Builds the curve for `input`. Total over all floats; out-of-range barriers extrapolate.
///
/// The peak is placed at `base_peak_y + (1 - barrier) * peak_scale`, so a larger
/// barrier gives a smaller y (the transition state rises on screen).
pub fn build_curve_with(layout: &Layout, input: CurveInput) -> CurveDescription {
    let x_l = layout.reactant_x;
    let x_r = layout.product_x();
    let y_react = layout.reactant_y;
    let dh = if input.is_exothermic { -layout.enthalpy_offset } else { layout.enthalpy_offset };
    let y_prod = y_react + dh;

    let x_ts = (x_l + x_r) / 2.0;
    let peak_y = layout.base_peak_y + (1.0 - input.barrier) * layout.peak_scale;
    let h = layout.handle_offset;

    let reactant = CurvePoint::new(x_l, y_react);
    let product = CurvePoint::new(x_r, y_prod);
    let transition = CurvePoint::new(x_ts, peak_y);

    let segment1 = CubicBezier::new(
        reactant,
        reactant.offset(h, 0.0),
        transition.offset(-h, 0.0),
        transition,
    );
    let segment2 = CubicBezier::new(
        transition,
        transition.offset(h, 0.0),
        product.offset(-h, 0.0),
        product,
    );
    let path = PathSpec::from_segments(&[segment1, segment2]);

    log::debug!(
        "curve exo={} barrier={} peak_y={}",
        input.is_exothermic,
        input.barrier,
        peak_y
    );

    CurveDescription { reactant, product, transition, segment1, segment2, path }
}

pub fn build_catalyst_curve(input: CurveInput) -> CurveDescription {
    build_catalyst_curve_with(&Layout::default(), &CatalystParams::default(), input)
}

/// Catalysed pathway: same endpoints, barrier lowered per `params`.
pub fn build_catalyst_curve_with(
    layout: &Layout,
    params: &CatalystParams,
    input: CurveInput,
) -> CurveDescription {
    let lowered = CurveInput {
        barrier: params.effective_barrier(input.barrier),
        ..input
    };
    build_curve_with(layout, lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_exothermic_curve() {
        let c = build_curve(CurveInput::new(true, 1.0));
        assert_eq!(c.reactant, CurvePoint::new(100.0, 360.0));
        assert_eq!(c.product, CurvePoint::new(840.0, 280.0));
        assert_eq!(c.transition, CurvePoint::new(470.0, 150.0));
        assert_eq!(
            c.path.to_string(),
            "M 100 360 C 220 360 350 150 470 150 C 590 150 720 280 840 280"
        );
    }

    #[test]
    fn endothermic_products_sit_lower_on_screen() {
        let c = build_curve(CurveInput::new(false, 0.5));
        assert_eq!(c.product.y, 440.0);
        assert_eq!(c.enthalpy_offset(), 80.0);
        assert_eq!(c.transition.y, 190.0);
    }

    #[test]
    fn segments_join_at_transition() {
        let c = build_curve(CurveInput::new(true, 0.3));
        assert_eq!(c.segment1.p0, c.reactant);
        assert_eq!(c.segment1.p3, c.transition);
        assert_eq!(c.segment2.p0, c.transition);
        assert_eq!(c.segment2.p3, c.product);
        // Both tangents at the join are horizontal.
        assert_eq!(c.segment1.tangent(1.0).y, 0.0);
        assert_eq!(c.segment2.tangent(0.0).y, 0.0);
    }

    #[test]
    fn out_of_range_barrier_extrapolates() {
        let c = build_curve(CurveInput::new(true, 2.0));
        assert_eq!(c.transition.y, 70.0);
        let c = build_curve(CurveInput::new(true, -1.0));
        assert_eq!(c.transition.y, 310.0);
    }

    #[test]
    fn path_commands_are_move_then_two_cubics() {
        let c = build_curve(CurveInput::new(false, 0.7));
        let cmds = c.path.commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0], PathCommand::MoveTo(c.reactant));
        assert!(matches!(cmds[2], PathCommand::CubicTo { to, .. } if to == c.product));
    }

    #[test]
    fn catalyst_floor_saturates() {
        let a = build_catalyst_curve(CurveInput::new(true, 0.6));
        let b = build_catalyst_curve(CurveInput::new(true, 0.8));
        assert_eq!(a.transition.y, 190.0);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_hits_landmarks_and_stays_below_peak() {
        let c = build_curve(CurveInput::new(true, 0.7));
        let pts = c.sample(8);
        assert_eq!(pts.len(), 17);
        assert_eq!(pts[0], c.reactant);
        assert_eq!(pts[8], c.transition);
        assert_eq!(pts[16], c.product);
        assert!(pts.iter().all(|p| p.y >= c.transition.y));
        assert!(pts.windows(2).all(|w| w[1].x >= w[0].x));
        assert_eq!(c.sample(0).len(), 3);
    }
}

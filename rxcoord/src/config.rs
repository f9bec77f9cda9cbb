//! Layout and catalyst constants.
//!
//! The `const` values are the defaults; [`Layout`] and [`CatalystParams`]
//! carry them at runtime and can be loaded from JSON.

use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 960.0;
pub const CANVAS_HEIGHT: f32 = 520.0;

// ── Curve anchors ───────────────────────────────────────────────────

/// x of the reactant end of the curve.
pub const REACTANT_X: f32 = 100.0;
/// Distance of the product end from the right canvas edge.
pub const PRODUCT_MARGIN: f32 = 120.0;
/// Reactant baseline (screen y).
pub const REACTANT_Y: f32 = 360.0;
/// |ΔH| in screen units; products sit this far above (exo) or below (endo) reactants.
pub const ENTHALPY_OFFSET: f32 = 80.0;
/// Transition-state y at barrier = 1.
pub const BASE_PEAK_Y: f32 = 150.0;
/// How far the peak drops (screen y grows) as barrier goes from 1 to 0.
pub const PEAK_SCALE: f32 = 80.0;
/// Horizontal distance of each Bezier control point from its anchor.
pub const HANDLE_OFFSET: f32 = 120.0;

// ── Catalyst ────────────────────────────────────────────────────────

pub const CATALYST_DELTA: f32 = 0.35;
pub const CATALYST_FLOOR: f32 = 0.5;

pub const DEFAULT_BARRIER: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub reactant_x: f32,
    pub product_margin: f32,
    pub reactant_y: f32,
    pub enthalpy_offset: f32,
    pub base_peak_y: f32,
    pub peak_scale: f32,
    pub handle_offset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            reactant_x: REACTANT_X,
            product_margin: PRODUCT_MARGIN,
            reactant_y: REACTANT_Y,
            enthalpy_offset: ENTHALPY_OFFSET,
            base_peak_y: BASE_PEAK_Y,
            peak_scale: PEAK_SCALE,
            handle_offset: HANDLE_OFFSET,
        }
    }
}

impl Layout {
    pub fn product_x(&self) -> f32 {
        self.width - self.product_margin
    }

    // Plot frame: the axes run along the left and bottom edges.
    pub fn axis_left(&self) -> f32 {
        60.0
    }
    pub fn axis_right(&self) -> f32 {
        self.width - 40.0
    }
    pub fn axis_top(&self) -> f32 {
        40.0
    }
    pub fn axis_bottom(&self) -> f32 {
        self.height - 60.0
    }

    pub(crate) fn fields(&self) -> [(&'static str, f32); 9] {
        [
            ("width", self.width),
            ("height", self.height),
            ("reactant_x", self.reactant_x),
            ("product_margin", self.product_margin),
            ("reactant_y", self.reactant_y),
            ("enthalpy_offset", self.enthalpy_offset),
            ("base_peak_y", self.base_peak_y),
            ("peak_scale", self.peak_scale),
            ("handle_offset", self.handle_offset),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalystParams {
    pub delta: f32,
    pub floor: f32,
}

impl Default for CatalystParams {
    fn default() -> Self {
        Self { delta: CATALYST_DELTA, floor: CATALYST_FLOOR }
    }
}

impl CatalystParams {
    /// Barrier of the catalysed pathway: lowered by `delta`, never below `floor`.
    /// A NaN barrier stays NaN, so the catalyst curve degrades with the base curve.
    pub fn effective_barrier(&self, barrier: f32) -> f32 {
        let lowered = barrier - self.delta;
        if lowered.is_nan() {
            return lowered;
        }
        lowered.max(self.floor)
    }
}

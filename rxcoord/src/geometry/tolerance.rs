// Centralized tolerances for curve sampling and comparisons

pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold (px)
pub const DEFAULT_FLATTEN_TOL: f32 = 0.25; // polyline deviation (px)

// Adaptive flattening cap
pub const MAX_FLATTEN_DEPTH: u32 = 16;

#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }

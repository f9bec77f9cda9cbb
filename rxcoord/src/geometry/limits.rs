// Bounds for untrusted settings/layout JSON and export requests

// Canvas
pub const MAX_CANVAS_SIDE: f32 = 16_384.0;
pub const MAX_EXPORT_SCALE: f32 = 8.0;

// Numeric bounds
pub const COORD_MIN: f32 = -1_000_000.0;
pub const COORD_MAX: f32 =  1_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_canvas_bounds(side: f32) -> bool { side.is_finite() && side >= 1.0 && side <= MAX_CANVAS_SIDE }

#[inline]
pub fn in_scale_bounds(s: f32) -> bool { s.is_finite() && s > 0.0 && s <= MAX_EXPORT_SCALE }

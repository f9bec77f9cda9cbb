use crate::model::CurvePoint;

/// Squared distance from `p` to segment `a..b`, and the projection parameter.
pub fn seg_distance_sq(p: CurvePoint, a: CurvePoint, b: CurvePoint) -> (f32, f32) {
    let vx = b.x - a.x; let vy = b.y - a.y;
    let wx = p.x - a.x; let wy = p.y - a.y;
    let vv = vx*vx + vy*vy;
    let t = if vv > 0.0 { ((wx*vx + wy*vy) / vv).clamp(0.0, 1.0) } else { 0.0 };
    let dx = p.x - (a.x + t * vx); let dy = p.y - (a.y + t * vy);
    (dx*dx + dy*dy, t)
}

pub fn dist_point_to_seg_sq(p: CurvePoint, a: CurvePoint, b: CurvePoint) -> f32 {
    seg_distance_sq(p, a, b).0
}

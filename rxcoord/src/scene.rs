use crate::config::{CatalystParams, Layout};
use crate::curve::{build_catalyst_curve_with, build_curve_with, CurveDescription};
use crate::model::DiagramSettings;

/// Everything the renderer draws, derived from one set of settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub base: CurveDescription,
    pub catalyst: Option<CurveDescription>,
    pub heat_overlay: bool,
}

impl Scene {
    pub fn compute(layout: &Layout, params: &CatalystParams, settings: &DiagramSettings) -> Self {
        let input = settings.curve_input();
        let base = build_curve_with(layout, input);
        let catalyst = settings
            .catalyst_overlay
            .then(|| build_catalyst_curve_with(layout, params, input));
        Scene { layout: *layout, base, catalyst, heat_overlay: settings.heat_overlay }
    }
}

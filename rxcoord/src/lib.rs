pub mod config;
pub mod curve;
pub mod error;
pub mod model;
pub mod scene;
pub mod svg;
pub mod geometry {
    pub mod cubic;
    pub mod flatten;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
#[cfg(feature = "png")]
pub mod cli;
#[cfg(feature = "png")]
pub mod export;
mod json;

pub use config::{CatalystParams, Layout};
pub use curve::{build_catalyst_curve, build_curve, CurveDescription, PathCommand, PathSpec};
pub use error::ExportError;
pub use geometry::cubic::CubicBezier;
pub use json::validate_layout;
pub use model::{Color, CurveInput, CurvePoint, DiagramSettings};
pub use scene::Scene;

pub type ListenerId = u32;

/// Diagram state: the host's settings, the layout, and the scene derived from them.
///
/// Every effective change recomputes the scene once, bumps [`Diagram::version`]
/// and notifies subscribers. Setters return `false` when the value is unchanged.
pub struct Diagram {
    settings: DiagramSettings,
    layout: Layout,
    catalyst: CatalystParams,
    scene: Scene,
    ver: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(&Scene)>)>,
    next_listener: ListenerId,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self::build(Layout::default())
    }

    /// Starts from a custom layout; rejected with the same codes as the JSON loader.
    pub fn with_layout(layout: Layout) -> Result<Self, (&'static str, String)> {
        validate_layout(&layout)?;
        Ok(Self::build(layout))
    }

    fn build(layout: Layout) -> Self {
        let settings = DiagramSettings::default();
        let catalyst = CatalystParams::default();
        Diagram {
            scene: Scene::compute(&layout, &catalyst, &settings),
            settings,
            layout,
            catalyst,
            ver: 1,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn version(&self) -> u64 {
        self.ver
    }
    pub fn settings(&self) -> &DiagramSettings {
        &self.settings
    }
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    pub fn catalyst_params(&self) -> &CatalystParams {
        &self.catalyst
    }
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    pub fn curve(&self) -> &CurveDescription {
        &self.scene.base
    }
    pub fn catalyst_curve(&self) -> Option<&CurveDescription> {
        self.scene.catalyst.as_ref()
    }

    // Inputs
    pub fn set_exothermic(&mut self, exothermic: bool) -> bool {
        self.apply(DiagramSettings { exothermic, ..self.settings })
    }
    pub fn set_barrier(&mut self, barrier: f32) -> bool {
        self.apply(DiagramSettings { barrier, ..self.settings })
    }
    pub fn set_catalyst_overlay(&mut self, on: bool) -> bool {
        self.apply(DiagramSettings { catalyst_overlay: on, ..self.settings })
    }
    pub fn set_heat_overlay(&mut self, on: bool) -> bool {
        self.apply(DiagramSettings { heat_overlay: on, ..self.settings })
    }

    /// Replaces all settings at once; one recompute at most.
    pub fn apply(&mut self, settings: DiagramSettings) -> bool {
        self.replace(settings, None, None)
    }

    pub fn set_layout(&mut self, layout: Layout) -> Result<bool, (&'static str, String)> {
        validate_layout(&layout)?;
        Ok(self.replace(self.settings, Some(layout), None))
    }

    pub fn set_catalyst_params(&mut self, params: CatalystParams) -> bool {
        self.replace(self.settings, None, Some(params))
    }

    pub(crate) fn replace(
        &mut self,
        settings: DiagramSettings,
        layout: Option<Layout>,
        catalyst: Option<CatalystParams>,
    ) -> bool {
        let layout = layout.unwrap_or(self.layout);
        let catalyst = catalyst.unwrap_or(self.catalyst);
        // Bitwise barrier compare so a NaN input still counts as a change.
        let same = settings.exothermic == self.settings.exothermic
            && settings.barrier.to_bits() == self.settings.barrier.to_bits()
            && settings.catalyst_overlay == self.settings.catalyst_overlay
            && settings.heat_overlay == self.settings.heat_overlay
            && layout == self.layout
            && catalyst == self.catalyst;
        if same {
            return false;
        }
        self.settings = settings;
        self.layout = layout;
        self.catalyst = catalyst;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.scene = Scene::compute(&self.layout, &self.catalyst, &self.settings);
        self.ver += 1;
        log::debug!("diagram v{} settings={:?}", self.ver, self.settings);
        for (_, f) in self.listeners.iter_mut() {
            f(&self.scene);
        }
    }

    // Change notification
    pub fn subscribe(&mut self, f: impl FnMut(&Scene) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // Output
    pub fn path_string(&self) -> String {
        self.scene.base.path.to_string()
    }
    pub fn to_svg(&self) -> String {
        svg::render_svg(&self.scene)
    }
    #[cfg(feature = "png")]
    pub fn to_png(&self, opts: &export::PngOptions) -> Result<Vec<u8>, ExportError> {
        export::render_png(&self.to_svg(), opts)
    }

    // JSON
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> bool {
        json::from_json_impl(self, v)
    }
    pub fn from_json_value_strict(
        &mut self,
        v: serde_json::Value,
    ) -> Result<bool, (&'static str, String)> {
        json::from_json_impl_strict(self, v)
    }
}

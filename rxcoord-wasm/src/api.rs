use crate::ReactionDiagram;
use rxcoord::export::{PngOptions, DEFAULT_PNG_FILENAME};
use rxcoord::geometry::limits;
use serde::Serialize;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::{dom, error};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl ReactionDiagram {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ReactionDiagram {
        crate::ReactionDiagram::rs_new()
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Controls. A mounted target is redrawn by the change listener.
    pub fn set_exothermic(&mut self, exothermic: bool) -> bool {
        self.inner.set_exothermic(exothermic)
    }
    /// Accepts the reaction select's values, `"exo"` or `"endo"`.
    pub fn set_reaction(&mut self, kind: &str) -> bool {
        self.inner.set_exothermic(kind == "exo")
    }
    pub fn set_reaction_res(&mut self, kind: &str) -> JsValue {
        match kind {
            "exo" | "endo" => error::ok(JsValue::from_bool(self.set_reaction(kind))),
            other => error::invalid_reaction(other),
        }
    }
    pub fn set_barrier(&mut self, barrier: f32) -> bool {
        self.inner.set_barrier(barrier)
    }
    pub fn set_barrier_res(&mut self, barrier: f32) -> JsValue {
        if !barrier.is_finite() {
            return error::non_finite("barrier");
        }
        error::ok(JsValue::from_bool(self.inner.set_barrier(barrier)))
    }
    pub fn set_catalyst_overlay(&mut self, on: bool) -> bool {
        self.inner.set_catalyst_overlay(on)
    }
    pub fn set_heat_overlay(&mut self, on: bool) -> bool {
        self.inner.set_heat_overlay(on)
    }
    pub fn settings(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.settings()).unwrap_or(JsValue::NULL)
    }

    // Geometry
    pub fn path_string(&self) -> String {
        self.inner.path_string()
    }
    pub fn catalyst_path_string(&self) -> Option<String> {
        self.inner.catalyst_curve().map(|c| c.path.to_string())
    }
    pub fn curve(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.curve()).unwrap_or(JsValue::NULL)
    }
    /// `[reactant.x, reactant.y, transition.x, transition.y, product.x, product.y]`
    pub fn landmarks(&self) -> JsValue {
        let c = self.inner.curve();
        let (r, t, p) = (c.reactant, c.transition, c.product);
        crate::interop::arr_f32(&[r.x, r.y, t.x, t.y, p.x, p.y]).into()
    }
    pub fn to_svg(&self) -> String {
        self.inner.to_svg()
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        // Plain objects rather than JS Maps, so the result survives JSON.stringify.
        let ser = serde_wasm_bindgen::Serializer::json_compatible();
        match self.inner.to_json_value() {
            Ok(v) => v.serialize(&ser).unwrap_or(JsValue::NULL),
            Err(e) => {
                dom::warn(&format!("diagram serialization failed: {}", e));
                JsValue::NULL
            }
        }
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self.inner.from_json_value(val),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(val) {
                Ok(changed) => error::ok(JsValue::from_bool(changed)),
                Err((code, msg)) => error::err(code, msg, None),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }

    // Render target
    /// Draws into the element with `id` now and after every change.
    pub fn mount(&mut self, id: &str) -> JsValue {
        if let Err(e) = dom::find_target(id) {
            dom::warn(&e.to_string());
            return error::export_error(&e);
        }
        self.unmount();
        let target = id.to_string();
        let listener = self.inner.subscribe(move |scene| {
            dom::draw(&target, &rxcoord::svg::render_svg(scene));
        });
        self.listener = Some(listener);
        self.target = Some(id.to_string());
        error::ok(JsValue::from_bool(dom::draw(id, &self.inner.to_svg())))
    }
    pub fn unmount(&mut self) -> bool {
        if let Some(l) = self.listener.take() {
            self.inner.unsubscribe(l);
        }
        self.target.take().is_some()
    }
    pub fn target(&self) -> Option<String> {
        self.target.clone()
    }

    // Export
    pub fn add_font(&mut self, data: &[u8]) {
        self.fonts.push(data.to_vec());
    }
    pub fn export_png(&self, scale: f32) -> JsValue {
        if !scale.is_finite() {
            return error::non_finite("scale");
        }
        if !limits::in_scale_bounds(scale) {
            return error::out_of_range("scale", 0.0, limits::MAX_EXPORT_SCALE, scale);
        }
        let opts = PngOptions { scale, fonts: self.fonts.clone(), ..Default::default() };
        match self.inner.to_png(&opts) {
            Ok(bytes) => error::ok(crate::interop::arr_u8(&bytes).into()),
            Err(e) => error::export_error(&e),
        }
    }
    /// Downloads the mounted diagram as PNG. Without a mounted target this only warns.
    pub fn download_png(&self, filename: Option<String>) -> JsValue {
        let Some(id) = self.target.as_deref() else {
            let e = rxcoord::ExportError::MissingTarget("no diagram mounted".into());
            dom::warn(&e.to_string());
            return error::export_error(&e);
        };
        if let Err(e) = dom::find_target(id) {
            dom::warn(&e.to_string());
            return error::export_error(&e);
        }
        let opts = PngOptions { fonts: self.fonts.clone(), ..Default::default() };
        let bytes = match self.inner.to_png(&opts) {
            Ok(b) => b,
            Err(e) => return error::export_error(&e),
        };
        let name = filename.unwrap_or_else(|| DEFAULT_PNG_FILENAME.to_string());
        match dom::download(&bytes, &name, "image/png") {
            Ok(()) => error::ok(JsValue::from_str(&name)),
            Err(e) => error::err("download_failed", format!("{:?}", e), Some(e)),
        }
    }
}

impl Default for ReactionDiagram {
    fn default() -> Self {
        Self::new()
    }
}

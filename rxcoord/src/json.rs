use crate::config::{CatalystParams, Layout};
use crate::geometry::limits;
use crate::model::DiagramSettings;
use crate::Diagram;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn to_json_impl(d: &Diagram) -> Result<Value, serde_json::Error> {
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        settings: &'a DiagramSettings,
        layout: &'a Layout,
        catalyst: &'a CatalystParams,
        curve: &'a crate::curve::CurveDescription,
        catalyst_curve: Option<&'a crate::curve::CurveDescription>,
    }
    let scene = d.scene();
    serde_json::to_value(Doc {
        version: DOC_VERSION,
        settings: d.settings(),
        layout: d.layout(),
        catalyst: d.catalyst_params(),
        curve: &scene.base,
        catalyst_curve: scene.catalyst.as_ref(),
    })
}

#[derive(Deserialize)]
struct DocDe {
    version: Option<u32>,
    settings: DiagramSettings,
    layout: Option<Layout>,
    catalyst: Option<CatalystParams>,
}

struct Loaded {
    settings: DiagramSettings,
    layout: Option<Layout>,
    catalyst: Option<CatalystParams>,
}

/// Parses and validates a settings document. Derived fields (`curve`, ...) are ignored.
fn parse_doc(v: Value) -> Result<Loaded, (&'static str, String)> {
    let doc: DocDe = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;
    if let Some(ver) = doc.version {
        if ver > DOC_VERSION {
            return Err(("unsupported_version", format!("version {}", ver)));
        }
    }
    if !doc.settings.barrier.is_finite() {
        return Err(("non_finite", "settings.barrier".into()));
    }
    if let Some(layout) = &doc.layout {
        validate_layout(layout)?;
    }
    if let Some(c) = &doc.catalyst {
        if !c.delta.is_finite() || !c.floor.is_finite() {
            return Err(("non_finite", "catalyst".into()));
        }
    }
    Ok(Loaded { settings: doc.settings, layout: doc.layout, catalyst: doc.catalyst })
}

pub fn validate_layout(layout: &Layout) -> Result<(), (&'static str, String)> {
    for (name, v) in layout.fields() {
        if !limits::in_coord_bounds(v) {
            return Err(("out_of_bounds", format!("layout.{}", name)));
        }
    }
    if !limits::in_canvas_bounds(layout.width) || !limits::in_canvas_bounds(layout.height) {
        return Err(("out_of_bounds", "layout canvas size".into()));
    }
    Ok(())
}

pub fn from_json_impl(d: &mut Diagram, v: Value) -> bool {
    from_json_impl_strict(d, v).is_ok()
}

pub fn from_json_impl_strict(d: &mut Diagram, v: Value) -> Result<bool, (&'static str, String)> {
    let loaded = parse_doc(v)?;
    Ok(d.replace(loaded.settings, loaded.layout, loaded.catalyst))
}

use wasm_bindgen::prelude::*;
use js_sys::Object;
use rxcoord::ExportError;
use crate::interop::set_kv;

pub fn ok(v: JsValue) -> JsValue {
    let o = Object::new();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = Object::new();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = Object::new();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = Object::new(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = Object::new();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "max", &JsValue::from_f64(max as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_reaction(got: &str) -> JsValue {
    let d = Object::new(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_reaction", "reaction must be 'exo' or 'endo'", Some(d.into()))
}

pub fn export_error(e: &ExportError) -> JsValue {
    let code = match e {
        ExportError::MissingTarget(id) => {
            let d = Object::new(); set_kv(&d, "id", &JsValue::from_str(id));
            return err("missing_target", e.to_string(), Some(d.into()));
        }
        ExportError::Scale(s) => {
            return out_of_range("scale", 0.0, rxcoord::geometry::limits::MAX_EXPORT_SCALE, *s);
        }
        ExportError::Svg(_) => "svg_parse",
        ExportError::Canvas { .. } => "canvas_alloc",
        ExportError::Encode(_) => "png_encode",
        ExportError::Io(_) => "io",
    };
    err(code, e.to_string(), None)
}

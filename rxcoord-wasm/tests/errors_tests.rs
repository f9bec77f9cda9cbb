use js_sys::Reflect;
use rxcoord_wasm::ReactionDiagram;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

#[wasm_bindgen_test]
fn invalid_inputs_return_typed_errors() {
    let mut d = ReactionDiagram::new();
    let ver = d.version();
    assert!(is_err(&d.set_barrier_res(f32::NAN), "non_finite"));
    assert!(is_err(&d.set_reaction_res("sideways"), "invalid_reaction"));
    assert!(is_err(&d.export_png(0.0), "out_of_range"));
    assert!(is_err(&d.export_png(f32::INFINITY), "non_finite"));
    assert_eq!(d.version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn missing_target_is_reported_not_panicking() {
    let mut d = ReactionDiagram::new();
    assert!(is_err(&d.mount("no-such-element"), "missing_target"));
    assert!(d.target().is_none());
    assert!(is_err(&d.download_png(None), "missing_target"));
}

#[wasm_bindgen_test]
fn malformed_json_rejected() {
    let mut d = ReactionDiagram::new();
    let ver = d.version();
    let bad = js_sys::JSON::parse(r#"{"settings":{"exothermic":true}}"#).unwrap();
    assert!(is_err(&d.from_json_res(bad), "json_parse"));
    let nan_layout =
        js_sys::JSON::parse(r#"{"settings":{"exothermic":true,"barrier":0.5},"layout":{"height":0}}"#)
            .unwrap();
    assert!(is_err(&d.from_json_res(nan_layout), "out_of_bounds"));
    assert_eq!(d.version(), ver);
}

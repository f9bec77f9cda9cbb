use rxcoord::ExportError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlElement, Url};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn find_target(id: &str) -> Result<Element, ExportError> {
    document()
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| ExportError::MissingTarget(id.to_string()))
}

/// Replaces the target's content with `svg`. A vanished target is reported, not fatal.
pub fn draw(id: &str, svg: &str) -> bool {
    match find_target(id) {
        Ok(el) => {
            el.set_inner_html(svg);
            true
        }
        Err(e) => {
            warn(&e.to_string());
            false
        }
    }
}

/// Saves `bytes` through a temporary object URL and a clicked `<a download>`.
pub fn download(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let parts = js_sys::Array::new();
    parts.push(&crate::interop::arr_u8(bytes));
    let bag = BlobPropertyBag::new();
    bag.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let a = doc.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", &url)?;
    a.set_attribute("download", filename)?;
    a.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

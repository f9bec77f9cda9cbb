use wasm_bindgen::prelude::*;
mod api;
mod dom;
mod error;
mod interop;

#[wasm_bindgen]
pub struct ReactionDiagram {
    pub(crate) inner: rxcoord::Diagram,
    pub(crate) target: Option<String>,
    pub(crate) listener: Option<rxcoord::ListenerId>,
    pub(crate) fonts: Vec<Vec<u8>>,
}

impl ReactionDiagram {
    pub fn rs_new() -> ReactionDiagram {
        ReactionDiagram { inner: rxcoord::Diagram::new(), target: None, listener: None, fonts: Vec::new() }
    }
    pub fn rs_version(&self) -> u64 { self.inner.version() }
}

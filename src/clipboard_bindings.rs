//! JavaScript bindings for the asynchronous Clipboard API
//!
//! `navigator.clipboard` only exists in secure contexts, so the call is made
//! with `catch`: a missing API surfaces as a rejected result rather than a
//! trap inside WASM.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Call `navigator.clipboard.writeText(text)` and await the returned Promise.
    /// Resolves to `undefined` on success.
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    pub async fn write_text_js(text: &str) -> Result<JsValue, JsValue>;
}

//! # Assembly Module
//!
//! This module exposes the converter to JavaScript hosts that render their
//! own UI. It is the bridge between JS event handlers and the Rust sync
//! logic in [`crate::converter`].
//!
//! ## Overview
//!
//! `FontSizeConverter` wraps a [`Converter`]:
//! - `set_pt` / `set_px` feed raw input text and return the edit outcome
//!   (`"rejected"`, `"pending"` or `"updated"`)
//! - `state_json` / `preview_json` return snapshots as JSON strings
//! - `on_change` registers a JS callback receiving the state JSON
//! - `copy` writes a field to the clipboard and resolves to a notification
//!
//! Hosts that want the ready-made widget should call
//! [`crate::ui::mount_converter`] instead.

use crate::clipboard::copy_value;
use crate::converter::Converter;
use crate::logging;
use crate::schema::{ConverterError, ConverterOptions, Unit};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::{JsError, wasm_bindgen};
use wasm_bindgen_futures::future_to_promise;

/// A point/pixel converter driven from JavaScript.
///
/// # Example
///
/// ```javascript
/// const conv = new FontSizeConverter(null);
/// conv.on_change((json) => render(JSON.parse(json)));
/// input.addEventListener("input", (e) => {
///   if (conv.set_pt(e.target.value) === "rejected") e.target.value = conv.pt();
/// });
/// const note = JSON.parse(await conv.copy("px"));
/// ```
#[wasm_bindgen]
pub struct FontSizeConverter {
    inner: Converter,
}

#[wasm_bindgen]
impl FontSizeConverter {
    /// Creates a converter. `options_json` deserializes to
    /// [`ConverterOptions`]; `None` or invalid JSON gives the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> FontSizeConverter {
        let options = ConverterOptions::from_json(options_json.as_deref());
        FontSizeConverter {
            inner: Converter::new(&options),
        }
    }

    pub fn pt(&self) -> String {
        self.inner.pt().to_string()
    }

    pub fn px(&self) -> String {
        self.inner.px().to_string()
    }

    pub fn set_pt(&mut self, text: &str) -> String {
        self.inner.on_point_edit(text).as_str().to_string()
    }

    pub fn set_px(&mut self, text: &str) -> String {
        self.inner.on_pixel_edit(text).as_str().to_string()
    }

    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.state()).map_err(ConverterError::from)?)
    }

    pub fn preview_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.preview()).map_err(ConverterError::from)?)
    }

    /// Registers `callback`, called with the state JSON after each change.
    pub fn on_change(&mut self, callback: js_sys::Function) {
        self.inner.set_on_change(move |state| {
            let payload = match serde_json::to_string(state) {
                Ok(s) => JsValue::from_str(&s),
                Err(e) => {
                    logging::warn(&format!("could not serialize converter state: {}", e));
                    return;
                }
            };
            // a throwing listener must not abort the edit that triggered it
            let _ = callback.call1(&JsValue::NULL, &payload);
        });
    }

    /// Copies the current value of `unit` (`"pt"` or `"px"`).
    ///
    /// Returns a Promise resolving to the notification JSON. Clipboard
    /// failures resolve too, with the `"Erreur"` notification.
    pub fn copy(&self, unit: &str) -> Result<js_sys::Promise, JsError> {
        let unit: Unit = unit.parse()?;
        let value = self.inner.value(unit).to_string();
        Ok(future_to_promise(async move {
            let notification = copy_value(&value, unit).await;
            serde_json::to_string(&notification)
                .map(|s| JsValue::from_str(&s))
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }))
    }
}

impl FontSizeConverter {
    pub fn converter(&self) -> &Converter {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ConverterState;

    #[test]
    fn test_constructor_and_edits() {
        let mut conv = FontSizeConverter::new(None);
        assert_eq!(conv.pt(), "12");
        assert_eq!(conv.px(), "16");

        assert_eq!(conv.set_pt("10"), "updated");
        assert_eq!(conv.px(), "13");
        assert_eq!(conv.set_px("abc"), "rejected");
        assert_eq!(conv.set_px(""), "pending");
        assert_eq!(conv.converter().pt(), "10");
    }

    #[test]
    fn test_constructor_options() {
        let conv = FontSizeConverter::new(Some(r#"{"initial_pt":"18"}"#.into()));
        assert_eq!(conv.px(), "24");

        let conv = FontSizeConverter::new(Some("{oops".into()));
        assert_eq!(conv.pt(), "12");
    }

    #[test]
    fn test_state_json() {
        let mut conv = FontSizeConverter::new(None);
        conv.set_px("20");
        let json = conv.state_json().ok().unwrap();
        let state: ConverterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.pt, "15");
        assert_eq!(state.last_edited, Some(Unit::Px));
        assert_eq!(state.preview.caption, "20px / 15pt");
    }
}

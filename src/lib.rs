pub mod assembly;
mod clipboard;
mod clipboard_bindings;
pub mod converter;
pub mod input_utils;
mod logging;
pub mod schema;
pub mod size_utils;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use assembly::FontSizeConverter;
pub use clipboard::{clipboard_text, copy_notification, copy_value};
pub use converter::Converter;
pub use schema::{
    ConverterError, ConverterOptions, ConverterState, EditOutcome, Notification,
    NotificationVariant, Preview, Unit,
};

/// Converts points to whole pixels (`round(pt * 1.3333333333)`).
#[wasm_bindgen]
pub fn pt_to_px(pt: f64) -> f64 {
    size_utils::pt_to_px(pt)
}

/// Converts pixels to points, rounded to two decimals.
#[wasm_bindgen]
pub fn px_to_pt(px: f64) -> f64 {
    size_utils::px_to_pt(px)
}

/// Whether `text` may be typed into a field (digits with at most one `.`).
#[wasm_bindgen]
pub fn is_valid_input(text: &str) -> bool {
    input_utils::is_decimal_input(text)
}

//! # Converter
//!
//! Holds the point and pixel fields and keeps them in sync.
//!
//! Each field is stored as the text the user typed. Editing one field
//! recomputes and overwrites the other one, and only the other one: the
//! edited field is never rewritten from its own derived value. This
//! "last edited wins" rule is what keeps the pair from bouncing between
//! `10pt -> 13px -> 9.75pt` on every keystroke.

use crate::input_utils::{is_decimal_input, parse_decimal};
use crate::schema::{ConverterOptions, ConverterState, EditOutcome, Preview, Unit};
use crate::size_utils::{format_number, pt_to_px, px_to_pt};

pub const DEFAULT_PT: &str = "12";
pub const DEFAULT_PX: &str = "16";
pub const DEFAULT_PREVIEW_TEXT: &str = "Exemple de texte";

type ChangeListener = Box<dyn FnMut(&ConverterState)>;

pub struct Converter {
    pt: String,
    px: String,
    preview_text: String,
    last_edited: Option<Unit>,
    on_change: Option<ChangeListener>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&ConverterOptions::default())
    }
}

impl Converter {
    /// Builds a converter from options.
    ///
    /// A valid `initial_pt` wins over `initial_px`; the missing side is
    /// derived. With neither, the fields start at 12pt / 16px.
    pub fn new(options: &ConverterOptions) -> Self {
        let (pt, px) = if let Some(fields) = options
            .initial_pt
            .as_deref()
            .and_then(|pt| Some((pt.to_string(), derive(Unit::Pt, pt)?)))
        {
            fields
        } else if let Some(fields) = options
            .initial_px
            .as_deref()
            .and_then(|px| Some((derive(Unit::Px, px)?, px.to_string())))
        {
            fields
        } else {
            (DEFAULT_PT.to_string(), DEFAULT_PX.to_string())
        };

        Self {
            pt,
            px,
            preview_text: options
                .preview_text
                .clone()
                .unwrap_or_else(|| DEFAULT_PREVIEW_TEXT.to_string()),
            last_edited: None,
            on_change: None,
        }
    }

    pub fn pt(&self) -> &str {
        &self.pt
    }

    pub fn px(&self) -> &str {
        &self.px
    }

    pub fn value(&self, unit: Unit) -> &str {
        match unit {
            Unit::Pt => &self.pt,
            Unit::Px => &self.px,
        }
    }

    pub fn last_edited(&self) -> Option<Unit> {
        self.last_edited
    }

    /// Registers the single listener called after every edit that changed
    /// at least one field. Replaces any previous listener.
    pub fn set_on_change(&mut self, listener: impl FnMut(&ConverterState) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn on_point_edit(&mut self, raw: &str) -> EditOutcome {
        self.edit(Unit::Pt, raw)
    }

    pub fn on_pixel_edit(&mut self, raw: &str) -> EditOutcome {
        self.edit(Unit::Px, raw)
    }

    /// Stores `raw` in the `unit` field and recomputes the other field.
    pub fn edit(&mut self, unit: Unit, raw: &str) -> EditOutcome {
        if !is_decimal_input(raw) {
            return EditOutcome::Rejected;
        }

        let mut changed = self.value(unit) != raw;
        if changed {
            *self.field_mut(unit) = raw.to_string();
        }
        self.last_edited = Some(unit);

        let outcome = match derive(unit, raw) {
            Some(derived) => {
                let other = self.field_mut(unit.other());
                if *other != derived {
                    *other = derived;
                    changed = true;
                }
                EditOutcome::Updated
            }
            None => EditOutcome::Pending,
        };

        if changed {
            self.notify();
        }
        outcome
    }

    pub fn preview(&self) -> Preview {
        Preview {
            text: self.preview_text.clone(),
            font_size: if self.px.is_empty() {
                None
            } else {
                Some(format!("{}px", self.px))
            },
            caption: format!("{}px / {}pt", self.px, self.pt),
        }
    }

    pub fn state(&self) -> ConverterState {
        ConverterState {
            pt: self.pt.clone(),
            px: self.px.clone(),
            last_edited: self.last_edited,
            preview: self.preview(),
        }
    }

    fn field_mut(&mut self, unit: Unit) -> &mut String {
        match unit {
            Unit::Pt => &mut self.pt,
            Unit::Px => &mut self.px,
        }
    }

    fn notify(&mut self) {
        // take the listener out so it may read a fresh snapshot without aliasing self
        if let Some(mut listener) = self.on_change.take() {
            let state = self.state();
            listener(&state);
            self.on_change = Some(listener);
        }
    }
}

/// Text of the other field for accepted `raw` text in `unit`, or `None`
/// while `raw` is not a number yet or converts past the `f64` range.
fn derive(unit: Unit, raw: &str) -> Option<String> {
    let value = parse_decimal(raw)?;
    let converted = match unit {
        Unit::Pt => pt_to_px(value),
        Unit::Px => px_to_pt(value),
    };
    if !converted.is_finite() {
        return None;
    }
    Some(format_number(converted))
}

//! Data structures and types for the font size converter.
//!
//! This module defines the error type, the configuration options read from
//! JSON, and the values handed back to JavaScript (state snapshots, previews
//! and notifications).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while driving the converter.
///
/// Rejected keystrokes are not errors; they are reported as
/// [`EditOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Writing to the system clipboard failed or the API is unavailable.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
    /// A DOM element could not be found or created.
    #[error("DOM error: {0}")]
    Dom(String),
    /// A unit name other than `pt` or `px` was requested.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    /// A value could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The two units the converter keeps in sync.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Typographic point, 1/72 inch.
    Pt,
    /// CSS pixel at 96 DPI.
    Px,
}

impl Unit {
    /// Suffix appended to a value when it is copied.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
            Unit::Px => "px",
        }
    }

    /// Field label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Pt => "Points (pt)",
            Unit::Px => "Pixels (px)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Unit::Pt => "Entrez une valeur en pt",
            Unit::Px => "Entrez une valeur en px",
        }
    }

    /// The field that gets recomputed when this one is edited.
    pub fn other(self) -> Unit {
        match self {
            Unit::Pt => Unit::Px,
            Unit::Px => Unit::Pt,
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Unit::Pt),
            "px" => Ok(Unit::Px),
            other => Err(ConverterError::UnknownUnit(other.to_string())),
        }
    }
}

/// Result of feeding raw text into one of the fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EditOutcome {
    /// The text failed the decimal filter; nothing changed.
    Rejected,
    /// The text was stored but is empty or not a number yet (e.g. `"."`).
    Pending,
    /// The text was stored and the other field was recomputed.
    Updated,
}

impl EditOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EditOutcome::Rejected => "rejected",
            EditOutcome::Pending => "pending",
            EditOutcome::Updated => "updated",
        }
    }
}

/// Visual weight of a notification.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Used for failures.
    Destructive,
}

/// A transient message shown to the user after a copy attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

/// What the preview pane displays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preview {
    /// Sample sentence rendered at the pixel size.
    pub text: String,
    /// CSS `font-size` value, absent while the pixel field is empty.
    pub font_size: Option<String>,
    /// Summary line, e.g. `"16px / 12pt"`.
    pub caption: String,
}

/// Snapshot of the converter handed to change listeners and to JavaScript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub pt: String,
    pub px: String,
    /// The field the user edited last, if any.
    pub last_edited: Option<Unit>,
    pub preview: Preview,
}

/// Configuration options for the converter widget.
///
/// All fields are optional. The structure is deserialized from a JSON
/// string passed in from JavaScript; missing or malformed JSON yields the
/// defaults.
///
/// # Examples
///
/// Defaults (12pt / 16px):
/// ```json
/// {}
/// ```
///
/// Start from a pixel size:
/// ```json
/// { "initial_px": "24", "preview_text": "The quick brown fox" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ConverterOptions {
    /// Starting point value. When valid, the pixel value is derived from it.
    pub initial_pt: Option<String>,
    /// Starting pixel value, used only when `initial_pt` is absent or invalid.
    pub initial_px: Option<String>,
    /// Sample sentence for the preview pane.
    pub preview_text: Option<String>,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_duration_ms: u32,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            initial_pt: None,
            initial_px: None,
            preview_text: None,
            toast_duration_ms: 3000,
        }
    }
}

impl ConverterOptions {
    /// Parses options from optional JSON, falling back to defaults.
    pub fn from_json(options_json: Option<&str>) -> Self {
        match options_json {
            Some(s) => serde_json::from_str(s).unwrap_or_default(),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("pt".parse::<Unit>().ok(), Some(Unit::Pt));
        assert_eq!(" PX ".parse::<Unit>().ok(), Some(Unit::Px));
        assert!(matches!(
            "em".parse::<Unit>(),
            Err(ConverterError::UnknownUnit(u)) if u == "em"
        ));
    }

    #[test]
    fn test_options_from_json() {
        let opts = ConverterOptions::from_json(Some(r#"{"initial_px":"24"}"#));
        assert_eq!(opts.initial_px.as_deref(), Some("24"));
        assert_eq!(opts.toast_duration_ms, 3000);

        let bad = ConverterOptions::from_json(Some("not json"));
        assert!(bad.initial_pt.is_none());
        assert_eq!(bad.toast_duration_ms, 3000);
    }

    #[test]
    fn test_state_serializes_lowercase_unit() {
        let state = ConverterState {
            pt: "12".into(),
            px: "16".into(),
            last_edited: Some(Unit::Pt),
            preview: Preview {
                text: "x".into(),
                font_size: Some("16px".into()),
                caption: "16px / 12pt".into(),
            },
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["last_edited"], "pt");
        assert_eq!(json["preview"]["font_size"], "16px");
    }
}

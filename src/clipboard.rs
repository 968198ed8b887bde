//! Copying field values to the system clipboard.
//!
//! A copy never touches converter state. Its only visible effect besides the
//! clipboard itself is the [`Notification`] describing how it went.

use crate::clipboard_bindings::write_text_js;
use crate::logging;
use crate::schema::{ConverterError, Notification, NotificationVariant, Unit};

pub const COPIED_TITLE: &str = "Copié!";
pub const ERROR_TITLE: &str = "Erreur";
pub const ERROR_DESCRIPTION: &str = "Impossible de copier dans le presse-papiers.";

/// Text placed on the clipboard for a field, e.g. `"16px"`.
pub fn clipboard_text(value: &str, unit: Unit) -> String {
    format!("{}{}", value, unit.suffix())
}

/// Builds the notification shown after a copy attempt.
pub fn copy_notification(
    value: &str,
    unit: Unit,
    result: &Result<(), ConverterError>,
) -> Notification {
    match result {
        Ok(()) => Notification {
            title: COPIED_TITLE.into(),
            description: format!(
                "{} a été copié dans le presse-papiers.",
                clipboard_text(value, unit)
            ),
            variant: NotificationVariant::Default,
        },
        Err(_) => Notification {
            title: ERROR_TITLE.into(),
            description: ERROR_DESCRIPTION.into(),
            variant: NotificationVariant::Destructive,
        },
    }
}

/// Writes `text` to the clipboard through `navigator.clipboard`.
pub async fn write_to_clipboard(text: &str) -> Result<(), ConverterError> {
    write_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| ConverterError::Clipboard(format!("{:?}", e)))
}

/// Copies `value` followed by the unit suffix and reports the outcome.
///
/// Failures are logged and folded into a destructive notification; they are
/// never returned as errors.
pub async fn copy_value(value: &str, unit: Unit) -> Notification {
    let text = clipboard_text(value, unit);
    let result = write_to_clipboard(&text).await;
    match &result {
        Ok(()) => logging::debug(&format!("copied {:?} to clipboard", text)),
        Err(e) => logging::warn(&e.to_string()),
    }
    copy_notification(value, unit, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text() {
        assert_eq!(clipboard_text("16", Unit::Px), "16px");
        assert_eq!(clipboard_text("12.5", Unit::Pt), "12.5pt");
    }

    #[test]
    fn test_success_notification() {
        let n = copy_notification("16", Unit::Px, &Ok(()));
        assert_eq!(n.title, "Copié!");
        assert_eq!(n.description, "16px a été copié dans le presse-papiers.");
        assert_eq!(n.variant, NotificationVariant::Default);
    }

    #[test]
    fn test_failure_notification() {
        let err = Err(ConverterError::Clipboard("denied".into()));
        let n = copy_notification("16", Unit::Px, &err);
        assert_eq!(n.title, "Erreur");
        assert_eq!(n.description, "Impossible de copier dans le presse-papiers.");
        assert_eq!(n.variant, NotificationVariant::Destructive);
    }
}

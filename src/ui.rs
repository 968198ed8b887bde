//! # DOM Widget
//!
//! Builds the converter card inside a host element and wires it up:
//!
//! - an `input` listener per field feeds text into the [`Converter`]; a
//!   rejected keystroke puts the stored value back, like a controlled input
//! - the converter's change listener redraws the other field and the preview
//! - each "Copier" button copies its field and shows a toast
//!
//! Listener closures are leaked with `forget`; the widget lives as long as
//! the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::clipboard::copy_value;
use crate::converter::Converter;
use crate::logging;
use crate::schema::{
    ConverterError, ConverterOptions, ConverterState, EditOutcome, Notification,
    NotificationVariant, Unit,
};

const TITLE: &str = "Convertisseur de Font-Size";
const COPY_LABEL: &str = "Copier";
const PREVIEW_HEADER: &str = "Aperçu";

/// Handles to the elements that change after mount.
#[derive(Clone)]
struct View {
    document: Document,
    pt_input: HtmlInputElement,
    px_input: HtmlInputElement,
    preview_text: HtmlElement,
    caption: Element,
    toast_host: Element,
    toast_duration_ms: u32,
}

impl View {
    fn input(&self, unit: Unit) -> &HtmlInputElement {
        match unit {
            Unit::Pt => &self.pt_input,
            Unit::Px => &self.px_input,
        }
    }

    fn render(&self, state: &ConverterState) {
        // leave the focused field alone when it already holds the text, so the caret stays put
        for (input, value) in [(&self.pt_input, &state.pt), (&self.px_input, &state.px)] {
            if input.value() != *value {
                input.set_value(value);
            }
        }

        let style = self.preview_text.style();
        let styled = match &state.preview.font_size {
            Some(size) => style.set_property("font-size", size),
            None => style.remove_property("font-size").map(|_| ()),
        };
        if let Err(e) = styled {
            logging::warn(&format!("could not style preview: {:?}", e));
        }
        self.preview_text
            .set_text_content(Some(&state.preview.text));
        self.caption.set_text_content(Some(&state.preview.caption));
    }

    fn show_toast(&self, notification: &Notification) -> Result<(), ConverterError> {
        let variant = match notification.variant {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        };
        let toast = create(&self.document, "div", &format!("fsc-toast fsc-toast-{}", variant))?;
        toast
            .set_attribute("role", "status")
            .map_err(dom_error)?;
        let title = create(&self.document, "strong", "fsc-toast-title")?;
        title.set_text_content(Some(&notification.title));
        let description = create(&self.document, "div", "fsc-toast-description")?;
        description.set_text_content(Some(&notification.description));
        append(&toast, &title)?;
        append(&toast, &description)?;
        append(&self.toast_host, &toast)?;

        let dismiss = toast.clone();
        let on_click = Closure::once_into_js(move || dismiss.remove());
        toast
            .add_event_listener_with_callback("click", on_click.unchecked_ref())
            .map_err(dom_error)?;

        let window = web_sys::window().ok_or_else(|| ConverterError::Dom("no window".into()))?;
        let expire = Closure::once_into_js(move || toast.remove());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                i32::try_from(self.toast_duration_ms).unwrap_or(i32::MAX),
            )
            .map_err(dom_error)?;
        Ok(())
    }
}

/// Builds the converter widget inside the element with id `container_id`.
///
/// `options_json` deserializes to [`ConverterOptions`]; `None` or invalid
/// JSON gives the defaults.
///
/// ```javascript
/// import init, { mount_converter } from "./pkg/font_size_converter_wasm.js";
/// await init();
/// mount_converter("app", JSON.stringify({ preview_text: "Bonjour" }));
/// ```
#[wasm_bindgen]
pub fn mount_converter(container_id: &str, options_json: Option<String>) -> Result<(), JsError> {
    let options = ConverterOptions::from_json(options_json.as_deref());
    mount(container_id, &options)?;
    logging::debug(&format!("converter mounted in #{}", container_id));
    Ok(())
}

fn mount(container_id: &str, options: &ConverterOptions) -> Result<(), ConverterError> {
    let window = web_sys::window().ok_or_else(|| ConverterError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ConverterError::Dom("no document".into()))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| ConverterError::Dom(format!("no element with id '{}'", container_id)))?;

    let converter = Rc::new(RefCell::new(Converter::new(options)));

    let card = create(&document, "div", "fsc-card")?;
    let title = create(&document, "h2", "fsc-title")?;
    title.set_text_content(Some(TITLE));
    append(&card, &title)?;

    let (pt_section, pt_input, pt_copy) = field(&document, Unit::Pt)?;
    let arrows = create(&document, "div", "fsc-arrows")?;
    arrows.set_text_content(Some("↓ ↑"));
    let (px_section, px_input, px_copy) = field(&document, Unit::Px)?;
    append(&card, &pt_section)?;
    append(&card, &arrows)?;
    append(&card, &px_section)?;

    let preview = create(&document, "div", "fsc-preview")?;
    let header = create(&document, "h3", "fsc-preview-header")?;
    header.set_text_content(Some(PREVIEW_HEADER));
    let preview_text = create(&document, "p", "fsc-preview-text")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ConverterError::Dom("preview is not an HTMLElement".into()))?;
    let caption = create(&document, "div", "fsc-preview-caption")?;
    append(&preview, &header)?;
    append(&preview, &preview_text)?;
    append(&preview, &caption)?;
    append(&card, &preview)?;

    let toast_host = create(&document, "div", "fsc-toasts")?;
    append(&card, &toast_host)?;
    append(&container, &card)?;

    let view = Rc::new(View {
        document,
        pt_input,
        px_input,
        preview_text,
        caption,
        toast_host,
        toast_duration_ms: options.toast_duration_ms,
    });
    view.render(&converter.borrow().state());

    let listener_view = Rc::clone(&view);
    converter
        .borrow_mut()
        .set_on_change(move |state| listener_view.render(state));

    for unit in [Unit::Pt, Unit::Px] {
        wire_input(&converter, &view, unit)?;
    }
    wire_copy(&converter, &view, &pt_copy, Unit::Pt)?;
    wire_copy(&converter, &view, &px_copy, Unit::Px)?;
    Ok(())
}

/// Label row, copy button and text input for one unit.
fn field(
    document: &Document,
    unit: Unit,
) -> Result<(Element, HtmlInputElement, Element), ConverterError> {
    let id = format!("{}-input", unit.suffix());
    let section = create(document, "div", "fsc-field")?;
    let row = create(document, "div", "fsc-field-row")?;

    let label = create(document, "label", "fsc-label")?;
    label.set_attribute("for", &id).map_err(dom_error)?;
    label.set_text_content(Some(unit.label()));

    let copy = create(document, "button", "fsc-copy")?;
    copy.set_attribute("type", "button").map_err(dom_error)?;
    copy.set_text_content(Some(COPY_LABEL));

    let input = create(document, "input", "fsc-input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ConverterError::Dom("input is not an HTMLInputElement".into()))?;
    input.set_id(&id);
    input.set_type("text");
    input.set_placeholder(unit.placeholder());

    append(&row, &label)?;
    append(&row, &copy)?;
    append(&section, &row)?;
    append(&section, &input)?;
    Ok((section, input, copy))
}

fn wire_input(
    converter: &Rc<RefCell<Converter>>,
    view: &Rc<View>,
    unit: Unit,
) -> Result<(), ConverterError> {
    let converter = Rc::clone(converter);
    let handler_view = Rc::clone(view);
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let input = handler_view.input(unit);
        let raw = input.value();
        let outcome = converter.borrow_mut().edit(unit, &raw);
        if outcome == EditOutcome::Rejected {
            input.set_value(converter.borrow().value(unit));
        }
    });
    view.input(unit)
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_input.forget();
    Ok(())
}

fn wire_copy(
    converter: &Rc<RefCell<Converter>>,
    view: &Rc<View>,
    button: &Element,
    unit: Unit,
) -> Result<(), ConverterError> {
    let converter = Rc::clone(converter);
    let view = Rc::clone(view);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let value = converter.borrow().value(unit).to_string();
        let view = Rc::clone(&view);
        wasm_bindgen_futures::spawn_local(async move {
            let notification = copy_value(&value, unit).await;
            if let Err(e) = view.show_toast(&notification) {
                logging::warn(&e.to_string());
            }
        });
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_click.forget();
    Ok(())
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, ConverterError> {
    let el = document.create_element(tag).map_err(dom_error)?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &Element, child: &Element) -> Result<(), ConverterError> {
    parent.append_child(child).map(|_| ()).map_err(dom_error)
}

fn dom_error(e: JsValue) -> ConverterError {
    ConverterError::Dom(format!("{:?}", e))
}

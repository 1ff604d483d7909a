//! Page enhancers for server-rendered markup outside the Dioxus root.
//!
//! Listeners installed here never touch signals directly. Anything that must
//! change component state is sent as a [`ChromeEvent`] to the coroutine owned
//! by `App`.

use futures_channel::mpsc::UnboundedSender;
use gztechiz_core::page::{blank_required_fields, PreviewStyle, ReplyDraft, INVALID_BORDER, REPLY_TITLE_COLOR};
use gztechiz_core::types::NoticeKind;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, FileReader, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::browser::{self, document, set_style, window};

const REQUIRED_FIELDS: &str = "input[required], textarea[required], select[required]";

#[derive(Debug, Clone, PartialEq)]
pub enum ChromeEvent {
    DocumentClick { in_search: bool, in_dropdown: bool },
    Scrolled(f64),
    Toast(NoticeKind, String),
}

fn js_err(e: JsValue) -> String {
    format!("{e:?}")
}

fn send(tx: &UnboundedSender<ChromeEvent>, event: ChromeEvent) {
    if tx.unbounded_send(event).is_err() {
        debug!("Chrome coroutine gone; event dropped");
    }
}

/// Attach document/window listeners and expose the page globals.
pub fn install(tx: UnboundedSender<ChromeEvent>) -> Result<(), String> {
    let win = window().ok_or("no window")?;
    let doc = document().ok_or("no document")?;

    // Document clicks: outside-click detection plus delegated reply buttons.
    {
        let tx = tx.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let inside = |selector: &str| matches!(target.closest(selector), Ok(Some(_)));

            if let Ok(Some(button)) = target.closest(".comment-reply") {
                let id = button.get_attribute("data-comment-id").unwrap_or_default();
                let author = button.get_attribute("data-author-name").unwrap_or_default();
                reply_to_comment(&id, &author);
            }

            send(
                &tx,
                ChromeEvent::DocumentClick {
                    in_search: inside(".navbar-search"),
                    in_dropdown: inside(".navbar-dropdown"),
                },
            );
        });
        doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(js_err)?;
        on_click.forget();
    }

    {
        let tx = tx.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            send(&tx, ChromeEvent::Scrolled(browser::scroll_offset()));
        });
        win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(js_err)?;
        on_scroll.forget();
    }

    expose_globals(&win, tx)
}

// ---------------------------------------------------------------------------
// Window globals for inline template handlers
// ---------------------------------------------------------------------------

fn set_global(win: &web_sys::Window, name: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(win, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(js_err)
}

fn expose_globals(win: &web_sys::Window, tx: UnboundedSender<ChromeEvent>) -> Result<(), String> {
    let copy = {
        let tx = tx.clone();
        Closure::<dyn Fn(String)>::new(move |text: String| {
            let tx = tx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let toast = match browser::copy_text(&text).await {
                    Ok(()) => ChromeEvent::Toast(NoticeKind::Success, "Link copied to clipboard!".into()),
                    Err(e) => {
                        warn!(error = %e, "Failed to copy");
                        ChromeEvent::Toast(NoticeKind::Error, "Failed to copy link".into())
                    }
                };
                send(&tx, toast);
            });
        })
    };
    set_global(win, "copyToClipboard", copy.as_ref())?;
    copy.forget();

    let toast = Closure::<dyn Fn(String, JsValue)>::new(move |message: String, kind: JsValue| {
        let kind = kind.as_string().unwrap_or_else(|| "info".to_string());
        send(&tx, ChromeEvent::Toast(NoticeKind::from_category(&kind), message));
    });
    set_global(win, "showToast", toast.as_ref())?;
    toast.forget();

    let preview = Closure::<dyn Fn(JsValue, String)>::new(|input: JsValue, preview_id: String| {
        if let Err(e) = preview_image(input, &preview_id) {
            warn!(preview_id, error = %e, "Image preview failed");
        }
    });
    set_global(win, "previewImage", preview.as_ref())?;
    preview.forget();

    let reply = Closure::<dyn Fn(String, String)>::new(|id: String, author: String| {
        reply_to_comment(&id, &author);
    });
    set_global(win, "replyToComment", reply.as_ref())?;
    reply.forget();

    let validate = Closure::<dyn Fn(String) -> bool>::new(|form_id: String| validate_form(&form_id));
    set_global(win, "validateForm", validate.as_ref())?;
    validate.forget();

    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn reply_to_comment(comment_id: &str, author: &str) {
    let Some(doc) = document() else { return };
    let draft = ReplyDraft::new(comment_id, author);
    debug!(parent = draft.parent_id.as_str(), "Replying to comment");

    if let Some(parent) = doc
        .get_element_by_id("parent_id")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        parent.set_value(&draft.parent_id);
    }

    if let Some(text) = doc
        .get_element_by_id("text")
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    {
        text.set_value(&draft.text);
        let _ = text.focus();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        text.scroll_into_view_with_scroll_into_view_options(&options);
    }

    if let Ok(Some(title)) = doc.query_selector(".comment-form h3") {
        title.set_text_content(Some(&draft.title));
        set_style(&title, "color", REPLY_TITLE_COLOR);
    }
}

/// Mark blank required fields of `#form_id`. A missing form is valid.
pub fn validate_form(form_id: &str) -> bool {
    let Some(form) = document().and_then(|d| d.get_element_by_id(form_id)) else {
        return true;
    };
    let Ok(nodes) = form.query_selector_all(REQUIRED_FIELDS) else {
        return true;
    };

    let fields: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    let values = fields.iter().map(|el| {
        js_sys::Reflect::get(el, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    });
    let blank = blank_required_fields(values.enumerate());

    for (i, field) in fields.iter().enumerate() {
        let color = if blank.contains(&i) { INVALID_BORDER } else { "" };
        set_style(field, "border-color", color);
    }
    blank.is_empty()
}

fn preview_image(input: JsValue, preview_id: &str) -> Result<(), String> {
    let doc = document().ok_or("no document")?;
    let Some(preview) = doc.get_element_by_id(preview_id) else {
        return Ok(());
    };
    preview.set_inner_html("");

    let input: HtmlInputElement = input.dyn_into().map_err(|_| "not an input element")?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    let reader = FileReader::new().map_err(js_err)?;
    let onload = {
        let reader = reader.clone();
        Closure::once_into_js(move || {
            let Some(src) = reader.result().ok().and_then(|r| r.as_string()) else {
                return;
            };
            let img = match doc.create_element("img") {
                Ok(img) => img,
                Err(e) => {
                    warn!(error = ?e, "Could not create preview image");
                    return;
                }
            };
            let _ = img.set_attribute("src", &src);
            let _ = img.set_attribute("style", &PreviewStyle::default().css());
            if let Err(e) = preview.append_child(&img) {
                warn!(error = ?e, "Could not attach preview image");
            }
        })
    };
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(&file).map_err(js_err)
}

/// Focus an element by id, ignoring anything that isn't focusable.
pub fn focus(id: &str) {
    if let Some(el) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

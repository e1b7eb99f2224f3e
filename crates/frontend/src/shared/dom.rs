//! Live-page implementations of the broker ports.
//!
//! The markup belongs to the host page, so every lookup is re-done on each
//! call and a missing element is skipped silently.

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use lead_contracts::domain::a001_form_config::aggregate::TriggerAttributes;
use lead_contracts::domain::a002_lead_submission::aggregate::LeadField;
use lead_contracts::shared::validation::ErrorSlot;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::ports::{
    BrowserHost, FormSurface, HiddenField, ModalText, CONSENT_SELECTOR, MESSAGE_BOX_ID,
    SUBMIT_BUTTON_ID,
};

// ── Lookups ──────────────────────────────────────────────────────────────────

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_text(element: &Element, text: &str) {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.set_inner_text(text),
        None => element.set_text_content(Some(text)),
    }
}

fn read_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

fn write_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

fn consent_input() -> Option<HtmlInputElement> {
    query(CONSENT_SELECTOR).and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

/// Read the `data-*` attributes of a modal trigger
pub fn trigger_attributes(element: &Element) -> TriggerAttributes {
    TriggerAttributes {
        title: element.get_attribute("data-title"),
        content: element.get_attribute("data-content"),
        button_label: element.get_attribute("data-btnlabel"),
        thankyou_page: element.get_attribute("data-thankyou"),
        lead_source: element.get_attribute("data-leadsource"),
    }
}

// ── FormSurface ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct DomFormSurface;

impl FormSurface for DomFormSurface {
    fn field_value(&self, field: LeadField) -> Option<String> {
        query(field.selector()).and_then(|e| read_value(&e))
    }

    fn set_field_value(&self, field: LeadField, value: &str) {
        if let Some(element) = query(field.selector()) {
            write_value(&element, value);
        }
    }

    fn consent_checked(&self) -> bool {
        consent_input().map(|i| i.checked()).unwrap_or(false)
    }

    fn set_consent_checked(&self, checked: bool) {
        if let Some(input) = consent_input() {
            input.set_checked(checked);
        }
    }

    fn set_error_text(&self, slot: ErrorSlot, text: &str) {
        if let Some(element) = query(slot.selector()) {
            set_text(&element, text);
        }
    }

    fn set_modal_text(&self, target: ModalText, text: &str) {
        if let Some(element) = by_id(target.element_id()) {
            set_text(&element, text);
        }
    }

    fn hidden_value(&self, field: HiddenField) -> Option<String> {
        by_id(field.element_id()).and_then(|e| read_value(&e))
    }

    fn set_hidden_value(&self, field: HiddenField, value: &str) {
        if let Some(element) = by_id(field.element_id()) {
            write_value(&element, value);
        }
    }

    fn set_message_box_visible(&self, visible: bool) {
        let Some(msg_box) = by_id(MESSAGE_BOX_ID).and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        let _ = msg_box.style().set_property("display", display);
    }

    fn has_submit_button(&self) -> bool {
        by_id(SUBMIT_BUTTON_ID).is_some()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let Some(element) = by_id(SUBMIT_BUTTON_ID) else {
            return;
        };
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!enabled);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(!enabled);
        } else if enabled {
            let _ = element.remove_attribute("disabled");
        } else {
            let _ = element.set_attribute("disabled", "");
        }
    }
}

// ── BrowserHost ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct DomBrowserHost;

impl BrowserHost for DomBrowserHost {
    fn open_in_new_tab(&self, url: &str) {
        if let Some(w) = window() {
            if let Err(e) = w.open_with_url_and_target(url, "_blank") {
                log::warn!("Failed to open {}: {:?}", url, e);
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn store_item(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected key {}", key);
            }
        }
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn schedule_reload(&self, delay_ms: u32) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(w) = window() {
                let _ = w.location().reload();
            }
        });
    }
}

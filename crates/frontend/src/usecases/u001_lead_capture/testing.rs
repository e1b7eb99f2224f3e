//! In-memory page used by the lead-capture tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use lead_contracts::domain::a002_lead_submission::aggregate::LeadField;
use lead_contracts::shared::errors::SubmitError;
use lead_contracts::shared::validation::ErrorSlot;

use crate::shared::config::TransportMode;
use crate::shared::ports::{BrowserHost, FormSurface, HiddenField, ModalText, WebhookTransport};

/// Fields present in the map exist in the page; absent ones are missing elements
pub struct MemorySurface {
    pub fields: RefCell<HashMap<LeadField, String>>,
    pub consent: Cell<bool>,
    pub errors: RefCell<HashMap<ErrorSlot, String>>,
    pub texts: RefCell<HashMap<ModalText, String>>,
    pub hidden: RefCell<HashMap<HiddenField, String>>,
    pub message_box_visible: Cell<Option<bool>>,
    pub submit_present: bool,
    pub submit_enabled: Cell<bool>,
}

impl MemorySurface {
    /// The stock modal with every element present and empty
    pub fn modal() -> Self {
        let fields = LeadField::all()
            .into_iter()
            .map(|f| (f, String::new()))
            .collect();
        let hidden = [HiddenField::ThankyouPage, HiddenField::LeadSource]
            .into_iter()
            .map(|h| (h, String::new()))
            .collect();
        Self {
            fields: RefCell::new(fields),
            consent: Cell::new(false),
            errors: RefCell::new(HashMap::new()),
            texts: RefCell::new(HashMap::new()),
            hidden: RefCell::new(hidden),
            message_box_visible: Cell::new(None),
            submit_present: true,
            submit_enabled: Cell::new(true),
        }
    }

    pub fn without_submit_button() -> Self {
        Self {
            submit_present: false,
            ..Self::modal()
        }
    }

    /// A visitor who filled everything in correctly
    pub fn filled() -> Self {
        let surface = Self::modal();
        surface.type_into(LeadField::Firstname, "Ada");
        surface.type_into(LeadField::Lastname, "Lovelace");
        surface.type_into(LeadField::Email, "ada@example.com");
        surface.type_into(LeadField::Phone, "123-456-7890");
        surface.consent.set(true);
        surface
    }

    pub fn type_into(&self, field: LeadField, value: &str) {
        self.fields.borrow_mut().insert(field, value.to_string());
    }

    pub fn error(&self, slot: ErrorSlot) -> String {
        self.errors.borrow().get(&slot).cloned().unwrap_or_default()
    }

    pub fn text(&self, target: ModalText) -> Option<String> {
        self.texts.borrow().get(&target).cloned()
    }

    pub fn hidden(&self, field: HiddenField) -> Option<String> {
        self.hidden.borrow().get(&field).cloned()
    }
}

impl FormSurface for MemorySurface {
    fn field_value(&self, field: LeadField) -> Option<String> {
        self.fields.borrow().get(&field).cloned()
    }

    fn set_field_value(&self, field: LeadField, value: &str) {
        if let Some(slot) = self.fields.borrow_mut().get_mut(&field) {
            *slot = value.to_string();
        }
    }

    fn consent_checked(&self) -> bool {
        self.consent.get()
    }

    fn set_consent_checked(&self, checked: bool) {
        self.consent.set(checked);
    }

    fn set_error_text(&self, slot: ErrorSlot, text: &str) {
        self.errors.borrow_mut().insert(slot, text.to_string());
    }

    fn set_modal_text(&self, target: ModalText, text: &str) {
        if target == ModalText::SubmitLabel && !self.submit_present {
            return;
        }
        self.texts.borrow_mut().insert(target, text.to_string());
    }

    fn hidden_value(&self, field: HiddenField) -> Option<String> {
        self.hidden.borrow().get(&field).cloned()
    }

    fn set_hidden_value(&self, field: HiddenField, value: &str) {
        if let Some(slot) = self.hidden.borrow_mut().get_mut(&field) {
            *slot = value.to_string();
        }
    }

    fn set_message_box_visible(&self, visible: bool) {
        self.message_box_visible.set(Some(visible));
    }

    fn has_submit_button(&self) -> bool {
        self.submit_present
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if self.submit_present {
            self.submit_enabled.set(enabled);
        }
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub opened: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub stored: RefCell<HashMap<String, String>>,
    pub reloads: RefCell<Vec<u32>>,
}

impl RecordingHost {
    pub fn stored_json(&self, key: &str) -> Option<serde_json::Value> {
        self.stored
            .borrow()
            .get(key)
            .map(|raw| serde_json::from_str(raw).unwrap())
    }
}

impl BrowserHost for RecordingHost {
    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn store_item(&self, key: &str, value: &str) {
        self.stored
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    fn schedule_reload(&self, delay_ms: u32) {
        self.reloads.borrow_mut().push(delay_ms);
    }
}

pub struct PostedRequest {
    pub url: String,
    pub body: String,
    pub mode: TransportMode,
    /// Submit button state while the request was in flight
    pub submit_enabled: Option<bool>,
    pub submit_label: Option<String>,
}

/// Records every POST and answers with a canned result
pub struct RecordingTransport<'a> {
    pub surface: Option<&'a MemorySurface>,
    pub result: Result<(), SubmitError>,
    pub posted: RefCell<Vec<PostedRequest>>,
}

impl<'a> RecordingTransport<'a> {
    pub fn ok() -> Self {
        Self::answering(Ok(()))
    }

    pub fn answering(result: Result<(), SubmitError>) -> Self {
        Self {
            surface: None,
            result,
            posted: RefCell::new(Vec::new()),
        }
    }

    pub fn watching(mut self, surface: &'a MemorySurface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn call_count(&self) -> usize {
        self.posted.borrow().len()
    }
}

impl WebhookTransport for RecordingTransport<'_> {
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        mode: TransportMode,
    ) -> Result<(), SubmitError> {
        self.posted.borrow_mut().push(PostedRequest {
            url: url.to_string(),
            body: body.to_string(),
            mode,
            submit_enabled: self.surface.map(|s| s.submit_enabled.get()),
            submit_label: self.surface.and_then(|s| s.text(ModalText::SubmitLabel)),
        });
        self.result.clone()
    }
}

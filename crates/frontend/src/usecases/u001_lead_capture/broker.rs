//! Event wiring for the live page

use std::cell::RefCell;
use std::rc::Rc;

use lead_contracts::domain::a001_form_config::aggregate::FormConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement};

use super::api::FetchWebhookTransport;
use super::configurator::configure_modal;
use super::orchestrator::{begin_submission, finish_submission};
use crate::shared::config::BrokerSettings;
use crate::shared::dom::{by_id, query_all, trigger_attributes, DomBrowserHost, DomFormSurface};
use crate::shared::ports::{FORM_ID, SUBMIT_BUTTON_ID, TRIGGER_SELECTOR};

/// State shared by the listeners of one installed broker
pub struct FormBroker {
    settings: BrokerSettings,
    config: RefCell<FormConfig>,
    on_validated: Option<js_sys::Function>,
    surface: DomFormSurface,
    host: DomBrowserHost,
    transport: FetchWebhookTransport,
}

impl FormBroker {
    pub fn new(settings: BrokerSettings, on_validated: Option<js_sys::Function>) -> Self {
        Self {
            settings,
            config: RefCell::new(FormConfig::default()),
            on_validated,
            surface: DomFormSurface,
            host: DomBrowserHost,
            transport: FetchWebhookTransport,
        }
    }

    pub fn config(&self) -> FormConfig {
        self.config.borrow().clone()
    }

    fn on_trigger_click(&self, trigger: &Element) {
        log::debug!("Modal trigger clicked");
        let config = configure_modal(&self.surface, &trigger_attributes(trigger));
        *self.config.borrow_mut() = config;
    }

    fn on_submit_click(self: &Rc<Self>, event: Event) {
        event.prevent_default();
        let config = self.config();

        let call_hook = |func: &js_sys::Function| -> Result<(), String> {
            func.call1(&JsValue::NULL, &event)
                .map(|_| ())
                .map_err(|e| format!("{:?}", e))
        };
        let hook = self.on_validated.as_ref().map(|func| move || call_hook(func));
        let hook_ref = hook.as_ref().map(|h| h as &dyn Fn() -> Result<(), String>);

        if !begin_submission(&self.surface, &self.host, &config, hook_ref) {
            return;
        }

        let broker = Rc::clone(self);
        spawn_local(async move {
            finish_submission(
                &broker.surface,
                &broker.host,
                &broker.transport,
                &broker.settings,
                &config,
            )
            .await;
        });
    }
}

fn listen<F>(target: &Element, event_name: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not attach {} listener", event_name);
    }
    // listeners live as long as the page
    closure.forget();
}

/// Attach the broker to the modal triggers, the submit button and the form
pub fn install(settings: BrokerSettings, on_validated: Option<js_sys::Function>) -> Rc<FormBroker> {
    let broker = Rc::new(FormBroker::new(settings, on_validated));

    let triggers = query_all(TRIGGER_SELECTOR);
    log::debug!("Found {} modal triggers", triggers.len());
    for trigger in triggers {
        let broker = Rc::clone(&broker);
        let element = trigger.clone();
        listen(&trigger, "click", move |_| broker.on_trigger_click(&element));
    }

    match by_id(SUBMIT_BUTTON_ID) {
        Some(button) => {
            let broker = Rc::clone(&broker);
            listen(&button, "click", move |event| broker.on_submit_click(event));
        }
        None => log::error!("Submit button #{} not found", SUBMIT_BUTTON_ID),
    }

    // Enter key submits the form natively; route it through the button handler
    if let Some(form) = by_id(FORM_ID) {
        listen(&form, "submit", |event| {
            event.prevent_default();
            log::debug!("Form submit event triggered");
            if let Some(button) = by_id(SUBMIT_BUTTON_ID).and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
                button.click();
            }
        });
    }

    log::info!("Form broker ready");
    broker
}

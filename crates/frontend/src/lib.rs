pub mod app;
pub mod shared;
pub mod usecases;

use shared::config::BrokerSettings;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Attach the broker to the modal already present in the page.
///
/// `settings` is an optional plain object (see [`BrokerSettings`]);
/// `on_validated` is called with the submit event once validation passes.
#[wasm_bindgen(js_name = initFormBroker)]
pub fn init_form_broker(
    settings: JsValue,
    on_validated: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let settings = BrokerSettings::from_js(settings).map_err(|e| JsValue::from_str(&e))?;
    log::info!("Form broker initialized, webhook transport: {:?}", settings.transport);
    usecases::u001_lead_capture::broker::install(settings, on_validated);
    Ok(())
}

/// Render the demo page and attach the broker to it
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo(settings: JsValue, on_validated: Option<js_sys::Function>) -> Result<(), JsValue> {
    leptos::mount::mount_to_body(app::App);
    init_form_broker(settings, on_validated)
}

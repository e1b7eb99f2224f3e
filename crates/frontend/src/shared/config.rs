//! Broker settings supplied by the host page
//!
//! Every field has a default, so `initFormBroker()` with no argument
//! reproduces the stock TradingForexUSA behaviour.

use lead_contracts::domain::a002_lead_submission::aggregate::DEFAULT_SOURCE_NAME;
use lead_contracts::shared::webhook_log::DEFAULT_LOG_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://hook.integrator.boost.space/7gopeqecppwrkmfebrizdevpq3op39da";
pub const DEFAULT_RELOAD_DELAY_MS: u32 = 500;

/// How the webhook request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// `no-cors`: the response is opaque, so any accepted request counts as delivered
    #[default]
    Opaque,
    /// `cors`: the status is read and non-2xx is reported as a failure
    Observable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrokerSettings {
    pub webhook_url: String,
    pub source_name: String,
    pub transport: TransportMode,
    pub reload_delay_ms: u32,
    pub log_storage_key: String,
    pub busy_label: String,
    pub done_label: String,
}

impl Default for BrokerSettings {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            transport: TransportMode::Opaque,
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
            log_storage_key: DEFAULT_LOG_STORAGE_KEY.to_string(),
            busy_label: "Submitting...".to_string(),
            done_label: "Submitted".to_string(),
        }
    }
}

impl BrokerSettings {
    /// Decode a plain JS object; `undefined`/`null` mean "all defaults"
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("Invalid broker settings: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid broker settings: {}", e))
    }
}

use gloo_net::http::Request;
use lead_contracts::shared::errors::SubmitError;
use web_sys::RequestMode;

use crate::shared::config::TransportMode;
use crate::shared::ports::WebhookTransport;

fn request_mode(mode: TransportMode) -> RequestMode {
    match mode {
        TransportMode::Opaque => RequestMode::NoCors,
        TransportMode::Observable => RequestMode::Cors,
    }
}

/// Webhook client over the Fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchWebhookTransport;

impl WebhookTransport for FetchWebhookTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        mode: TransportMode,
    ) -> Result<(), SubmitError> {
        let request = Request::post(url)
            .mode(request_mode(mode))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Network(format!("Failed to create request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        match mode {
            TransportMode::Opaque => {
                // status is always 0 for an opaque response
                log::debug!("Webhook accepted the request; response unavailable in no-cors mode");
                Ok(())
            }
            TransportMode::Observable if response.ok() => Ok(()),
            TransportMode::Observable => Err(SubmitError::Status(response.status())),
        }
    }
}

use lead_contracts::domain::a001_form_config::aggregate::FormConfig;
use lead_contracts::domain::a002_lead_submission::aggregate::SubmissionPayload;
use lead_contracts::shared::errors::SubmitError;
use lead_contracts::shared::webhook_log::WebhookLogEntry;

use super::validator::capture_fields;
use crate::shared::config::BrokerSettings;
use crate::shared::ports::{BrowserHost, FormSurface, HiddenField, ModalText, WebhookTransport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No submit button in the page; nothing was attempted
    Skipped,
    /// Guard check failed, no request was made
    Rejected(SubmitError),
    Delivered(SubmissionPayload),
    Failed(SubmitError),
}

/// Send the lead to the webhook.
///
/// The submit button stays disabled while this runs and always ends up
/// enabled and labelled with `settings.done_label`.
pub async fn submit_lead<S, H, T>(
    surface: &S,
    host: &H,
    transport: &T,
    settings: &BrokerSettings,
    config: &FormConfig,
) -> SubmitOutcome
where
    S: FormSurface,
    H: BrowserHost,
    T: WebhookTransport,
{
    if !surface.has_submit_button() {
        log::error!("Submit button #submitBtn not found");
        return SubmitOutcome::Skipped;
    }

    surface.set_submit_enabled(false);
    surface.set_modal_text(ModalText::SubmitLabel, &settings.busy_label);

    let outcome = send_lead(surface, host, transport, settings, config).await;

    surface.set_submit_enabled(true);
    surface.set_modal_text(ModalText::SubmitLabel, &settings.done_label);
    log::debug!("Webhook submission complete");
    outcome
}

async fn send_lead<S, H, T>(
    surface: &S,
    host: &H,
    transport: &T,
    settings: &BrokerSettings,
    config: &FormConfig,
) -> SubmitOutcome
where
    S: FormSurface,
    H: BrowserHost,
    T: WebhookTransport,
{
    let fields = capture_fields(surface);
    let lead_source =
        config.effective_lead_source(surface.hidden_value(HiddenField::LeadSource).as_deref());

    let payload = SubmissionPayload::new(&fields, &lead_source, &settings.source_name);
    let sent = match fields.ensure_submittable() {
        Ok(()) => {
            log::debug!(
                "Sending {} lead from {:?} to {}",
                config.form_type,
                lead_source,
                settings.webhook_url
            );
            deliver(transport, settings, &payload).await
        }
        Err(err) => Err(err),
    };

    match sent {
        Ok(()) => {
            log::info!("Webhook request sent");
            let entry = WebhookLogEntry::success(host.now(), config.form_type, &payload);
            record(host, settings, &entry);
            SubmitOutcome::Delivered(payload)
        }
        // guard failures never reach storage
        Err(err) if err.is_precondition() => {
            log::error!("Lead not sent: {}", err);
            host.alert(&err.alert_text());
            SubmitOutcome::Rejected(err)
        }
        Err(err) => {
            log::error!("Webhook submission error: {}", err);
            let entry = WebhookLogEntry::failure(host.now(), config.form_type, &lead_source, &err);
            record(host, settings, &entry);
            host.alert(&err.alert_text());
            SubmitOutcome::Failed(err)
        }
    }
}

async fn deliver<T: WebhookTransport>(
    transport: &T,
    settings: &BrokerSettings,
    payload: &SubmissionPayload,
) -> Result<(), SubmitError> {
    let body = payload.to_json()?;
    transport
        .post_json(&settings.webhook_url, &body, settings.transport)
        .await
}

fn record<H: BrowserHost>(host: &H, settings: &BrokerSettings, entry: &WebhookLogEntry) {
    match entry.to_json() {
        Ok(json) => host.store_item(&settings.log_storage_key, &json),
        Err(e) => log::warn!("Could not serialize webhook log entry: {}", e),
    }
}

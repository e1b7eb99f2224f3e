//! Submit-button flow: validating → submitting → reload.
//!
//! Split in two so the DOM wiring can run the synchronous half inside the
//! click handler (popup blockers only allow `window.open` there) and the
//! network half in a spawned task.

use lead_contracts::domain::a001_form_config::aggregate::FormConfig;

use super::submitter::{submit_lead, SubmitOutcome};
use super::validator::validate_form;
use crate::shared::config::BrokerSettings;
use crate::shared::ports::{BrowserHost, FormSurface, HiddenField, WebhookTransport};

/// Hook supplied by the host page, run after validation passes
pub type ValidatedHook<'a> = &'a dyn Fn() -> Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; inline errors are shown and nothing else happened
    Invalid,
    Submitted(SubmitOutcome),
}

/// Validate, open the thank-you page and run the host hook.
///
/// Returns `false` when validation fails; the caller must stop there.
pub fn begin_submission<S, H>(
    surface: &S,
    host: &H,
    config: &FormConfig,
    on_validated: Option<ValidatedHook<'_>>,
) -> bool
where
    S: FormSurface,
    H: BrowserHost,
{
    log::debug!("Submit clicked, form type: {}", config.form_type);

    if !validate_form(surface, config) {
        log::info!("Validation failed, submission cancelled");
        return false;
    }

    let thankyou_page =
        config.effective_thankyou_page(surface.hidden_value(HiddenField::ThankyouPage).as_deref());
    log::debug!("Opening thank-you page {}", thankyou_page);
    host.open_in_new_tab(&thankyou_page);

    if let Some(hook) = on_validated {
        match hook() {
            Ok(()) => log::debug!("Host form hook called"),
            Err(e) => log::warn!("Host form hook failed (ignored): {}", e),
        }
    }
    true
}

/// Send the lead, then reload the page whatever happened
pub async fn finish_submission<S, H, T>(
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
    let outcome = submit_lead(surface, host, transport, settings, config).await;
    log::debug!(
        "Submission finished ({:?}), reloading in {}ms",
        outcome,
        settings.reload_delay_ms
    );
    host.schedule_reload(settings.reload_delay_ms);
    outcome
}

pub async fn handle_submit_click<S, H, T>(
    surface: &S,
    host: &H,
    transport: &T,
    settings: &BrokerSettings,
    config: &FormConfig,
    on_validated: Option<ValidatedHook<'_>>,
) -> SubmitAttempt
where
    S: FormSurface,
    H: BrowserHost,
    T: WebhookTransport,
{
    if !begin_submission(surface, host, config, on_validated) {
        return SubmitAttempt::Invalid;
    }
    SubmitAttempt::Submitted(finish_submission(surface, host, transport, settings, config).await)
}

use lead_contracts::domain::a001_form_config::aggregate::FormConfig;
use lead_contracts::domain::a002_lead_submission::aggregate::LeadFields;
use lead_contracts::shared::validation::{validate_lead, ErrorSlot};

use super::configurator::clear_errors;
use crate::shared::ports::FormSurface;

/// Current form contents, trimmed
pub fn capture_fields<S: FormSurface>(surface: &S) -> LeadFields {
    LeadFields::capture(|field| surface.field_value(field), surface.consent_checked())
}

/// Check the form and write inline errors. Never raises an alert.
pub fn validate_form<S: FormSurface>(surface: &S, config: &FormConfig) -> bool {
    log::debug!("Validating form type: {}", config.form_type);
    clear_errors(surface);

    let fields = capture_fields(surface);
    let report = validate_lead(&fields);
    for slot in ErrorSlot::all() {
        if report.has_failed(slot) {
            surface.set_error_text(slot, slot.message());
        }
    }

    if report.is_valid() {
        log::debug!("Validation passed");
    } else {
        log::debug!("Validation failed: {:?}", report.failed);
    }
    report.is_valid()
}

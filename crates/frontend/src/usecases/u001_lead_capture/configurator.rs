use lead_contracts::domain::a001_form_config::aggregate::{FormConfig, TriggerAttributes};
use lead_contracts::domain::a002_lead_submission::aggregate::LeadField;
use lead_contracts::shared::validation::ErrorSlot;

use crate::shared::ports::{FormSurface, HiddenField, ModalText};

/// Point the shared modal at the form the trigger asks for.
///
/// Returns the new config; the caller owns it and hands it to the submit path.
pub fn configure_modal<S: FormSurface>(surface: &S, attributes: &TriggerAttributes) -> FormConfig {
    let content = attributes.resolve();
    let config = FormConfig::from_modal(&content);
    log::debug!("Form config: {:?}", config);

    surface.set_modal_text(ModalText::Title, &content.title);
    surface.set_modal_text(ModalText::Content, &content.content);
    surface.set_modal_text(ModalText::SubmitLabel, &content.button_label);
    surface.set_hidden_value(HiddenField::ThankyouPage, &content.thankyou_page);
    surface.set_hidden_value(HiddenField::LeadSource, &content.lead_source);
    surface.set_message_box_visible(config.form_type.shows_message_box());

    reset_form(surface);
    config
}

/// Empty every field, untick consent, blank every error slot
pub fn reset_form<S: FormSurface>(surface: &S) {
    for field in LeadField::all() {
        surface.set_field_value(field, "");
    }
    surface.set_consent_checked(false);
    clear_errors(surface);
    log::debug!("Form cleared");
}

pub fn clear_errors<S: FormSurface>(surface: &S) {
    for slot in ErrorSlot::all() {
        surface.set_error_text(slot, "");
    }
}

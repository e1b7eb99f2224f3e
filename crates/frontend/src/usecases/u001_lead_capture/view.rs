//! Markup that satisfies the broker's DOM contract.
//!
//! Pages that already ship their own modal do not need these; the broker only
//! looks elements up by id and class.

use lead_contracts::domain::a001_form_config::aggregate::{
    DEFAULT_BUTTON_LABEL, DEFAULT_CONTENT, DEFAULT_LEAD_SOURCE, DEFAULT_THANKYOU_PAGE, DEFAULT_TITLE,
};
use lead_contracts::domain::a002_lead_submission::aggregate::LeadField;
use lead_contracts::shared::validation::ErrorSlot;
use leptos::prelude::*;

use crate::shared::ports::{HiddenField, ModalText, FORM_ID, MESSAGE_BOX_ID, SUBMIT_BUTTON_ID};

pub const MODAL_ID: &str = "exampleModal2";

fn class_of(selector: &'static str) -> &'static str {
    selector.trim_start_matches('.')
}

#[component]
fn FieldRow(
    field: LeadField,
    slot: ErrorSlot,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input type=input_type class={format!("form-control {}", class_of(field.selector()))} name={field.key()} />
            <small class={format!("text-danger {}", class_of(slot.selector()))}></small>
        </div>
    }
}

/// The single sign-up modal shared by every trigger
#[component]
pub fn LeadModal() -> impl IntoView {
    view! {
        <div class="modal fade" id=MODAL_ID tabindex="-1">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id={ModalText::Title.element_id()}>{DEFAULT_TITLE}</h5>
                    </div>
                    <div class="modal-body">
                        <p id={ModalText::Content.element_id()}>{DEFAULT_CONTENT}</p>
                        <form id=FORM_ID>
                            <input type="hidden" id={HiddenField::ThankyouPage.element_id()} value=DEFAULT_THANKYOU_PAGE />
                            <input type="hidden" id={HiddenField::LeadSource.element_id()} value=DEFAULT_LEAD_SOURCE />

                            <FieldRow field=LeadField::Firstname slot=ErrorSlot::Firstname label="First name" input_type="text" />
                            <FieldRow field=LeadField::Lastname slot=ErrorSlot::Lastname label="Last name" input_type="text" />
                            <FieldRow field=LeadField::Email slot=ErrorSlot::Email label="Email" input_type="email" />
                            <FieldRow field=LeadField::Phone slot=ErrorSlot::Phone label="Phone" input_type="tel" />

                            <div class="form-group" id=MESSAGE_BOX_ID style="display: none;">
                                <label>"Message"</label>
                                <textarea class={format!("form-control {}", class_of(LeadField::Message.selector()))} name="message" rows="4"></textarea>
                                <small class={format!("text-danger {}", class_of(ErrorSlot::Message.selector()))}></small>
                            </div>

                            <div class="form-check">
                                <input type="checkbox" class="form-check-input" name="consent" id="consent" />
                                <label class="form-check-label" for="consent">
                                    "I agree to be contacted about my enquiry."
                                </label>
                                <small class={format!("text-danger {}", class_of(ErrorSlot::Consent.selector()))}></small>
                            </div>

                            <button type="submit" class="btn btn-primary" id=SUBMIT_BUTTON_ID>
                                {DEFAULT_BUTTON_LABEL}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Button that opens [`LeadModal`] configured for one campaign
#[component]
pub fn TriggerButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] content: Option<String>,
    #[prop(optional, into)] btn_label: Option<String>,
    #[prop(optional, into)] thankyou: Option<String>,
    #[prop(optional, into)] lead_source: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-outline-primary"
            data-bs-toggle="modal"
            data-bs-target={format!("#{}", MODAL_ID)}
            data-title=title
            data-content=content
            data-btnlabel=btn_label
            data-thankyou=thankyou
            data-leadsource=lead_source
        >
            {label}
        </button>
    }
}

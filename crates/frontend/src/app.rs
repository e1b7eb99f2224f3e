use leptos::prelude::*;

use crate::usecases::u001_lead_capture::view::{LeadModal, TriggerButton};

/// Stand-alone page with one trigger per form variant
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container lead-demo">
            <h1>"Open a forex trading account"</h1>
            <div class="lead-demo__triggers">
                <TriggerButton label="Sign up with TastyFX" lead_source="TastyFX Homepage" />
                <TriggerButton
                    label="Sign up with OANDA"
                    title="Sign-Up for an OANDA Account"
                    thankyou="thankyou_oanda.html"
                    lead_source="Oanda Campaign A"
                />
                <TriggerButton
                    label="Contact us"
                    title="Contact Us"
                    content="Leave your details and a message, we will get back to you."
                    btn_label="SEND MESSAGE"
                    thankyou="thankyou_contact.html"
                    lead_source="Contact Us"
                />
            </div>
            <LeadModal />
        </main>
    }
}

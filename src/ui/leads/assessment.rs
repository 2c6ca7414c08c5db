use leptos::prelude::*;

use super::LeadFormController;
use crate::core::leads::{AssessmentForm, FormKind, personas};
use crate::ui::common::{ErrorMessage, FormField, SelectField, SubmitButton, SuccessPanel};

const NEXT_STEPS: &[&str] = &[
    "I'll personally audit your website's design and user experience",
    "You'll receive a detailed assessment with specific improvement recommendations",
    "Priority consideration for AegntSite's private beta program",
];

#[component]
pub fn AssessmentRequestForm() -> impl IntoView {
    let controller = LeadFormController::<AssessmentForm>::new();
    let kind = FormKind::Assessment;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    move || {
        if controller.is_submitted().get() {
            view! {
                <SuccessPanel title=kind.success_title() message=kind.success_message()>
                    <div class="next-steps">
                        <p class="next-steps-title">"What happens next?"</p>
                        <ul>
                            {NEXT_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                        </ul>
                    </div>
                </SuccessPanel>
            }
            .into_any()
        } else {
            view! {
                <form class="lead-form" on:submit=on_submit novalidate=true>
                    <ErrorMessage error=controller.submit_error() />

                    // Bare domains are accepted, so no type="url"
                    <FormField
                        id="assessment-website"
                        label="Website URL"
                        placeholder="https://yourwebsite.com"
                        autocomplete="url"
                        value=controller.value("website")
                        on_input=controller.on_input("website")
                        disabled=controller.is_locked()
                        error=controller.error("website")
                    />

                    <FormField
                        id="assessment-email"
                        label="Your email"
                        input_type="email"
                        placeholder="you@company.com"
                        autocomplete="email"
                        value=controller.value("email")
                        on_input=controller.on_input("email")
                        disabled=controller.is_locked()
                        error=controller.error("email")
                    />

                    <SelectField
                        id="assessment-persona"
                        label="What describes you best?"
                        placeholder="Select your role"
                        options=personas::ASSESSMENT
                        value=controller.value("persona")
                        on_change=controller.on_input("persona")
                        disabled=controller.is_locked()
                        error=controller.error("persona")
                    />

                    <SubmitButton
                        busy=controller.is_busy()
                        text="Request personalized assessment"
                        busy_text="Submitting request..."
                    />

                    <p class="form-footnote">
                        "Free assessment · 24-48 hour turnaround · No spam, ever"
                    </p>
                </form>
            }
            .into_any()
        }
    }
}

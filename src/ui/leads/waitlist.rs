use leptos::prelude::*;

use super::LeadFormController;
use crate::core::leads::{FormKind, WaitlistForm, personas};
use crate::ui::common::{ErrorMessage, FormField, SelectField, SubmitButton, SuccessPanel};

const NEXT_STEPS: &str = "You'll receive priority access to AegntSite's private beta, plus exclusive case studies and optimization insights.";

/// Waitlist signup form
///
/// Rendered both in the CTA section and inside the hero modal. The caller owns
/// the controller so a modal can reset it when it closes.
#[component]
pub fn WaitlistSignupForm(
    controller: LeadFormController<WaitlistForm>,
    /// Prefix for element ids, keeps two instances on one page distinct
    #[prop(default = "waitlist")]
    id_prefix: &'static str,
    /// Adds a "Got it" button to the success view, used by the modal
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let kind = FormKind::Waitlist;

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
                        <p>{NEXT_STEPS}</p>
                    </div>
                    {on_done.map(|done| view! {
                        <button
                            type="button"
                            class="btn-base btn-primary w-full"
                            on:click=move |_| done.run(())
                        >
                            "Got it"
                        </button>
                    })}
                </SuccessPanel>
            }
            .into_any()
        } else {
            view! {
                <form class="lead-form" on:submit=on_submit novalidate=true>
                    <ErrorMessage error=controller.submit_error() />

                    <FormField
                        id=format!("{}-email", id_prefix)
                        label="Work email"
                        input_type="email"
                        placeholder="you@company.com"
                        autocomplete="email"
                        value=controller.value("email")
                        on_input=controller.on_input("email")
                        disabled=controller.is_locked()
                        error=controller.error("email")
                    />

                    <SelectField
                        id=format!("{}-persona", id_prefix)
                        label="What describes you best?"
                        placeholder="Select your role"
                        options=personas::WAITLIST
                        value=controller.value("persona")
                        on_change=controller.on_input("persona")
                        disabled=controller.is_locked()
                        error=controller.error("persona")
                    />

                    <FormField
                        id=format!("{}-website", id_prefix)
                        label="Website URL"
                        hint="(optional)"
                        input_type="url"
                        placeholder="https://yoursite.com"
                        autocomplete="url"
                        value=controller.value("website")
                        on_input=controller.on_input("website")
                        disabled=controller.is_locked()
                        error=controller.error("website")
                    />

                    <SubmitButton
                        busy=controller.is_busy()
                        text="Get priority beta access"
                        busy_text="Securing your access..."
                    />

                    <p class="form-footnote">
                        "No spam. Unsubscribe anytime. We protect your data with enterprise-grade security."
                    </p>
                </form>
            }
            .into_any()
        }
    }
}

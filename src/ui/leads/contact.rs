use leptos::prelude::*;

use super::LeadFormController;
use crate::core::leads::{ContactForm, FormKind};
use crate::ui::common::{
    BaseModal, ErrorMessage, FormField, SubmitButton, SuccessPanel, TextAreaField,
};

/// Contact form in a modal. Closing the modal discards whatever was typed.
#[component]
pub fn ContactModal(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let controller = LeadFormController::<ContactForm>::new();
    let kind = FormKind::Contact;

    let close = Callback::new(move |_| {
        controller.reset();
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    view! {
        <BaseModal title="Contact us" is_open=is_open on_close=close>
            {move || {
                if controller.is_submitted().get() {
                    view! {
                        <SuccessPanel title=kind.success_title() message=kind.success_message()>
                            <button
                                type="button"
                                class="btn-base btn-primary w-full"
                                on:click=move |_| close.run(())
                            >
                                "Got it"
                            </button>
                        </SuccessPanel>
                    }
                    .into_any()
                } else {
                    view! {
                        <form class="lead-form" on:submit=on_submit novalidate=true>
                            <ErrorMessage error=controller.submit_error() />

                            <FormField
                                id="contact-email"
                                label="Your email"
                                input_type="email"
                                placeholder="you@company.com"
                                autocomplete="email"
                                value=controller.value("email")
                                on_input=controller.on_input("email")
                                disabled=controller.is_locked()
                                error=controller.error("email")
                            />

                            <FormField
                                id="contact-subject"
                                label="Subject"
                                placeholder="How can we help?"
                                value=controller.value("subject")
                                on_input=controller.on_input("subject")
                                disabled=controller.is_locked()
                                error=controller.error("subject")
                            />

                            <TextAreaField
                                id="contact-message"
                                label="Message"
                                placeholder="Tell us more about your needs..."
                                rows=5
                                value=controller.value("message")
                                on_input=controller.on_input("message")
                                disabled=controller.is_locked()
                                error=controller.error("message")
                            />

                            <SubmitButton
                                busy=controller.is_busy()
                                text="Send message"
                                busy_text="Sending message..."
                            />
                        </form>
                    }
                    .into_any()
                }
            }}
        </BaseModal>
    }
}

use leptos::prelude::*;

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("spinner spinner-sm spinner-inline {}", class) role="status" aria-live="polite">
            <span class="spinner-circle-inner"></span>
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Submit button that shows a spinner and is disabled while busy
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    busy: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text while busy
    #[prop(default = "Submitting...")]
    busy_text: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-base btn-primary w-full".to_string()
    } else {
        format!("btn-base btn-primary w-full {}", class)
    };

    view! {
        <button
            type="submit"
            class=full_classes
            disabled=move || busy.get()
            aria-busy=move || busy.get().to_string()
        >
            <Show
                when=move || busy.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <InlineSpinner />
                    <span>{busy_text}</span>
                </span>
            </Show>
        </button>
    }
}

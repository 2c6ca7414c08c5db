use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Field error line shown under an input
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <p class="field-error" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </p>
        })
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Element id, also used by the label
    #[prop(into)]
    id: String,
    /// Field label text
    label: &'static str,
    /// Optional hint rendered after the label, e.g. "(optional)"
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Input type (text, email, url, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="label">
                {label}
                {hint.map(|h| view! { <span class="label-hint">{h}</span> })}
            </label>
            <input
                id=id.clone()
                name=id
                type=input_type
                class="input-base"
                class:input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Element id, also used by the label
    #[prop(into)]
    id: String,
    /// Field label text
    label: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="label">{label}</label>
            <textarea
                id=id.clone()
                name=id
                class="input-base resize-none"
                class:input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Element id, also used by the label
    #[prop(into)]
    id: String,
    /// Field label text
    label: &'static str,
    /// Text of the empty first option
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: &'static [(&'static str, &'static str)],
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="label">{label}</label>
            <select
                id=id.clone()
                name=id
                class="select-base"
                class:input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.iter().map(|(val, text)| {
                    view! {
                        <option value=*val>{*text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}

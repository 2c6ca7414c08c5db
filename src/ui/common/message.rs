//! Reusable message components for submit errors and success states.

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Terminal success view shown in place of a submitted form
#[component]
pub fn SuccessPanel(
    /// Headline
    title: &'static str,
    /// Short confirmation text
    message: &'static str,
    /// Optional "what happens next" content
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="success-panel" role="status">
            <div class="success-panel-icon">
                <Icon name=icons::CHECK class="w-8 h-8"/>
            </div>
            <h3 class="success-panel-title">{title}</h3>
            <p class="success-panel-message">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

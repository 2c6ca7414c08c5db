use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-root"
                } else {
                    "modal-root modal-hidden"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
        >
            // Backdrop
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>

            <div class=format!("modal-card w-full {}", max_width)>
                // Header
                <div class="modal-header">
                    <div>
                        <h3 class="title-lg">{title}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

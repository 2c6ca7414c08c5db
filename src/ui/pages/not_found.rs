//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - AegntSite" />

        <div class="not-found">
            <div class="not-found-icon">
                <Icon name=icons::SEARCH class="w-12 h-12" />
            </div>

            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Page Not Found"</h2>
            <p class="not-found-text">
                "The page you're looking for doesn't exist or has been moved."
            </p>

            <div class="not-found-actions">
                <A href="/" attr:class="btn-base btn-primary">
                    "Go Home"
                </A>
                <A href="/#assessment" attr:class="btn-base btn-secondary">
                    "Get a free assessment"
                </A>
            </div>

            <p class="not-found-footer">"© 2025 AegntSite"</p>
        </div>
    }
}

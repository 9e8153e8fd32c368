//! FileDiff Frontend App
//!
//! Header with page tabs above the active comparison page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppHeader, ImageCompare, TextCompare};
use crate::context::AppContext;
use crate::models::Page;
use crate::store::CompareState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::default());

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(Store::new(CompareState::with_samples()));

    view! {
        <div class="app-layout">
            <AppHeader />
            <main class="main-content">
                {move || match page.get() {
                    Page::Text => view! { <TextCompare /> }.into_any(),
                    Page::Image => view! { <ImageCompare /> }.into_any(),
                }}
            </main>
            <footer class="app-footer">"Files are compared locally and never leave your browser."</footer>
        </div>
    }
}

//! App Header Component
//!
//! Title and page tabs.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Page;

/// Header with one tab per page
#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <span class="app-title">"FileDiff"</span>
            <nav class="page-tabs">
                {Page::ALL.into_iter().map(|page| {
                    let tab_class = move || {
                        if ctx.page.get() == page { "page-tab active" } else { "page-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.show(page)>
                            {page.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}

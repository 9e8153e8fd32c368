//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Page;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn show(&self, page: Page) {
        if self.page.get_untracked() != page {
            log::debug!("[APP] switching to {:?}", page);
            self.set_page.set(page);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

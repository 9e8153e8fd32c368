//! Comparison State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Both pages keep
//! their content here so switching tabs does not lose it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{SAMPLE_MODIFIED, SAMPLE_ORIGINAL};
use crate::files;
use crate::models::{DiffSide, ImageInfo};

/// Content of both comparison pages
#[derive(Clone, Debug, Default, Store)]
pub struct CompareState {
    pub original_text: String,
    pub modified_text: String,
    pub original_image: Option<ImageInfo>,
    pub modified_image: Option<ImageInfo>,
}

impl CompareState {
    pub fn with_samples() -> Self {
        Self {
            original_text: SAMPLE_ORIGINAL.to_string(),
            modified_text: SAMPLE_MODIFIED.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CompareStore = Store<CompareState>;

/// Get the compare store from context
pub fn use_compare_store() -> CompareStore {
    expect_context::<CompareStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_text(store: &CompareStore, side: DiffSide) -> String {
    match side {
        DiffSide::Original => store.original_text().get(),
        DiffSide::Modified => store.modified_text().get(),
    }
}

pub fn store_set_text(store: &CompareStore, side: DiffSide, text: String) {
    match side {
        DiffSide::Original => store.original_text().set(text),
        DiffSide::Modified => store.modified_text().set(text),
    }
}

pub fn store_load_samples(store: &CompareStore) {
    store.original_text().set(SAMPLE_ORIGINAL.to_string());
    store.modified_text().set(SAMPLE_MODIFIED.to_string());
}

pub fn store_clear_text(store: &CompareStore) {
    store.original_text().set(String::new());
    store.modified_text().set(String::new());
}

pub fn store_image(store: &CompareStore, side: DiffSide) -> Option<ImageInfo> {
    match side {
        DiffSide::Original => store.original_image().get(),
        DiffSide::Modified => store.modified_image().get(),
    }
}

/// Replace the image of `side`, revoking the previous object URL
pub fn store_set_image(store: &CompareStore, side: DiffSide, image: Option<ImageInfo>) {
    let previous = match side {
        DiffSide::Original => store.original_image().get_untracked(),
        DiffSide::Modified => store.modified_image().get_untracked(),
    };
    match side {
        DiffSide::Original => store.original_image().set(image),
        DiffSide::Modified => store.modified_image().set(image),
    }
    if let Some(previous) = previous {
        files::revoke_object_url(&previous.url);
    }
}

/// Record the natural size of `side`'s image. No-op when unchanged, so a
/// re-rendered preview firing `load` again does not loop.
pub fn store_set_dimensions(store: &CompareStore, side: DiffSide, width: u32, height: u32) {
    let field = match side {
        DiffSide::Original => store.original_image(),
        DiffSide::Modified => store.modified_image(),
    };
    let known = field.with_untracked(|image| image.as_ref().map(|image| image.dimensions));
    match known {
        Some(Some(dims)) if dims == (width, height) => {}
        Some(_) => field.update(|image| {
            if let Some(image) = image {
                image.dimensions = Some((width, height));
            }
        }),
        None => {}
    }
}

pub fn store_clear_images(store: &CompareStore) {
    for side in DiffSide::ALL {
        store_set_image(store, side, None);
    }
}

//! Drop Zone Components
//!
//! `DropZone` provides a drop zone context; the other pieces read it and can
//! be nested anywhere inside.
//!
//! ```ignore
//! <DropZone on_files_select=handler validation=rules>
//!     <DropZoneContent>
//!         <DropZoneInput accept="image/*"><DropZoneMessage /></DropZoneInput>
//!     </DropZoneContent>
//!     <DropZoneOverlay>
//!         <DropZoneDragIndicator>"Drop here"</DropZoneDragIndicator>
//!     </DropZoneOverlay>
//! </DropZone>
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::callback::UnsyncCallback;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_filedrop::{file_list_to_vec, provide_drop_zone, use_drop_zone, DropZoneConfig, FileValidation, ValidationResult};
use web_sys::{File, HtmlElement, HtmlInputElement};

use crate::components::DragIndicator;
use crate::models::OverlayPosition;

/// Root of a drop zone. Registers its element with the zone's coordinator
/// once mounted.
#[component]
pub fn DropZone(
    children: Children,
    /// Selected or dropped files, with their validation result
    #[prop(into)]
    on_files_select: UnsyncCallback<(Vec<File>, ValidationResult)>,
    #[prop(optional)] validation: Option<FileValidation>,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = DropZoneConfig {
        validation,
        disabled,
        ..Default::default()
    };
    let ctx = provide_drop_zone(config, move |files, result| {
        on_files_select.run((files, result));
    });

    let root = NodeRef::<Div>::new();
    Effect::new(move |_| {
        if let Some(div) = root.get() {
            let element: HtmlElement = div.into();
            ctx.register_root(&element);
        }
    });

    view! {
        <div node_ref=root class=format!("drop-zone {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn DropZoneContent(children: Children, #[prop(into, optional)] class: String) -> impl IntoView {
    view! { <div class=format!("drop-zone-content {}", class)>{children()}</div> }
}

/// Overlay visible while anything is dragged; content only while the drag
/// is over this zone
#[component]
pub fn DropZoneOverlay(
    #[prop(optional)] position: OverlayPosition,
    #[prop(into, optional)] class: String,
    #[prop(into, default = "drop-overlay-active".to_string())] active_class: String,
    #[prop(into, default = "drop-overlay-inactive".to_string())] inactive_class: String,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let ctx = use_drop_zone();

    move || {
        let state = ctx.drag_state();
        if !state.is_dragging {
            return None;
        }
        let state_class = if state.is_active { &active_class } else { &inactive_class };
        let overlay_class = format!("drag-overlay {} {} {}", position.class(), state_class, class);
        let content = state
            .is_active
            .then(|| children.as_ref().map(|c| view! { <div class="drag-overlay-content">{c()}</div> }))
            .flatten();
        Some(view! { <div class=overlay_class>{content}</div> })
    }
}

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_input_id() -> String {
    format!("file-input-{}", NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Clickable label opening a hidden file input
#[component]
pub fn DropZoneInput(
    children: Children,
    #[prop(into, optional)] accept: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let ctx = use_drop_zone();
    let input_id = next_input_id();

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            let files = file_list_to_vec(&list);
            if !files.is_empty() {
                ctx.select_files(files);
            }
        }
        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <label for=input_id.clone() class=format!("drop-zone-input {}", class)>
            {children()}
        </label>
        <input
            id=input_id
            type="file"
            class="sr-only"
            accept=accept
            multiple=multiple
            disabled=ctx.is_disabled()
            on:change=on_change
        />
    }
}

#[component]
pub fn DropZoneMessage(
    #[prop(into, default = "Drop files here".to_string())] title: String,
    #[prop(into, default = "or click to choose a file".to_string())] description: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("drop-zone-message {}", class)>
            <svg class="drop-zone-icon" stroke="currentColor" fill="none" viewBox="0 0 48 48">
                <path
                    d="M28 8H12a4 4 0 00-4 4v20m32-12v8m0 0v8a4 4 0 01-4 4H12a4 4 0 01-4-4v-4m32-4l-3.172-3.172a4 4 0 00-5.656 0L28 28M8 32l9.172-9.172a4 4 0 015.656 0L28 28m0 0l4 4m4-24h8m-4-4v8m-12 4h.02"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
            <p class="drop-zone-title">{title}</p>
            <p class="drop-zone-description">{description}</p>
        </div>
    }
}

#[component]
pub fn DropZoneDragIndicator(
    children: Children,
    #[prop(into, default = "drag-indicator".to_string())] class: String,
) -> impl IntoView {
    view! { <DragIndicator class=class>{children()}</DragIndicator> }
}

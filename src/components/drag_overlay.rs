//! Drag Overlay Components
//!
//! Standalone overlay for containers wired to a coordinator by hand.

use leptos::prelude::*;

use crate::models::OverlayPosition;

/// Dashed overlay shown while `is_dragging` is true
#[component]
pub fn DragOverlay(
    is_dragging: Signal<bool>,
    #[prop(optional)] position: OverlayPosition,
    #[prop(into, default = "drag-overlay-highlight".to_string())] class: String,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let overlay_class = format!("drag-overlay {} {}", position.class(), class);

    move || {
        is_dragging.get().then(|| {
            let content = children
                .as_ref()
                .map(|c| view! { <div class="drag-overlay-content">{c()}</div> });
            view! { <div class=overlay_class.clone()>{content}</div> }
        })
    }
}

/// Pill shown in the middle of an active overlay
#[component]
pub fn DragIndicator(
    children: Children,
    #[prop(into, default = "drag-indicator".to_string())] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            <div class="drag-indicator-body">
                <svg class="drag-indicator-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M9 19l3 3m0 0l3-3m-3 3V10"
                    />
                </svg>
                {children()}
            </div>
        </div>
    }
}

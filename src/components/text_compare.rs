//! Text Compare Page
//!
//! Two editable panes, each one a drop zone of a shared coordinator. A file
//! dropped on a pane replaces that side's text.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{use_drag_and_drop, DragAndDrop};
use web_sys::{File, HtmlElement};

use crate::components::{DragIndicator, DragOverlay};
use crate::files::{self, format_if_json, line_count, reformat_pasted};
use crate::models::{DiffSide, OverlayPosition};
use crate::store::{store_clear_text, store_load_samples, store_set_text, store_text, use_compare_store};

#[component]
pub fn TextCompare() -> impl IntoView {
    let store = use_compare_store();
    let (read_error, set_read_error) = signal(None::<String>);

    let dnd = use_drag_and_drop(move |dropped: Vec<File>, side: DiffSide| {
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        spawn_local(async move {
            match files::read_text(&file).await {
                Ok(raw) => {
                    log::debug!("[TextCompare] loaded {} into {:?}", file.name(), side);
                    store_set_text(&store, side, format_if_json(&raw));
                    set_read_error.set(None);
                }
                Err(err) => {
                    log::error!("[TextCompare] {}", err);
                    set_read_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="compare-page text-compare">
            <div class="toolbar">
                <div class="toolbar-info">
                    {DiffSide::ALL.into_iter().map(|side| view! {
                        <span>
                            {move || format!("{}: {} lines", side.label(), line_count(&store_text(&store, side)))}
                        </span>
                    }).collect_view()}
                </div>
                <div class="toolbar-actions">
                    <button class="btn btn-primary" on:click=move |_| store_load_samples(&store)>
                        "Load Sample"
                    </button>
                    <button class="btn" on:click=move |_| store_clear_text(&store)>
                        "Clear"
                    </button>
                </div>
            </div>

            {move || read_error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <div class="text-panes">
                {DiffSide::ALL.into_iter().map(|side| view! { <TextPane side=side dnd=dnd /> }).collect_view()}
            </div>
        </div>
    }
}

/// One side of the text comparison; registers itself as `side`'s zone
#[component]
fn TextPane(side: DiffSide, dnd: DragAndDrop<DiffSide>) -> impl IntoView {
    let store = use_compare_store();
    let root = NodeRef::<Div>::new();
    // set by `paste`, consumed by the `input` that follows it
    let pasted = StoredValue::new(false);

    Effect::new(move |_| {
        if let Some(div) = root.get() {
            let element: HtmlElement = div.into();
            dnd.register_zone(side, &element);
        }
    });
    on_cleanup(move || dnd.unregister_zone(&side));

    let is_target = Signal::derive(move || dnd.is_active(&side));

    view! {
        <div node_ref=root class="text-pane">
            <div class="pane-title">{side.label()}</div>
            <textarea
                class="pane-editor"
                spellcheck="false"
                prop:value=move || store_text(&store, side)
                on:paste=move |_| pasted.set_value(true)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let value = match pasted.try_update_value(std::mem::take) {
                        Some(true) => reformat_pasted(&value).unwrap_or(value),
                        _ => value,
                    };
                    store_set_text(&store, side, value);
                }
            />
            <DragOverlay
                is_dragging=is_target
                position=OverlayPosition::Full
                class=format!("drag-overlay-highlight {}", side.accent())
            >
                <DragIndicator class=format!("drag-indicator {}", side.accent())>
                    <span>{side.drop_hint()}</span>
                </DragIndicator>
            </DragOverlay>
        </div>
    }
}

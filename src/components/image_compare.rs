//! Image Compare Page
//!
//! Each side is its own `DropZone` accepting a single image. Once both sides
//! are loaded the comparison mode can be switched.

use leptos::prelude::*;
use leptos_filedrop::{format_file_size, FileInfo, ValidationResult};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlImageElement};

use crate::components::image_views::{OverlayView, SideBySideView, SliderView};
use crate::components::{
    DropZone, DropZoneContent, DropZoneDragIndicator, DropZoneInput, DropZoneMessage, DropZoneOverlay,
};
use crate::config::{image_validation, DEFAULT_OVERLAY_OPACITY, DEFAULT_SLIDER_POSITION};
use crate::files;
use crate::models::{ComparisonMode, DiffSide, ImageInfo, OverlayPosition};
use crate::store::{store_clear_images, store_image, store_set_dimensions, store_set_image, use_compare_store};

#[component]
pub fn ImageCompare() -> impl IntoView {
    let store = use_compare_store();
    let (mode, set_mode) = signal(ComparisonMode::default());
    let (opacity, set_opacity) = signal(DEFAULT_OVERLAY_OPACITY);
    let (slider, set_slider) = signal(DEFAULT_SLIDER_POSITION);

    let both_loaded = move || DiffSide::ALL.into_iter().all(|side| store_image(&store, side).is_some());

    let on_mode_change = move |ev: web_sys::Event| {
        if let Some(next) = ComparisonMode::parse(&event_target_value(&ev)) {
            set_mode.set(next);
        }
    };

    view! {
        <div class="compare-page image-compare">
            <Show when=both_loaded>
                <div class="toolbar">
                    <div class="toolbar-info">
                        <label class="mode-select">
                            "Mode: "
                            <select on:change=on_mode_change prop:value=move || mode.get().as_str()>
                                {ComparisonMode::ALL.into_iter().map(|m| view! {
                                    <option value=m.as_str()>{m.label()}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        {DiffSide::ALL.into_iter().map(|side| view! {
                            <span>
                                {move || store_image(&store, side).map(|img| {
                                    let mut info = format!("{}: {} ({})", side.label(), img.name, format_file_size(img.size));
                                    if let Some(dims) = img.dimensions_label() {
                                        info.push_str(&format!(" {}", dims));
                                    }
                                    info
                                })}
                            </span>
                        }).collect_view()}
                    </div>
                    <div class="toolbar-actions">
                        <button class="btn" on:click=move |_| store_clear_images(&store)>"Clear"</button>
                    </div>
                </div>
            </Show>

            <div class="image-area">
                {move || {
                    let current = if both_loaded() { mode.get() } else { ComparisonMode::SideBySide };
                    match current {
                        ComparisonMode::SideBySide => view! {
                            <SideBySideView>
                                {DiffSide::ALL.into_iter().map(|side| view! { <ImageSlot side=side /> }).collect_view()}
                            </SideBySideView>
                        }.into_any(),
                        ComparisonMode::Overlay => view! {
                            <OverlayView opacity=opacity set_opacity=set_opacity />
                        }.into_any(),
                        ComparisonMode::Slider => view! {
                            <SliderView position=slider set_position=set_slider />
                        }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

/// Drop target and preview for one side
#[component]
fn ImageSlot(side: DiffSide) -> impl IntoView {
    let store = use_compare_store();
    let (errors, set_errors) = signal(Vec::<String>::new());

    let on_select = move |(files, result): (Vec<File>, ValidationResult)| {
        if !result.is_valid {
            log::debug!("[ImageCompare] rejected selection for {:?}: {:?}", side, result.errors);
            set_errors.set(result.errors);
            return;
        }
        let Some(file) = files.first() else {
            return;
        };
        match files::create_object_url(file) {
            Ok(url) => {
                set_errors.set(Vec::new());
                let image = ImageInfo {
                    name: FileInfo::name(file),
                    size: FileInfo::size(file),
                    url,
                    dimensions: None,
                };
                store_set_image(&store, side, Some(image));
            }
            Err(err) => {
                log::error!("[ImageCompare] {}", err);
                set_errors.set(vec![err.to_string()]);
            }
        }
    };

    let on_preview_load = move |ev: web_sys::Event| {
        if let Some(img) = ev.target().and_then(|t| t.dyn_into::<HtmlImageElement>().ok()) {
            store_set_dimensions(&store, side, img.natural_width(), img.natural_height());
        }
    };

    view! {
        <DropZone on_files_select=on_select validation=image_validation() class="image-slot">
            <DropZoneContent class="image-slot-content">
                {move || match store_image(&store, side) {
                    Some(img) => view! {
                        <img class="image-preview" src=img.url.clone() alt=side.label() on:load=on_preview_load />
                        <p class="image-caption">
                            {format!("{} · {}", img.name, format_file_size(img.size))}
                            {img.dimensions_label().map(|dims| format!(" · {}", dims))}
                        </p>
                        <DropZoneInput accept="image/*" class="btn">"Replace"</DropZoneInput>
                    }.into_any(),
                    None => view! {
                        <DropZoneInput accept="image/*">
                            <DropZoneMessage
                                title=format!("Drop the {} image here", side.label().to_lowercase())
                            />
                        </DropZoneInput>
                    }.into_any(),
                }}
            </DropZoneContent>
            <DropZoneOverlay position=OverlayPosition::Full>
                <DropZoneDragIndicator>{format!("Drop to set the {} image", side.label().to_lowercase())}</DropZoneDragIndicator>
            </DropZoneOverlay>
            <ul class="validation-errors">
                {move || errors.get().into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
            </ul>
        </DropZone>
    }
}

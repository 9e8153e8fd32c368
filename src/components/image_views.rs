//! Image Comparison Views
//!
//! Overlay and slider stack both images in one frame; the side-by-side view
//! only lays out its slots.

use leptos::prelude::*;

use crate::models::DiffSide;
use crate::store::{store_image, use_compare_store};

#[component]
pub fn SideBySideView(children: Children) -> impl IntoView {
    view! { <div class="side-by-side">{children()}</div> }
}

fn image_url(side: DiffSide) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
    let store = use_compare_store();
    move || store_image(&store, side).map(|img| img.url)
}

fn parse_percent(value: &str) -> Option<u8> {
    value.parse::<u8>().ok().map(|v| v.min(100))
}

/// Modified image over the original with adjustable opacity
#[component]
pub fn OverlayView(opacity: ReadSignal<u8>, set_opacity: WriteSignal<u8>) -> impl IntoView {
    let original = image_url(DiffSide::Original);
    let modified = image_url(DiffSide::Modified);

    view! {
        <div class="stacked-view">
            <div class="stacked-frame">
                <img class="stacked-image" src=original alt="Original" />
                <img
                    class="stacked-image stacked-top"
                    src=modified
                    alt="Modified"
                    style=move || format!("opacity: {}", f64::from(opacity.get()) / 100.0)
                />
            </div>
            <label class="range-control">
                {move || format!("Opacity: {}%", opacity.get())}
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || opacity.get().to_string()
                    on:input=move |ev| {
                        if let Some(v) = parse_percent(&event_target_value(&ev)) {
                            set_opacity.set(v);
                        }
                    }
                />
            </label>
        </div>
    }
}

/// Modified image revealed right of a draggable divider
#[component]
pub fn SliderView(position: ReadSignal<u8>, set_position: WriteSignal<u8>) -> impl IntoView {
    let original = image_url(DiffSide::Original);
    let modified = image_url(DiffSide::Modified);

    view! {
        <div class="stacked-view">
            <div class="stacked-frame">
                <img class="stacked-image" src=original alt="Original" />
                <img
                    class="stacked-image stacked-top"
                    src=modified
                    alt="Modified"
                    style=move || format!("clip-path: inset(0 0 0 {}%)", position.get())
                />
                <div class="slider-divider" style=move || format!("left: {}%", position.get())></div>
            </div>
            <label class="range-control">
                {move || format!("Position: {}%", position.get())}
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || position.get().to_string()
                    on:input=move |ev| {
                        if let Some(v) = parse_percent(&event_target_value(&ev)) {
                            set_position.set(v);
                        }
                    }
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_clamps() {
        assert_eq!(parse_percent("0"), Some(0));
        assert_eq!(parse_percent("42"), Some(42));
        assert_eq!(parse_percent("250"), Some(100));
        assert_eq!(parse_percent("-1"), None);
        assert_eq!(parse_percent("abc"), None);
    }
}

//! UI Components
//!
//! Pages and reusable Leptos components.

mod drag_overlay;
mod drop_zone;
mod header;
mod image_compare;
mod image_views;
mod text_compare;

pub use drag_overlay::{DragIndicator, DragOverlay};
pub use drop_zone::{DropZone, DropZoneContent, DropZoneDragIndicator, DropZoneInput, DropZoneMessage, DropZoneOverlay};
pub use header::AppHeader;
pub use image_compare::ImageCompare;
pub use text_compare::TextCompare;

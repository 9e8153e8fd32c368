//! Leptos FileDrop
//!
//! Multi-zone file drag-and-drop for Leptos.
//!
//! - [`tracker`] wires the native drag events of one element
//! - [`coordinator`] aggregates registered zones into one active-zone state
//! - [`validate`] checks dropped files against declarative rules
//! - [`context`] shares one zone's state with nested components
//!
//! The state machine only sees [`DropSurface`]s; the DOM implementation is in
//! [`web`].

pub mod context;
pub mod coordinator;
pub mod hook;
pub mod surface;
pub mod tracker;
pub mod validate;
pub mod web;

#[cfg(test)]
mod testing;

pub use context::{
    provide_drop_zone, try_use_drop_zone, use_drop_zone, DragState, DropZoneConfig, DropZoneContext,
    DropZoneError, FileSelector, MAIN_ZONE,
};
pub use coordinator::{CoordinatorBuilder, DragCoordinator, DragSessionState};
pub use hook::{use_drag_and_drop, use_drag_and_drop_with, DragAndDrop};
pub use surface::{Bounds, DragEventKind, DragInput, DropSurface, FileInfo, FileMeta, SurfaceFile};
pub use tracker::{attach, DragSubscription, LeavePolicy, TrackerCallbacks};
pub use validate::{format_file_size, matches_accept, validate_files, FileValidation, ValidationResult};
pub use web::file_list_to_vec;

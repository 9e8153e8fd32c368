//! Leptos binding for the coordinator
//!
//! Mirrors the coordinator's state into a signal and disposes the coordinator
//! together with the owning component.

use std::fmt::Debug;
use std::hash::Hash;

use leptos::prelude::*;
use web_sys::{File, HtmlElement};

use crate::coordinator::{DragCoordinator, DragSessionState};
use crate::tracker::LeavePolicy;

/// Handle returned by [`use_drag_and_drop`]
pub struct DragAndDrop<Z: Send + Sync + 'static> {
    state: RwSignal<DragSessionState<Z>>,
    coordinator: StoredValue<DragCoordinator<Z, HtmlElement>, LocalStorage>,
}

impl<Z: Send + Sync + 'static> Clone for DragAndDrop<Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Z: Send + Sync + 'static> Copy for DragAndDrop<Z> {}

/// Multi-zone drag-and-drop for the current component.
///
/// `on_files_drop` receives the dropped files and the zone they landed on.
pub fn use_drag_and_drop<Z>(on_files_drop: impl Fn(Vec<File>, Z) + 'static) -> DragAndDrop<Z>
where
    Z: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    use_drag_and_drop_with(LeavePolicy::default(), on_files_drop)
}

/// Same as [`use_drag_and_drop`] with an explicit leave policy
pub fn use_drag_and_drop_with<Z>(
    leave_policy: LeavePolicy,
    on_files_drop: impl Fn(Vec<File>, Z) + 'static,
) -> DragAndDrop<Z>
where
    Z: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    let state = RwSignal::new(DragSessionState::<Z>::default());

    let coordinator = DragCoordinator::<Z, HtmlElement>::builder()
        .leave_policy(leave_policy)
        .on_state_change(move |next| {
            let _ = state.try_set(next.clone());
        })
        .on_files_drop(on_files_drop)
        .build();
    let coordinator = StoredValue::new_local(coordinator);

    on_cleanup(move || {
        if let Some(coordinator) = coordinator.try_get_value() {
            coordinator.dispose();
        }
    });

    DragAndDrop { state, coordinator }
}

impl<Z> DragAndDrop<Z>
where
    Z: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    pub fn is_dragging(&self) -> bool {
        self.state.with(|s| s.is_dragging)
    }

    pub fn is_active(&self, zone: &Z) -> bool {
        self.state.with(|s| s.is_active(zone))
    }

    pub fn register_zone(&self, zone: Z, element: &HtmlElement) {
        match self.coordinator.try_get_value() {
            Some(coordinator) => coordinator.register_zone(zone, element),
            None => log::warn!("[filedrop] register_zone({:?}) on a disposed owner", zone),
        }
    }

    pub fn unregister_zone(&self, zone: &Z) {
        if let Some(coordinator) = self.coordinator.try_get_value() {
            coordinator.unregister_zone(zone);
        }
    }
}

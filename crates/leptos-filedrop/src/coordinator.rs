//! Multi-Zone Drag Coordinator
//!
//! Aggregates any number of registered drop zones into one
//! `(is_dragging, active_zone)` state. Events are handled synchronously in the
//! browser's dispatch turn, so the last processed event wins.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::surface::{DropSurface, SurfaceFile};
use crate::tracker::{attach, DragSubscription, LeavePolicy, TrackerCallbacks};

/// Shared drag state across all zones of one coordinator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSessionState<Z> {
    pub is_dragging: bool,
    /// Only `Some` while `is_dragging`
    pub active_zone: Option<Z>,
}

impl<Z> Default for DragSessionState<Z> {
    fn default() -> Self {
        Self {
            is_dragging: false,
            active_zone: None,
        }
    }
}

impl<Z: PartialEq> DragSessionState<Z> {
    fn active(zone: Z) -> Self {
        Self {
            is_dragging: true,
            active_zone: Some(zone),
        }
    }

    pub fn is_active(&self, zone: &Z) -> bool {
        self.active_zone.as_ref() == Some(zone)
    }
}

type FilesDropHandler<Z, S> = Rc<dyn Fn(Vec<SurfaceFile<S>>, Z)>;
type StateListener<Z> = Rc<dyn Fn(&DragSessionState<Z>)>;

struct Inner<Z, S: DropSurface> {
    state: RefCell<DragSessionState<Z>>,
    zones: RefCell<HashMap<Z, DragSubscription<S>>>,
    on_files_drop: Option<FilesDropHandler<Z, S>>,
    on_state_change: Option<StateListener<Z>>,
    leave_policy: LeavePolicy,
    disposed: Cell<bool>,
}

impl<Z, S> Inner<Z, S>
where
    Z: Clone + Eq + Hash + Debug + 'static,
    S: DropSurface,
{
    fn set_state(&self, next: DragSessionState<Z>) {
        {
            let mut state = self.state.borrow_mut();
            if *state == next {
                return;
            }
            *state = next.clone();
        }
        if let Some(listener) = &self.on_state_change {
            listener(&next);
        }
    }

    fn clear_if_active(&self, zone: &Z) {
        let is_active = self.state.borrow().is_active(zone);
        if is_active {
            self.set_state(DragSessionState::default());
        }
    }
}

/// Registry of drop zones sharing one drag state.
///
/// Cloning yields another handle to the same registry. The element behind a
/// zone is never owned here, only the listeners attached to it; those are
/// removed on `unregister_zone`, re-registration, `dispose`, or when the last
/// handle is dropped.
pub struct DragCoordinator<Z, S: DropSurface> {
    inner: Rc<Inner<Z, S>>,
}

impl<Z, S: DropSurface> Clone for DragCoordinator<Z, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Builder for [`DragCoordinator`]
pub struct CoordinatorBuilder<Z, S: DropSurface> {
    on_files_drop: Option<FilesDropHandler<Z, S>>,
    on_state_change: Option<StateListener<Z>>,
    leave_policy: LeavePolicy,
}

impl<Z, S> CoordinatorBuilder<Z, S>
where
    Z: Clone + Eq + Hash + Debug + 'static,
    S: DropSurface,
{
    /// Called after a drop with at least one file, state already reset
    pub fn on_files_drop(mut self, f: impl Fn(Vec<SurfaceFile<S>>, Z) + 'static) -> Self {
        self.on_files_drop = Some(Rc::new(f));
        self
    }

    /// Called whenever the shared state changes
    pub fn on_state_change(mut self, f: impl Fn(&DragSessionState<Z>) + 'static) -> Self {
        self.on_state_change = Some(Rc::new(f));
        self
    }

    pub fn leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.leave_policy = policy;
        self
    }

    pub fn build(self) -> DragCoordinator<Z, S> {
        DragCoordinator {
            inner: Rc::new(Inner {
                state: RefCell::new(DragSessionState::default()),
                zones: RefCell::new(HashMap::new()),
                on_files_drop: self.on_files_drop,
                on_state_change: self.on_state_change,
                leave_policy: self.leave_policy,
                disposed: Cell::new(false),
            }),
        }
    }
}

impl<Z, S> DragCoordinator<Z, S>
where
    Z: Clone + Eq + Hash + Debug + 'static,
    S: DropSurface,
{
    pub fn builder() -> CoordinatorBuilder<Z, S> {
        CoordinatorBuilder {
            on_files_drop: None,
            on_state_change: None,
            leave_policy: LeavePolicy::default(),
        }
    }

    /// Current shared state
    pub fn state(&self) -> DragSessionState<Z> {
        self.inner.state.borrow().clone()
    }

    pub fn is_registered(&self, zone: &Z) -> bool {
        self.inner.zones.borrow().contains_key(zone)
    }

    pub fn zone_count(&self) -> usize {
        self.inner.zones.borrow().len()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Attach drag listeners to `surface` under `zone`.
    ///
    /// An element already registered under `zone` is unregistered first, so
    /// widgets whose DOM node appears late can simply register again.
    pub fn register_zone(&self, zone: Z, surface: &S) {
        if self.inner.disposed.get() {
            log::warn!("[filedrop] register_zone({:?}) after dispose ignored", zone);
            return;
        }
        if self.is_registered(&zone) {
            self.unregister_zone(&zone);
        }

        let subscription = attach(surface, self.callbacks_for(zone.clone()), self.inner.leave_policy);
        log::debug!("[filedrop] registered zone {:?}", zone);
        self.inner.zones.borrow_mut().insert(zone, subscription);
    }

    /// Detach the zone's listeners. Unknown zones are ignored.
    pub fn unregister_zone(&self, zone: &Z) {
        let removed = self.inner.zones.borrow_mut().remove(zone);
        let Some(subscription) = removed else {
            return;
        };
        drop(subscription);
        log::debug!("[filedrop] unregistered zone {:?}", zone);
        self.inner.clear_if_active(zone);
    }

    /// Unregister every zone. Further registrations are refused.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        let zones = std::mem::take(&mut *self.inner.zones.borrow_mut());
        let count = zones.len();
        drop(zones);
        self.inner.set_state(DragSessionState::default());
        log::debug!("[filedrop] disposed coordinator, released {} zone(s)", count);
    }

    fn callbacks_for(&self, zone: Z) -> TrackerCallbacks<S> {
        let weak: Weak<Inner<Z, S>> = Rc::downgrade(&self.inner);

        let on_enter_or_over = {
            let weak = weak.clone();
            let zone = zone.clone();
            Rc::new(move |_: &S::Event| {
                if let Some(inner) = weak.upgrade() {
                    inner.set_state(DragSessionState::active(zone.clone()));
                }
            })
        };

        let on_leave = {
            let weak = weak.clone();
            let zone = zone.clone();
            Rc::new(move |_: &S::Event| {
                if let Some(inner) = weak.upgrade() {
                    inner.clear_if_active(&zone);
                }
            })
        };

        let on_drag_end = {
            let weak = weak.clone();
            Rc::new(move |_: &S::Event| {
                if let Some(inner) = weak.upgrade() {
                    inner.set_state(DragSessionState::default());
                }
            })
        };

        let on_drop = Rc::new(move |files: Vec<SurfaceFile<S>>, _: &S::Event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let handler = inner.on_files_drop.clone();
            // release the upgrade before user code runs, it may drop the last handle
            drop(inner);
            if let Some(handler) = handler {
                handler(files, zone.clone());
            }
        });

        TrackerCallbacks {
            on_enter_or_over,
            on_leave,
            on_drag_end,
            on_drop,
        }
    }
}

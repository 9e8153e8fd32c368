//! Drag Session Tracker
//!
//! Turns the native drag event storm on one element into a single
//! "something is over me" flag plus the dropped files.
//!
//! Every handled event is suppressed (`preventDefault` + `stopPropagation`):
//! the browser would otherwise navigate to the dropped file, and nested zones
//! would see the event twice. `dragover` fires continuously while the pointer
//! moves, so `on_enter_or_over` must be idempotent on the caller side.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::surface::{DragEventKind, DragInput, DropSurface, SurfaceFile};

/// How to interpret `dragleave`.
///
/// Browsers fire `dragleave` on the parent when the pointer moves onto a child
/// element, even though it never left the drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeavePolicy {
    /// Every leave event ends the drag over this element
    AnyLeave,
    /// Leave only counts once the pointer is outside the element's bounding
    /// rectangle. An element without a box is always "outside".
    #[default]
    OutsideBounds,
}

/// Callbacks fired by one attached tracker
pub struct TrackerCallbacks<S: DropSurface> {
    pub on_enter_or_over: Rc<dyn Fn(&S::Event)>,
    pub on_leave: Rc<dyn Fn(&S::Event)>,
    /// Fires on every drop, before `on_drop`, whether or not files came along
    pub on_drag_end: Rc<dyn Fn(&S::Event)>,
    /// Fires only when the drop carried at least one file
    pub on_drop: Rc<dyn Fn(Vec<SurfaceFile<S>>, &S::Event)>,
}

impl<S: DropSurface> Clone for TrackerCallbacks<S> {
    fn clone(&self) -> Self {
        Self {
            on_enter_or_over: self.on_enter_or_over.clone(),
            on_leave: self.on_leave.clone(),
            on_drag_end: self.on_drag_end.clone(),
            on_drop: self.on_drop.clone(),
        }
    }
}

/// Listeners installed on one element by [`attach`].
///
/// Detaches on drop, so holding the subscription is holding the listeners.
pub struct DragSubscription<S: DropSurface> {
    surface: S,
    bindings: RefCell<Vec<S::Binding>>,
    over: Rc<Cell<bool>>,
}

impl<S: DropSurface> DragSubscription<S> {
    /// Whether a drag is currently over the element
    pub fn is_over(&self) -> bool {
        self.over.get()
    }

    pub fn is_attached(&self) -> bool {
        !self.bindings.borrow().is_empty()
    }

    /// Remove exactly the listeners this subscription installed.
    /// Calling it again is a no-op.
    pub fn detach(&self) {
        let bindings = std::mem::take(&mut *self.bindings.borrow_mut());
        for binding in &bindings {
            self.surface.unbind(binding);
        }
        self.over.set(false);
    }
}

impl<S: DropSurface> Drop for DragSubscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Install drag listeners on `surface`
pub fn attach<S: DropSurface>(
    surface: &S,
    callbacks: TrackerCallbacks<S>,
    policy: LeavePolicy,
) -> DragSubscription<S> {
    let over = Rc::new(Cell::new(false));
    let bindings = DragEventKind::ALL
        .iter()
        .map(|&kind| {
            let handler = make_handler(kind, surface.clone(), callbacks.clone(), over.clone(), policy);
            surface.bind(kind, handler)
        })
        .collect();

    DragSubscription {
        surface: surface.clone(),
        bindings: RefCell::new(bindings),
        over,
    }
}

fn make_handler<S: DropSurface>(
    kind: DragEventKind,
    surface: S,
    callbacks: TrackerCallbacks<S>,
    over: Rc<Cell<bool>>,
    policy: LeavePolicy,
) -> Rc<dyn Fn(&S::Event)> {
    match kind {
        DragEventKind::Enter | DragEventKind::Over => Rc::new(move |ev: &S::Event| {
            ev.suppress_default();
            over.set(true);
            (callbacks.on_enter_or_over)(ev);
        }),
        DragEventKind::Leave => Rc::new(move |ev: &S::Event| {
            ev.suppress_default();
            if policy == LeavePolicy::OutsideBounds {
                let (x, y) = ev.client_position();
                if surface.bounds().is_some_and(|b| b.contains(x, y)) {
                    // moved onto a child
                    return;
                }
            }
            over.set(false);
            (callbacks.on_leave)(ev);
        }),
        DragEventKind::Drop => Rc::new(move |ev: &S::Event| {
            ev.suppress_default();
            over.set(false);
            (callbacks.on_drag_end)(ev);
            let files = ev.files();
            if !files.is_empty() {
                (callbacks.on_drop)(files, ev);
            }
        }),
    }
}

//! In-memory drop surface for tests
//!
//! Records listeners like an element would and dispatches synthetic events
//! to them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::surface::{Bounds, DragEventKind, DragHandler, DragInput, DropSurface, FileMeta};

pub struct FakeEvent {
    pub files: Vec<FileMeta>,
    pub x: f64,
    pub y: f64,
    suppressed: Cell<u32>,
}

impl FakeEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            files: Vec::new(),
            x,
            y,
            suppressed: Cell::new(0),
        }
    }

    pub fn with_files(files: Vec<FileMeta>) -> Self {
        Self {
            files,
            ..Self::at(0.0, 0.0)
        }
    }

    pub fn suppressed(&self) -> u32 {
        self.suppressed.get()
    }
}

impl DragInput for FakeEvent {
    type File = FileMeta;

    fn suppress_default(&self) {
        self.suppressed.set(self.suppressed.get() + 1);
    }

    fn client_position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn files(&self) -> Vec<FileMeta> {
        self.files.clone()
    }
}

#[derive(Default)]
struct FakeInner {
    listeners: RefCell<Vec<(u64, DragEventKind, DragHandler<FakeEvent>)>>,
    next_id: Cell<u64>,
    bounds: Cell<Option<Bounds>>,
}

#[derive(Clone, Default)]
pub struct FakeSurface {
    inner: Rc<FakeInner>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        let surface = Self::new();
        surface.inner.bounds.set(Some(bounds));
        surface
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn dispatch(&self, kind: DragEventKind, event: &FakeEvent) {
        // snapshot, handlers may unbind while running
        let handlers: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, h)| h.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn over(&self) {
        self.dispatch(DragEventKind::Over, &FakeEvent::at(0.0, 0.0));
    }

    pub fn enter(&self) {
        self.dispatch(DragEventKind::Enter, &FakeEvent::at(0.0, 0.0));
    }

    pub fn leave_at(&self, x: f64, y: f64) {
        self.dispatch(DragEventKind::Leave, &FakeEvent::at(x, y));
    }

    pub fn drop_files(&self, files: Vec<FileMeta>) {
        self.dispatch(DragEventKind::Drop, &FakeEvent::with_files(files));
    }
}

impl DropSurface for FakeSurface {
    type Event = FakeEvent;
    type Binding = u64;

    fn bind(&self, kind: DragEventKind, handler: DragHandler<FakeEvent>) -> u64 {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, kind, handler));
        id
    }

    fn unbind(&self, binding: &u64) {
        // take the removed handlers out before dropping them
        let removed: Vec<_> = {
            let mut listeners = self.inner.listeners.borrow_mut();
            let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut *listeners)
                .into_iter()
                .partition(|(id, _, _)| id == binding);
            *listeners = kept;
            gone
        };
        drop(removed);
    }

    fn bounds(&self) -> Option<Bounds> {
        self.inner.bounds.get()
    }
}

pub fn file(name: &str, mime_type: &str, size: u64) -> FileMeta {
    FileMeta::new(name, mime_type, size)
}

//! Drop Surface Abstractions
//!
//! The coordinator never touches the DOM directly. It talks to anything that
//! can hand out drag listeners, which keeps the state machine testable off the
//! browser. The `web_sys` implementations live in `web.rs`.

use std::rc::Rc;

/// The four native drag events a drop target listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    pub const ALL: [DragEventKind; 4] = [
        DragEventKind::Enter,
        DragEventKind::Over,
        DragEventKind::Leave,
        DragEventKind::Drop,
    ];

    /// DOM event type name
    pub fn as_str(self) -> &'static str {
        match self {
            DragEventKind::Enter => "dragenter",
            DragEventKind::Over => "dragover",
            DragEventKind::Leave => "dragleave",
            DragEventKind::Drop => "drop",
        }
    }
}

/// Viewport rectangle of a drop target, in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box of a client rect, `None` when either side has no extent
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self::new(x, y, x + width, y + height))
    }

    /// Strict containment: a pointer sitting on the edge has already left.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

/// What validation needs to know about a file handle
pub trait FileInfo {
    fn name(&self) -> String;
    /// Reported MIME type, empty when the browser does not know it
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

/// One native drag event as seen by the tracker
pub trait DragInput {
    type File: FileInfo + Clone + 'static;

    /// preventDefault + stopPropagation
    fn suppress_default(&self);
    fn client_position(&self) -> (f64, f64);
    /// Files carried by the event's data transfer, empty if none
    fn files(&self) -> Vec<Self::File>;
}

pub type DragHandler<E> = Rc<dyn Fn(&E)>;

/// An element drag listeners can be attached to.
///
/// Implementors are cheap handles (`Clone`) to an element owned elsewhere.
/// `bind` returns the binding that `unbind` needs to remove exactly that
/// listener again.
pub trait DropSurface: Clone + 'static {
    type Event: DragInput + 'static;
    type Binding: 'static;

    fn bind(&self, kind: DragEventKind, handler: DragHandler<Self::Event>) -> Self::Binding;
    fn unbind(&self, binding: &Self::Binding);
    /// Current bounding rectangle, `None` if the element has no box
    fn bounds(&self) -> Option<Bounds>;
}

/// File handle type produced by a surface's events
pub type SurfaceFile<S> = <<S as DropSurface>::Event as DragInput>::File;

/// Plain file description, handy for validating data that did not come from
/// the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

impl FileInfo for FileMeta {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_is_strict() {
        let b = Bounds::new(10.0, 10.0, 110.0, 60.0);
        assert!(b.contains(50.0, 30.0));
        assert!(!b.contains(10.0, 30.0));
        assert!(!b.contains(110.0, 30.0));
        assert!(!b.contains(50.0, 60.0));
        assert!(!b.contains(0.0, 0.0));
    }

    #[test]
    fn test_rect_without_extent_has_no_bounds() {
        assert_eq!(Bounds::from_rect(0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(Bounds::from_rect(5.0, 5.0, 0.0, 40.0), None);
        assert_eq!(Bounds::from_rect(5.0, 5.0, 40.0, 0.0), None);
        assert_eq!(
            Bounds::from_rect(5.0, 10.0, 40.0, 20.0),
            Some(Bounds::new(5.0, 10.0, 45.0, 30.0))
        );
    }

    #[test]
    fn test_event_names() {
        let names: Vec<_> = DragEventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["dragenter", "dragover", "dragleave", "drop"]);
    }
}

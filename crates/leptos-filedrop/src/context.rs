//! Drop Zone Context
//!
//! One drop zone's drag state and file selection handler, provided via the
//! Leptos Context API so nested pieces (overlay, message, file input) can
//! reach it without prop threading.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use thiserror::Error;
use web_sys::{File, HtmlElement};

use crate::hook::{use_drag_and_drop_with, DragAndDrop};
use crate::surface::FileInfo;
use crate::tracker::LeavePolicy;
use crate::validate::{validate_files, FileValidation, ValidationResult};

/// Zone id each provider registers its root element under
pub const MAIN_ZONE: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropZoneError {
    #[error("use_drop_zone must be used within a DropZone component")]
    MissingProvider,
}

/// What nested drop zone pieces render from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_dragging: bool,
    /// The drag is over this provider's zone
    pub is_active: bool,
    /// Result of the most recent selection
    pub validation_result: ValidationResult,
}

/// Validates a selection and hands it to the caller.
///
/// Remembers the result of the last selection it accepted.
pub struct FileSelector<F> {
    rules: Option<FileValidation>,
    disabled: bool,
    last_result: Rc<RefCell<ValidationResult>>,
    on_select: Rc<dyn Fn(Vec<F>, ValidationResult)>,
}

impl<F> Clone for FileSelector<F> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            disabled: self.disabled,
            last_result: self.last_result.clone(),
            on_select: self.on_select.clone(),
        }
    }
}

impl<F: FileInfo> FileSelector<F> {
    pub fn new(rules: Option<FileValidation>, on_select: impl Fn(Vec<F>, ValidationResult) + 'static) -> Self {
        Self {
            rules,
            disabled: false,
            last_result: Rc::new(RefCell::new(ValidationResult::valid())),
            on_select: Rc::new(on_select),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn last_result(&self) -> ValidationResult {
        self.last_result.borrow().clone()
    }

    /// Validate and forward `files`.
    /// Empty selections and selections on a disabled selector are ignored.
    pub fn select(&self, files: Vec<F>) -> Option<ValidationResult> {
        if self.disabled {
            log::debug!("[filedrop] drop zone disabled, ignoring {} file(s)", files.len());
            return None;
        }
        if files.is_empty() {
            return None;
        }
        let result = validate_files(&files, self.rules.as_ref());
        *self.last_result.borrow_mut() = result.clone();
        (self.on_select)(files, result.clone());
        Some(result)
    }
}

/// Provider settings
#[derive(Clone, Debug, Default)]
pub struct DropZoneConfig {
    pub validation: Option<FileValidation>,
    pub disabled: bool,
    pub leave_policy: LeavePolicy,
}

#[derive(Clone, Copy)]
pub struct DropZoneContext {
    dnd: DragAndDrop<&'static str>,
    last_validation: RwSignal<ValidationResult>,
    selector: StoredValue<FileSelector<File>, LocalStorage>,
}

impl DropZoneContext {
    pub fn drag_state(&self) -> DragState {
        DragState {
            is_dragging: self.dnd.is_dragging(),
            is_active: self.dnd.is_active(&MAIN_ZONE),
            validation_result: self.last_validation.get(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.selector.try_with_value(FileSelector::is_disabled).unwrap_or(true)
    }

    /// Entry point for both native drops and file inputs
    pub fn select_files(&self, files: Vec<File>) {
        select_files(self.selector, self.last_validation, files);
    }

    pub fn register_root(&self, element: &HtmlElement) {
        self.dnd.register_zone(MAIN_ZONE, element);
    }
}

fn select_files(
    selector: StoredValue<FileSelector<File>, LocalStorage>,
    last_validation: RwSignal<ValidationResult>,
    files: Vec<File>,
) {
    let Some(selector) = selector.try_get_value() else {
        return;
    };
    if let Some(result) = selector.select(files) {
        let _ = last_validation.try_set(result);
    }
}

/// Create a drop zone for the current component and provide it to children
pub fn provide_drop_zone(
    config: DropZoneConfig,
    on_files_select: impl Fn(Vec<File>, ValidationResult) + 'static,
) -> DropZoneContext {
    let DropZoneConfig {
        validation,
        disabled,
        leave_policy,
    } = config;

    let last_validation = RwSignal::new(ValidationResult::valid());
    let selector = StoredValue::new_local(FileSelector::new(validation, on_files_select).disabled(disabled));
    let dnd = use_drag_and_drop_with(leave_policy, move |files, _zone: &'static str| {
        select_files(selector, last_validation, files);
    });

    let ctx = DropZoneContext {
        dnd,
        last_validation,
        selector,
    };
    provide_context(ctx);
    ctx
}

pub fn try_use_drop_zone() -> Result<DropZoneContext, DropZoneError> {
    use_context::<DropZoneContext>().ok_or(DropZoneError::MissingProvider)
}

/// Get the enclosing drop zone. Panics outside a provider: that is a wiring
/// mistake, not a runtime condition.
pub fn use_drop_zone() -> DropZoneContext {
    match try_use_drop_zone() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FileMeta;

    #[test]
    fn test_missing_provider_is_an_error() {
        assert_eq!(try_use_drop_zone().err(), Some(DropZoneError::MissingProvider));
    }

    #[test]
    #[should_panic(expected = "must be used within a DropZone component")]
    fn test_use_drop_zone_fails_fast() {
        let _ = use_drop_zone();
    }

    #[test]
    fn test_selector_validates_and_forwards() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let selector = FileSelector::new(
            Some(FileValidation::default().accept(["image/*"])),
            move |files: Vec<FileMeta>, result| {
                sink.borrow_mut().push((files.len(), result));
            },
        );

        let result = selector
            .select(vec![FileMeta::new("a.txt", "text/plain", 3)])
            .expect("non-empty selection");
        assert!(!result.is_valid);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[0].1.errors, vec!["File \"a.txt\" type not supported".to_string()]);
    }

    #[test]
    fn test_selector_ignores_empty_selection() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let selector = FileSelector::new(None, move |_: Vec<FileMeta>, _| {
            *counter.borrow_mut() += 1;
        });
        assert_eq!(selector.select(Vec::new()), None);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_disabled_selector_ignores_selection() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let selector = FileSelector::new(None, move |_: Vec<FileMeta>, _| {
            *counter.borrow_mut() += 1;
        })
        .disabled(true);

        assert!(selector.is_disabled());
        assert_eq!(selector.select(vec![FileMeta::new("a.txt", "text/plain", 3)]), None);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(selector.last_result(), ValidationResult::valid());
    }

    #[test]
    fn test_last_result_follows_latest_selection() {
        let selector = FileSelector::new(
            Some(FileValidation::default().accept(["image/*"])),
            |_: Vec<FileMeta>, _| {},
        );
        assert_eq!(selector.last_result(), ValidationResult::valid());

        selector.select(vec![FileMeta::new("notes.txt", "text/plain", 3)]);
        let last = selector.last_result();
        assert!(!last.is_valid);
        assert_eq!(last.errors, vec!["File \"notes.txt\" type not supported".to_string()]);

        // each selection is validated on its own
        selector.select(vec![FileMeta::new("a.png", "image/png", 3)]);
        assert_eq!(selector.last_result(), ValidationResult::valid());

        // an empty selection leaves the last result alone
        selector.select(Vec::new());
        assert_eq!(selector.last_result(), ValidationResult::valid());
    }
}

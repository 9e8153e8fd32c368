//! DOM bindings
//!
//! `DropSurface` for real elements, `DragInput` for `DragEvent`, `FileInfo`
//! for `File`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Blob, DragEvent, File, FileList, HtmlElement};

use crate::surface::{Bounds, DragEventKind, DragHandler, DragInput, DropSurface, FileInfo};

/// A listener installed on an element. Owns the JS closure so the callback
/// stays alive until it is removed again.
pub struct DomBinding {
    kind: DragEventKind,
    closure: Closure<dyn FnMut(DragEvent)>,
}

impl DropSurface for HtmlElement {
    type Event = DragEvent;
    type Binding = DomBinding;

    fn bind(&self, kind: DragEventKind, handler: DragHandler<DragEvent>) -> DomBinding {
        let closure = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
            handler(&ev);
        });
        if let Err(err) =
            self.add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        {
            log::warn!("[filedrop] failed to add {} listener: {:?}", kind.as_str(), err);
        }
        DomBinding { kind, closure }
    }

    fn unbind(&self, binding: &DomBinding) {
        if let Err(err) = self.remove_event_listener_with_callback(
            binding.kind.as_str(),
            binding.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("[filedrop] failed to remove {} listener: {:?}", binding.kind.as_str(), err);
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        let rect = self.get_bounding_client_rect();
        Bounds::from_rect(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

impl DragInput for DragEvent {
    type File = File;

    fn suppress_default(&self) {
        self.prevent_default();
        self.stop_propagation();
    }

    fn client_position(&self) -> (f64, f64) {
        (self.client_x() as f64, self.client_y() as f64)
    }

    fn files(&self) -> Vec<File> {
        self.data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| file_list_to_vec(&list))
            .unwrap_or_default()
    }
}

impl FileInfo for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        let blob: &Blob = self;
        blob.type_()
    }

    fn size(&self) -> u64 {
        let blob: &Blob = self;
        blob.size() as u64
    }
}

/// Copy a `FileList` into owned handles
pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

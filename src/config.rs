//! App Configuration
//!
//! Compile-time defaults for the pages.

use leptos_filedrop::FileValidation;

pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

pub const SAMPLE_ORIGINAL: &str = "function hello() {\n  console.log(\"Hello World\");\n}";
pub const SAMPLE_MODIFIED: &str =
    "function hello() {\n  console.log(\"Hello, World!\");\n  return \"Hello\";\n}";

/// Percent, 0-100
pub const DEFAULT_OVERLAY_OPACITY: u8 = 50;
/// Percent, 0-100
pub const DEFAULT_SLIDER_POSITION: u8 = 50;

/// One image per side
pub fn image_validation() -> FileValidation {
    FileValidation::default().accept(["image/*"]).max_count(1)
}

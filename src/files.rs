//! File Helpers
//!
//! Reading dropped files and managing image object URLs.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("failed to read \"{name}\": {message}")]
    Read { name: String, message: String },
    #[error("\"{name}\" is not a text file")]
    NotText { name: String },
    #[error("failed to create a preview for \"{name}\": {message}")]
    ObjectUrl { name: String, message: String },
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Read the whole file as UTF-8 text
pub async fn read_text(file: &File) -> Result<String, FileReadError> {
    let promise: js_sys::Promise = file.text();
    let value = JsFuture::from(promise).await.map_err(|e| FileReadError::Read {
        name: file.name(),
        message: js_message(&e),
    })?;
    value.as_string().ok_or_else(|| FileReadError::NotText { name: file.name() })
}

pub fn create_object_url(file: &File) -> Result<String, FileReadError> {
    Url::create_object_url_with_blob(file).map_err(|e| FileReadError::ObjectUrl {
        name: file.name(),
        message: js_message(&e),
    })
}

pub fn revoke_object_url(url: &str) {
    if let Err(err) = Url::revoke_object_url(url) {
        log::warn!("[files] failed to revoke {}: {}", url, js_message(&err));
    }
}

/// Pretty print `content` if it is JSON, otherwise return it unchanged
pub fn format_if_json(content: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| content.to_string()),
        Err(_) => content.to_string(),
    }
}

/// Editor contents after a paste, `None` when formatting changes nothing
pub fn reformat_pasted(content: &str) -> Option<String> {
    let formatted = format_if_json(content);
    (formatted != content).then_some(formatted)
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

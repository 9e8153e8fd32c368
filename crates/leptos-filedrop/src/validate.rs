//! File Validation
//!
//! Declarative accept/size/count checks applied to a batch of candidate files.
//! Failures are reported, never enforced: the caller decides what to do with
//! an invalid batch.

use serde::{Deserialize, Serialize};

use crate::surface::FileInfo;

/// Validation rules for a file selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileValidation {
    /// Accepted types, e.g. `["image/*", ".jpg", "application/json"]`
    #[serde(default)]
    pub accept: Option<Vec<String>>,
    /// Max file size in bytes
    #[serde(default)]
    pub max_size: Option<u64>,
    /// Min file size in bytes
    #[serde(default)]
    pub min_size: Option<u64>,
    /// Max file count
    #[serde(default = "default_max_count")]
    pub max_count: Option<usize>,
}

fn default_max_count() -> Option<usize> {
    Some(1)
}

impl Default for FileValidation {
    fn default() -> Self {
        Self {
            accept: None,
            max_size: None,
            min_size: None,
            max_count: default_max_count(),
        }
    }
}

impl FileValidation {
    pub fn accept<I, T>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.accept = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    pub fn max_count(mut self, count: usize) -> Self {
        self.max_count = Some(count);
        self
    }

    /// Remove the count limit
    pub fn unlimited(mut self) -> Self {
        self.max_count = None;
        self
    }
}

/// Outcome of [`validate_files`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size with base 1024, e.g. `1536 -> "1.5 KB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Does `file` match one accept pattern?
///
/// `.ext` matches the file name suffix (case-insensitive), a pattern with `*`
/// matches on the part before `/`, anything else is an exact MIME type.
pub fn matches_accept<F: FileInfo + ?Sized>(file: &F, pattern: &str) -> bool {
    if pattern.starts_with('.') {
        file.name().to_lowercase().ends_with(&pattern.to_lowercase())
    } else if pattern.contains('*') {
        let main_type = pattern.split('/').next().unwrap_or_default();
        file.mime_type().starts_with(main_type)
    } else {
        file.mime_type() == pattern
    }
}

/// Check `files` against `rules`.
///
/// Without rules everything is valid. Errors accumulate: the count check comes
/// first, then type and size checks for each file in order. Zero limits count
/// as unset.
pub fn validate_files<F: FileInfo>(files: &[F], rules: Option<&FileValidation>) -> ValidationResult {
    let Some(rules) = rules else {
        return ValidationResult::valid();
    };
    let mut errors = Vec::new();

    if let Some(max_count) = rules.max_count.filter(|&n| n > 0) {
        if files.len() > max_count {
            errors.push(format!("You can only select up to {} files", max_count));
        }
    }

    let accept = rules.accept.as_deref().filter(|patterns| !patterns.is_empty());
    let max_size = rules.max_size.filter(|&n| n > 0);
    let min_size = rules.min_size.filter(|&n| n > 0);

    for file in files {
        if let Some(patterns) = accept {
            if !patterns.iter().any(|p| matches_accept(file, p)) {
                errors.push(format!("File \"{}\" type not supported", file.name()));
            }
        }

        if let Some(max) = max_size {
            if file.size() > max {
                errors.push(format!(
                    "File \"{}\" size exceeds the limit ({})",
                    file.name(),
                    format_file_size(max)
                ));
            }
        }

        if let Some(min) = min_size {
            if file.size() < min {
                errors.push(format!(
                    "File \"{}\" size is less than the minimum limit ({})",
                    file.name(),
                    format_file_size(min)
                ));
            }
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FileMeta;

    fn png(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, "image/png", size)
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_no_rules_is_always_valid() {
        let files = vec![png("a.png", 10), FileMeta::new("b.exe", "", 1 << 40)];
        assert_eq!(validate_files(&files, None), ValidationResult::valid());
    }

    #[test]
    fn test_type_passes_size_fails() {
        let files = vec![png("a.png", 2048)];
        let rules = FileValidation::default().accept(["image/*"]).max_size(1024);
        let result = validate_files(&files, Some(&rules));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["File \"a.png\" size exceeds the limit (1 KB)".to_string()]);
    }

    #[test]
    fn test_count_violation_reported_once() {
        let files = vec![png("a.png", 1), png("b.png", 2), png("c.png", 3)];
        let rules = FileValidation::default().max_count(1);
        let result = validate_files(&files, Some(&rules));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["You can only select up to 1 files".to_string()]);
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let files = vec![
            FileMeta::new("notes.txt", "text/plain", 10),
            png("big.png", 4096),
        ];
        let rules = FileValidation::default().accept(["image/*"]).max_size(2048).min_size(20);
        let result = validate_files(&files, Some(&rules));
        assert_eq!(
            result.errors,
            vec![
                "You can only select up to 1 files".to_string(),
                "File \"notes.txt\" type not supported".to_string(),
                "File \"notes.txt\" size is less than the minimum limit (20 Bytes)".to_string(),
                "File \"big.png\" size exceeds the limit (2 KB)".to_string(),
            ]
        );
    }

    #[test]
    fn test_accept_pattern_kinds() {
        let jpg = FileMeta::new("Photo.JPG", "image/jpeg", 1);
        assert!(matches_accept(&jpg, ".jpg"));
        assert!(matches_accept(&jpg, "image/*"));
        assert!(matches_accept(&jpg, "image/jpeg"));
        assert!(!matches_accept(&jpg, "image/png"));
        assert!(!matches_accept(&jpg, ".png"));
        assert!(!matches_accept(&jpg, "video/*"));

        // unknown MIME type only passes extension patterns
        let raw = FileMeta::new("dump.bin", "", 1);
        assert!(matches_accept(&raw, ".BIN"));
        assert!(!matches_accept(&raw, "application/octet-stream"));
    }

    #[test]
    fn test_empty_accept_list_accepts_anything() {
        let files = vec![FileMeta::new("x.weird", "application/x-weird", 1)];
        let rules = FileValidation::default().accept(Vec::<String>::new());
        assert!(validate_files(&files, Some(&rules)).is_valid);
    }

    #[test]
    fn test_zero_limits_are_unset() {
        let files = vec![png("a.png", 10), png("b.png", 10)];
        let rules = FileValidation {
            accept: None,
            max_size: Some(0),
            min_size: Some(0),
            max_count: Some(0),
        };
        assert!(validate_files(&files, Some(&rules)).is_valid);
    }

    #[test]
    fn test_unlimited_lifts_default_count() {
        let files = vec![png("a.png", 10), png("b.png", 10), png("c.png", 10)];
        assert!(!validate_files(&files, Some(&FileValidation::default())).is_valid);

        let rules = FileValidation::default().accept(["image/*"]).unlimited();
        assert_eq!(rules.max_count, None);
        assert!(validate_files(&files, Some(&rules)).is_valid);
    }

    #[test]
    fn test_rules_from_json() {
        let rules: FileValidation =
            serde_json::from_str(r#"{"accept": [".json"], "maxSize": 1048576}"#).expect("parse rules");
        assert_eq!(rules.max_size, Some(1024 * 1024));
        assert_eq!(rules.max_count, Some(1));
        assert_eq!(rules.accept, Some(vec![".json".to_string()]));
    }
}

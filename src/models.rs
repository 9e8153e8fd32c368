//! Frontend Models
//!
//! Small value types shared by the pages.

/// Which side of a comparison a file belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiffSide {
    Original,
    Modified,
}

impl DiffSide {
    pub const ALL: [DiffSide; 2] = [DiffSide::Original, DiffSide::Modified];

    pub fn label(self) -> &'static str {
        match self {
            DiffSide::Original => "Original",
            DiffSide::Modified => "Modified",
        }
    }

    pub fn drop_hint(self) -> &'static str {
        match self {
            DiffSide::Original => "Drop to update original content",
            DiffSide::Modified => "Drop to update modified content",
        }
    }

    /// Accent used for this side's overlays
    pub fn accent(self) -> &'static str {
        match self {
            DiffSide::Original => "accent-blue",
            DiffSide::Modified => "accent-green",
        }
    }
}

/// Active page, switched from the header tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Text,
    Image,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Text, Page::Image];

    pub fn label(self) -> &'static str {
        match self {
            Page::Text => "Text",
            Page::Image => "Image",
        }
    }
}

/// Image comparison view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComparisonMode {
    #[default]
    SideBySide,
    Overlay,
    Slider,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 3] = [
        ComparisonMode::SideBySide,
        ComparisonMode::Overlay,
        ComparisonMode::Slider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonMode::SideBySide => "side-by-side",
            ComparisonMode::Overlay => "overlay",
            ComparisonMode::Slider => "slider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonMode::SideBySide => "Side by Side",
            ComparisonMode::Overlay => "Overlay",
            ComparisonMode::Slider => "Slider",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// Where a drag overlay covers its container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPosition {
    Left,
    Right,
    #[default]
    Full,
}

impl OverlayPosition {
    pub fn class(self) -> &'static str {
        match self {
            OverlayPosition::Left => "overlay-left",
            OverlayPosition::Right => "overlay-right",
            OverlayPosition::Full => "overlay-full",
        }
    }
}

/// A loaded image, `url` is an object URL owned by the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub name: String,
    pub size: u64,
    pub url: String,
    /// Natural `(width, height)`, known once the preview has loaded
    pub dimensions: Option<(u32, u32)>,
}

impl ImageInfo {
    pub fn dimensions_label(&self) -> Option<String> {
        self.dimensions.map(|(w, h)| format!("{}×{}", w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_mode_parse() {
        for mode in ComparisonMode::ALL {
            assert_eq!(ComparisonMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ComparisonMode::parse("difference"), None);
    }

    #[test]
    fn test_image_dimensions_label() {
        let mut image = ImageInfo {
            name: "a.png".to_string(),
            size: 10,
            url: "blob:a".to_string(),
            dimensions: None,
        };
        assert_eq!(image.dimensions_label(), None);
        image.dimensions = Some((800, 600));
        assert_eq!(image.dimensions_label().as_deref(), Some("800×600"));
    }
}

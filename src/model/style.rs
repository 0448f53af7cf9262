use serde::{Deserialize, Serialize};

/// Suffix appended to a style id to form its image reference.
pub const IMAGE_SUFFIX: &str = "Image";

/// Identifies a shirt style.
///
/// The catalog is seeded with a fixed set of these at startup and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub name: String,
    pub image_url: String,
}

impl StyleDescriptor {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Builds the descriptor for a raw style id: the id is the name, and the image
    /// reference is the id followed by [`IMAGE_SUFFIX`].
    pub fn from_style_id(id: &str) -> Self {
        Self::new(id, format!("{id}{IMAGE_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_style_id_derives_image() {
        let style = StyleDescriptor::from_style_id("style1");
        assert_eq!(style.name, "style1");
        assert_eq!(style.image_url, "style1Image");
    }

    #[test]
    fn test_empty_id_keeps_suffix() {
        assert_eq!(StyleDescriptor::from_style_id("").image_url, "Image");
    }
}

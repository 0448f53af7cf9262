use crate::model::StyleDescriptor;

/// Names of the styles every catalog starts with.
pub const SEED_STYLES: &[&str] = &["style1", "style2"];

/// Read-only list of known styles, built once at startup.
///
/// Never mutated after construction, so it is shared between requests without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    styles: Vec<StyleDescriptor>,
}

impl Catalog {
    pub fn new(styles: Vec<StyleDescriptor>) -> Self {
        Self { styles }
    }

    /// The fixed seed set: `style1`/`style1Image`, `style2`/`style2Image`.
    pub fn seeded() -> Self {
        Self::new(
            SEED_STYLES
                .iter()
                .map(|id| StyleDescriptor::from_style_id(id))
                .collect(),
        )
    }

    pub fn styles(&self) -> &[StyleDescriptor] {
        &self.styles
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_has_two_styles_in_order() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.styles(),
            &[
                StyleDescriptor::new("style1", "style1Image"),
                StyleDescriptor::new("style2", "style2Image"),
            ]
        );
    }
}

use super::StyleDescriptor;
use serde::{Deserialize, Serialize};

/// A single produced shirt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shirt {
    pub style: StyleDescriptor,
}

impl Shirt {
    pub fn new(style: StyleDescriptor) -> Self {
        Self { style }
    }
}

/// The result of a "make shirts" request, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackedShirts {
    pub shirts: Vec<Shirt>,
}

impl PackedShirts {
    /// `quantity` shirts, all of `style`.
    pub fn uniform(style: &StyleDescriptor, quantity: u32) -> Self {
        let shirts = (0..quantity).map(|_| Shirt::new(style.clone())).collect();
        Self { shirts }
    }

    pub fn len(&self) -> usize {
        self.shirts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty()
    }
}

//! Actions accepted by the Printing actor.

use super::stream::ShirtStream;
use crate::framework::NamedOperation;
use crate::model::{Color, StyleDescriptor};

/// Payload of a print request.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintRequest {
    pub style: StyleDescriptor,
    pub quantity: u32,
}

/// Operations the printing service supports.
#[derive(Debug, Clone)]
pub enum PrintingAction {
    /// Lists the registered print colors.
    ListColors,
    /// Registers a color. Registering a known color is a no-op.
    AddColor(Color),
    /// Refills ink for a registered color.
    ///
    /// # Errors
    /// Fails if the color was never registered.
    RestockColor(Color),
    /// Starts printing and replies with a stream of the shirts as they are produced.
    PrintShirts(PrintRequest),
}

impl NamedOperation for PrintingAction {
    fn operation(&self) -> &'static str {
        match self {
            PrintingAction::ListColors => "list_colors",
            PrintingAction::AddColor(_) => "add_color",
            PrintingAction::RestockColor(_) => "restock_color",
            PrintingAction::PrintShirts(_) => "print_shirts",
        }
    }
}

/// Results from PrintingActions - variants match 1:1 with PrintingAction
#[derive(Debug)]
pub enum PrintingActionResult {
    Colors(Vec<Color>),
    ColorAdded,
    ColorRestocked,
    Shirts(ShirtStream),
}

//! Color variant selection.

use serde::{Deserialize, Serialize};

/// A color option selected on a product variant.
///
/// The `name` participates in cart line identity; `hex` is display-only
/// (swatch rendering) and never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChoice {
    /// Human-readable color name (e.g., "Clay", "Midnight").
    pub name: String,
    /// Hex color for swatch display (e.g., "#b45309").
    pub hex: String,
}

impl ColorChoice {
    /// Create a new color choice.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

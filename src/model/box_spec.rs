//! Box specification entered by the user.

use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// An open-top box described by its outer dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Display name; generated when left blank in a job file.
    #[serde(default)]
    pub name: String,
    /// Outer width.
    pub width: f64,
    /// Outer depth.
    pub depth: f64,
    /// Outer height.
    pub height: f64,
    /// Number of identical boxes.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl BoxSpec {
    /// Create a box with quantity 1.
    pub fn new(name: impl Into<String>, width: f64, depth: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            depth,
            height,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

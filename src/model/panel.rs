//! Panel definitions produced by the calculator and consumed by the packer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A rectangular panel needed `quantity` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelType {
    /// Name of the box this panel belongs to.
    pub box_name: String,
    /// Role within the box ("Long", "Short" or "Base").
    pub label: String,
    /// Nominal width.
    pub width: f64,
    /// Nominal height.
    pub height: f64,
    /// Number of identical copies.
    pub quantity: u32,
}

impl PanelType {
    /// Create a new panel type.
    pub fn new(
        box_name: impl Into<String>,
        label: impl Into<String>,
        width: f64,
        height: f64,
        quantity: u32,
    ) -> Self {
        Self {
            box_name: box_name.into(),
            label: label.into(),
            width,
            height,
            quantity,
        }
    }

    /// Nominal area of a single copy.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Label used in drawings: `"{box}.{label}"`.
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.box_name, self.label)
    }
}

/// One physical copy of a [`PanelType`], in placement order.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelInstance {
    pub panel: Arc<PanelType>,
    /// Zero-based copy index, for labeling only.
    pub instance_index: u32,
    pub width: f64,
    pub height: f64,
}

impl PanelInstance {
    pub fn new(panel: Arc<PanelType>, instance_index: u32) -> Self {
        let (width, height) = (panel.width, panel.height);
        Self {
            panel,
            instance_index,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Dimensions after an optional quarter turn.
    #[inline]
    pub fn oriented(&self, rotated: bool) -> (f64, f64) {
        if rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

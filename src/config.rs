//! Configuration constants and sheet settings.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default sheet width in mm.
pub const DEFAULT_SHEET_WIDTH: f64 = 700.0;

/// Default sheet height in mm.
pub const DEFAULT_SHEET_HEIGHT: f64 = 500.0;

/// Default edge margin in mm, applied on all four sides.
pub const DEFAULT_MARGIN: f64 = 5.0;

/// Default kerf (saw blade clearance) in mm.
pub const DEFAULT_KERF: f64 = 1.0;

/// Default material thickness in mm.
pub const DEFAULT_THICKNESS: f64 = 5.0;

/// Stock sheet and cutting parameters.
///
/// All lengths are millimetres. Values are not checked here; run
/// [`crate::validation::validate_config`] before packing untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
    /// Edge margin kept free on every side.
    pub margin: f64,
    /// Clearance left between adjacent panels.
    pub kerf: f64,
    /// Material thickness, used by the panel calculator.
    pub thickness: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH,
            height: DEFAULT_SHEET_HEIGHT,
            margin: DEFAULT_MARGIN,
            kerf: DEFAULT_KERF,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl SheetConfig {
    /// Create a sheet configuration with default margin, kerf and thickness.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Usable area left after removing the margin on each side.
    pub fn usable_area(&self) -> UsableArea {
        usable_area(self)
    }
}

/// Width and height of the region panels may be cut from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsableArea {
    pub width: f64,
    pub height: f64,
}

impl UsableArea {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when either side is zero or negative, so nothing can be placed.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether a `width x height` rectangle fits without rotation.
    #[inline]
    pub fn admits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }
}

/// Sheet dimensions minus twice the margin on each axis.
///
/// No validation is performed; a margin of half a dimension or more yields
/// a zero or negative side.
pub fn usable_area(config: &SheetConfig) -> UsableArea {
    UsableArea {
        width: config.width - 2.0 * config.margin,
        height: config.height - 2.0 * config.margin,
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

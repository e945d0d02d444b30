//! Packed sheets and the placements on them.

use super::panel::PanelType;
use crate::config::SheetConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A panel copy positioned on a sheet.
///
/// `x` and `y` are measured from the top-left corner of the usable area;
/// add the sheet margin to get absolute sheet coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub panel: Arc<PanelType>,
    pub instance_index: u32,
    pub x: f64,
    pub y: f64,
    /// Width and height are swapped relative to the panel type.
    pub rotated: bool,
}

impl Placement {
    /// Width of the footprint on the sheet.
    pub fn width(&self) -> f64 {
        if self.rotated {
            self.panel.height
        } else {
            self.panel.width
        }
    }

    /// Height of the footprint on the sheet.
    pub fn height(&self) -> f64 {
        if self.rotated {
            self.panel.width
        } else {
            self.panel.height
        }
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width()
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height()
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check whether two footprints share interior area.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let x_overlap = self.x < other.x_max() && other.x < self.x_max();
        let y_overlap = self.y < other.y_max() && other.y < self.y_max();
        x_overlap && y_overlap
    }
}

/// A stock sheet with the panels cut from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// 1-based id in creation order.
    pub id: usize,
    pub placements: Vec<Placement>,
    /// Percentage of the usable area covered by panels (0-100).
    pub utilization: u32,
}

/// A panel copy that can never fit on a sheet of the configured size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unplaceable {
    pub panel: Arc<PanelType>,
    pub instance_index: u32,
    pub reason: String,
}

/// Outcome of one packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    pub sheets: Vec<Sheet>,
    pub unplaceable: Vec<Unplaceable>,
    pub config: SheetConfig,
}

impl PackingResult {
    /// Number of placements across every sheet.
    pub fn placement_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// Iterate over all placements with the id of their sheet.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.sheets
            .iter()
            .flat_map(|s| s.placements.iter().map(move |p| (s.id, p)))
    }

    pub fn is_complete(&self) -> bool {
        self.unplaceable.is_empty()
    }
}

//! Panel calculation for open-top boxes.
//!
//! For a box of outer size W x D x H built from material of thickness T:
//! - front and back (2x): W x H
//! - sides (2x): (D - 2T) x H, slotted between front and back
//! - base (1x): (W - 2T) x (D - 2T), inside all four walls
//!
//! The wider wall pair is labelled "Long" and listed first.

use crate::model::{BoxSpec, PanelType};

pub const LABEL_LONG: &str = "Long";
pub const LABEL_SHORT: &str = "Short";
pub const LABEL_BASE: &str = "Base";

/// Calculate the panel types needed for `boxes`, three per box in input
/// order. Quantities are multiplied by the box quantity.
pub fn calculate_panels(boxes: &[BoxSpec], thickness: f64) -> Vec<PanelType> {
    let mut panels = Vec::with_capacity(boxes.len() * 3);

    for spec in boxes {
        let side_width = spec.depth - 2.0 * thickness;
        let front = (spec.width, spec.height);
        let side = (side_width, spec.height);

        let (long, short) = if side_width > spec.width {
            (side, front)
        } else {
            (front, side)
        };

        panels.push(PanelType::new(
            &spec.name,
            LABEL_LONG,
            long.0,
            long.1,
            2 * spec.quantity,
        ));
        panels.push(PanelType::new(
            &spec.name,
            LABEL_SHORT,
            short.0,
            short.1,
            2 * spec.quantity,
        ));
        panels.push(PanelType::new(
            &spec.name,
            LABEL_BASE,
            spec.width - 2.0 * thickness,
            side_width,
            spec.quantity,
        ));
    }

    panels
}

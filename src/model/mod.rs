//! Data model for boxes, panels and packed sheets.

mod box_spec;
mod panel;
mod sheet;

pub use box_spec::BoxSpec;
pub use panel::{PanelInstance, PanelType};
pub use sheet::{PackingResult, Placement, Sheet, Unplaceable};

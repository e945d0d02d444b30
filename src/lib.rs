//! boxcut-rs - Box panel calculation and sheet packing.
//!
//! Boxes are turned into flat panels (two long walls, two short walls and
//! a base), and the panels are packed onto as few stock sheets as a
//! guillotine best-area-fit heuristic manages, honouring an edge margin
//! and a kerf between neighbouring panels.
//!
//! # Example
//!
//! ```
//! use boxcut_rs::{calculate_panels, pack_panels, BoxSpec, SheetConfig};
//!
//! let config = SheetConfig::default();
//! let boxes = [BoxSpec::new("Tray", 200.0, 150.0, 60.0)];
//! let panels = calculate_panels(&boxes, config.thickness);
//! let result = pack_panels(&panels, &config);
//! assert_eq!(result.sheets.len(), 1);
//! assert!(result.unplaceable.is_empty());
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod packer;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use calculator::calculate_panels;
pub use config::{usable_area, SheetConfig, UsableArea};
pub use error::{BoxcutError, ErrorCode, Result};
pub use generator::{generate_all_sheets_svg, generate_sheet_svg};
pub use model::{BoxSpec, PackingResult, PanelInstance, PanelType, Placement, Sheet, Unplaceable};
pub use naming::generate_box_name;
pub use packer::pack_panels;
pub use parser::{parse_job_file, parse_job_str, Job};
pub use validation::{quick_validate, validate_job, ValidationResult};

use serde::Serialize;

/// Panels calculated for a job and how they were packed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub panels: Vec<PanelType>,
    pub packing: PackingResult,
}

/// Plan a job: validate it, calculate the panels and pack them.
///
/// Validation warnings are logged; validation errors abort with
/// [`BoxcutError::Validation`].
pub fn plan_job(job: &Job) -> Result<Plan> {
    quick_validate(job)?;

    let panels = calculate_panels(&job.boxes, job.sheet.thickness);
    let packing = pack_panels(&panels, &job.sheet);

    tracing::info!(
        "Packed {} panel(s) from {} box(es) onto {} sheet(s)",
        packing.placement_count(),
        job.boxes.len(),
        packing.sheets.len()
    );
    for entry in &packing.unplaceable {
        tracing::warn!("{}", entry.reason);
    }

    Ok(Plan { panels, packing })
}

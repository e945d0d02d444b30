//! Validation of jobs before packing and of packed layouts afterwards.

use crate::config::{float_cmp, SheetConfig, UsableArea};
use crate::error::{BoxcutError, Result};
use crate::model::{BoxSpec, Sheet};
use crate::parser::Job;
use tracing::warn;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate sheet settings.
pub fn validate_config(config: &SheetConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    // NaN fails every comparison, so test for the valid range.
    if !(config.width > 0.0 && config.height > 0.0) {
        result.add_error(format!(
            "Invalid sheet dimensions ({}x{})",
            config.width, config.height
        ));
    }
    if !(config.margin >= 0.0) {
        result.add_error(format!("Negative margin ({})", config.margin));
    }
    if !(config.kerf >= 0.0) {
        result.add_error(format!("Negative kerf ({})", config.kerf));
    }
    if !(config.thickness > 0.0) {
        result.add_error(format!(
            "Invalid material thickness ({})",
            config.thickness
        ));
    }

    if result.passed {
        let usable = config.usable_area();
        if usable.is_degenerate() {
            result.add_error(format!(
                "Margin {} leaves no usable area on a {}x{} sheet",
                config.margin, config.width, config.height
            ));
        } else if config.kerf >= usable.width.min(usable.height) {
            result.add_warning(format!(
                "Kerf {} is not smaller than the usable area ({}x{})",
                config.kerf, usable.width, usable.height
            ));
        }
    }

    result
}

/// Validate box specifications against the material thickness.
pub fn validate_boxes(boxes: &[BoxSpec], thickness: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, spec) in boxes.iter().enumerate() {
        let label = if spec.name.is_empty() {
            format!("Box {}", idx + 1)
        } else {
            spec.name.clone()
        };

        if !(spec.width > 0.0 && spec.depth > 0.0 && spec.height > 0.0) {
            result.add_error(format!(
                "{}: Invalid dimensions ({}x{}x{})",
                label, spec.width, spec.depth, spec.height
            ));
            continue;
        }

        if spec.quantity == 0 {
            result.add_error(format!("{}: Quantity must be at least 1", label));
        }

        let walls = 2.0 * thickness;
        if spec.width <= walls || spec.depth <= walls {
            result.add_error(format!(
                "{}: Walls of {}mm leave no room inside {}x{}",
                label, thickness, spec.width, spec.depth
            ));
        }
    }

    result
}

/// Validate a complete job.
pub fn validate_job(job: &Job) -> Result<ValidationResult> {
    if job.boxes.is_empty() {
        return Err(BoxcutError::NoBoxes);
    }

    let mut result = validate_config(&job.sheet);
    result.merge(validate_boxes(&job.boxes, job.sheet.thickness));
    Ok(result)
}

/// Validate a job, logging warnings, and fail with
/// [`BoxcutError::Validation`] when it has errors.
pub fn quick_validate(job: &Job) -> Result<ValidationResult> {
    let result = validate_job(job)?;

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    if !result.passed {
        return Err(BoxcutError::Validation {
            message: result.errors.join("; "),
        });
    }

    Ok(result)
}

/// Pairs of placements on `sheet` whose footprints overlap.
pub fn find_overlaps(sheet: &Sheet) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..sheet.placements.len() {
        for j in i + 1..sheet.placements.len() {
            if sheet.placements[i].overlaps(&sheet.placements[j]) {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}

/// Indices of placements on `sheet` that leave the usable area.
pub fn out_of_bounds(sheet: &Sheet, usable: UsableArea) -> Vec<usize> {
    sheet
        .placements
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            !(float_cmp::in_range(p.x, 0.0, usable.width)
                && float_cmp::in_range(p.y, 0.0, usable.height)
                && float_cmp::in_range(p.x_max(), 0.0, usable.width)
                && float_cmp::in_range(p.y_max(), 0.0, usable.height))
        })
        .map(|(idx, _)| idx)
        .collect()
}

//! Validation module.

mod validate;

pub use validate::{
    find_overlaps, out_of_bounds, quick_validate, validate_boxes, validate_config, validate_job,
    ValidationResult,
};

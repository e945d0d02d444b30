//! JSON job file parser.

use crate::config::SheetConfig;
use crate::error::{BoxcutError, Result};
use crate::model::BoxSpec;
use crate::naming::generate_box_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A packing job: the boxes to build and the sheets to cut them from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,
}

impl Job {
    pub fn new(sheet: SheetConfig, boxes: Vec<BoxSpec>) -> Self {
        let mut job = Self { sheet, boxes };
        job.assign_missing_names();
        job
    }

    /// Give every unnamed box a generated name based on its position.
    fn assign_missing_names(&mut self) {
        for (index, spec) in self.boxes.iter_mut().enumerate() {
            if spec.name.trim().is_empty() {
                spec.name = generate_box_name(index);
            }
        }
    }
}

/// Parse a job from JSON text.
pub fn parse_job_str(content: &str) -> Result<Job> {
    let Job { sheet, boxes } = serde_json::from_str(content)?;
    Ok(Job::new(sheet, boxes))
}

/// Parse a job file from a path.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(BoxcutError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(BoxcutError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job_str(&content)
}

//! End-to-end tests: job file to panels, packing and drawings.

use boxcut_rs::error::ErrorCode;
use boxcut_rs::{
    generate_all_sheets_svg, generate_sheet_svg, parse_job_file, parse_job_str, plan_job,
    BoxcutError,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn job_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_plan_from_file() {
    let file = job_file(
        r#"{
            "sheet": {"width": 700, "height": 500, "margin": 5, "kerf": 1, "thickness": 5},
            "boxes": [
                {"name": "Tray", "width": 200, "depth": 150, "height": 60},
                {"width": 100, "depth": 80, "height": 50, "quantity": 2}
            ]
        }"#,
    );

    let job = parse_job_file(file.path()).unwrap();
    assert_eq!(job.boxes[1].name, "Box B");

    let plan = plan_job(&job).unwrap();
    // Three panel types per box.
    assert_eq!(plan.panels.len(), 6);

    let requested: u32 = plan.panels.iter().map(|p| p.quantity).sum();
    // 5 for the tray, 2 * 5 for the second box.
    assert_eq!(requested, 15);
    assert_eq!(plan.packing.placement_count(), 15);
    assert!(plan.packing.is_complete());
    assert_eq!(plan.packing.sheets.len(), 1);
}

#[test]
fn test_plan_reports_oversized_panels() {
    let job = parse_job_str(
        r#"{
            "sheet": {"width": 300, "height": 300},
            "boxes": [
                {"name": "Small", "width": 100, "depth": 80, "height": 50},
                {"name": "Big", "width": 400, "depth": 100, "height": 50}
            ]
        }"#,
    )
    .unwrap();

    let plan = plan_job(&job).unwrap();
    assert!(!plan.packing.is_complete());
    // Big's two long walls and its base are wider than the sheet.
    assert_eq!(plan.packing.unplaceable.len(), 3);
    assert!(plan
        .packing
        .unplaceable
        .iter()
        .all(|u| u.panel.box_name == "Big"));
    assert!(plan.packing.placement_count() >= 5);
}

#[test]
fn test_plan_rejects_invalid_job() {
    let job = parse_job_str(
        r#"{
            "sheet": {"kerf": -1},
            "boxes": [{"name": "Tray", "width": 200, "depth": 150, "height": 60}]
        }"#,
    )
    .unwrap();

    let err = plan_job(&job).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert!(err.to_string().contains("Negative kerf"));
}

#[test]
fn test_plan_without_boxes() {
    let job = parse_job_str(r#"{"boxes": []}"#).unwrap();
    let err = plan_job(&job).unwrap_err();
    assert!(matches!(err, BoxcutError::NoBoxes));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_job_file(&dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FileNotFound);
}

#[test]
fn test_malformed_file() {
    let file = job_file("{ \"boxes\": [ ");
    let err = parse_job_file(file.path()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParseError);
}

#[test]
fn test_one_drawing_per_sheet() {
    let job = parse_job_str(
        r#"{"boxes": [{"name": "Crate", "width": 400, "depth": 350, "height": 300, "quantity": 2}]}"#,
    )
    .unwrap();
    let plan = plan_job(&job).unwrap();

    let drawings = generate_all_sheets_svg(&plan.packing);
    assert!(plan.packing.sheets.len() > 1);
    assert_eq!(drawings.len(), plan.packing.sheets.len());
    for svg in &drawings {
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Crate."));
    }

    assert_eq!(
        generate_sheet_svg(&plan.packing, 0).as_deref(),
        Some(drawings[0].as_str())
    );
    assert!(generate_sheet_svg(&plan.packing, drawings.len()).is_none());
}

#[test]
fn test_drawing_escapes_box_names() {
    let job = parse_job_str(
        r#"{"boxes": [{"name": "A&B", "width": 300, "depth": 200, "height": 100}]}"#,
    )
    .unwrap();
    let plan = plan_job(&job).unwrap();

    let svg = generate_sheet_svg(&plan.packing, 0).unwrap();
    assert!(svg.contains("A&amp;B.Long (1)"));
    assert!(!svg.contains("A&B."));
}

#[test]
fn test_plan_serializes_to_json() {
    let job = parse_job_str(
        r#"{"boxes": [{"name": "Tray", "width": 200, "depth": 150, "height": 60}]}"#,
    )
    .unwrap();
    let plan = plan_job(&job).unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["panels"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["packing"]["sheets"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["packing"]["sheets"][0]["id"], 1);
    assert_eq!(value["packing"]["config"]["width"], 700.0);
}

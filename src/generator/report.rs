//! Plain-text cut list and packing summary.

use crate::model::{PackingResult, PanelType};
use std::fmt::Write;

use super::svg::format_length;

/// Cut list grouped by box, boxes in first-seen order.
pub fn render_panel_list(panels: &[PanelType], thickness: f64) -> String {
    let mut output = String::new();
    writeln!(output, "Material thickness: {}mm", format_length(thickness)).unwrap();

    let mut groups: Vec<(&str, Vec<&PanelType>)> = Vec::new();
    for panel in panels {
        match groups.iter_mut().find(|(name, _)| *name == panel.box_name) {
            Some((_, group)) => group.push(panel),
            None => groups.push((&panel.box_name, vec![panel])),
        }
    }

    for (box_name, group) in groups {
        writeln!(output).unwrap();
        writeln!(output, "{}", box_name).unwrap();
        writeln!(output, "  {:<12} {:<16} {:>4}", "Panel", "Size (mm)", "Qty").unwrap();
        for panel in group {
            let size = format!(
                "{} × {}",
                format_length(panel.width),
                format_length(panel.height)
            );
            writeln!(
                output,
                "  {:<12} {:<16} {:>4}",
                panel.label, size, panel.quantity
            )
            .unwrap();
        }
    }

    output
}

/// One line per sheet plus the reasons for any unplaceable panel.
pub fn render_packing_summary(result: &PackingResult) -> String {
    let mut output = String::new();
    let usable = result.config.usable_area();

    writeln!(
        output,
        "Sheets: {} ({}×{}mm, usable {}×{}mm, margin {}mm, kerf {}mm)",
        result.sheets.len(),
        format_length(result.config.width),
        format_length(result.config.height),
        format_length(usable.width),
        format_length(usable.height),
        format_length(result.config.margin),
        format_length(result.config.kerf)
    )
    .unwrap();

    for sheet in &result.sheets {
        writeln!(
            output,
            "  Sheet {}: {} panel(s), {}% used",
            sheet.id,
            sheet.placements.len(),
            sheet.utilization
        )
        .unwrap();
    }

    if !result.unplaceable.is_empty() {
        writeln!(output, "Unplaceable: {}", result.unplaceable.len()).unwrap();
        for entry in &result.unplaceable {
            writeln!(
                output,
                "  {} #{}: {}",
                entry.panel.box_name,
                entry.instance_index + 1,
                entry.reason
            )
            .unwrap();
        }
    }

    output
}

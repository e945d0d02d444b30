//! SVG drawings of packed sheets.
//!
//! Each drawing shows the sheet outline, the usable area as a dashed
//! rectangle and every placed panel as a hatched rectangle with its label
//! and nominal size. Panels of the same box and label share a hatch style.

use crate::model::{PackingResult, Placement};
use std::collections::HashMap;
use std::fmt::Write;

use super::text::wrap_text;

/// Outline colours, cycled per distinct panel.
const PANEL_COLORS: [&str; 8] = [
    "#2563eb", // blue
    "#16a34a", // green
    "#dc2626", // red
    "#9333ea", // purple
    "#ea580c", // orange
    "#0891b2", // cyan
    "#c026d3", // fuchsia
    "#854d0e", // amber
];

/// Hatch angles in degrees, cycled alongside the colours.
const HATCH_ANGLES: [i32; 8] = [45, -45, 0, 90, 30, -30, 60, -60];

const HATCH_SPACING: f64 = 10.0;
const LABEL_PADDING: f64 = 6.0;

/// Colour and hatch angle for a panel style index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub color: &'static str,
    pub angle: i32,
}

impl PanelStyle {
    pub fn for_index(index: usize) -> Self {
        Self {
            color: PANEL_COLORS[index % PANEL_COLORS.len()],
            angle: HATCH_ANGLES[index % HATCH_ANGLES.len()],
        }
    }
}

/// Style index per (box name, label), numbered in first-seen order across
/// all sheets so a panel looks the same on every drawing.
fn style_indices(result: &PackingResult) -> HashMap<(String, String), usize> {
    let mut map = HashMap::new();
    for (_, placement) in result.placements() {
        let key = (
            placement.panel.box_name.clone(),
            placement.panel.label.clone(),
        );
        let next = map.len();
        map.entry(key).or_insert(next);
    }
    map
}

/// Ordered style indices, for emitting pattern definitions.
fn ordered_styles(map: &HashMap<(String, String), usize>) -> Vec<usize> {
    let mut indices: Vec<usize> = map.values().copied().collect();
    indices.sort_unstable();
    indices
}

/// Format a length for SVG attributes: at most three decimals, no trailing
/// zeros.
pub fn format_length(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escape text for use inside SVG elements and attributes.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Label shown on a placed panel, numbered when the panel has copies.
pub fn placement_label(placement: &Placement) -> String {
    let base = placement.panel.display_name();
    if placement.panel.quantity > 1 {
        format!("{} ({})", base, placement.instance_index + 1)
    } else {
        base
    }
}

fn render_placement(output: &mut String, placement: &Placement, margin: f64, style_index: usize) {
    let style = PanelStyle::for_index(style_index);
    let w = placement.width();
    let h = placement.height();
    let px = margin + placement.x;
    let py = margin + placement.y;
    let cx = px + w / 2.0;

    let font_size = (w.min(h) * 0.12).clamp(7.0, 11.0);
    let dim_font_size = (font_size * 0.85).max(6.0);
    let line_height = font_size * 1.2;

    let max_chars = ((w - LABEL_PADDING * 2.0) / (font_size * 0.55)).floor();
    let max_chars = if max_chars > 0.0 { max_chars as usize } else { 0 };
    let lines = wrap_text(&placement_label(placement), max_chars);

    let max_lines = ((h - LABEL_PADDING * 2.0 - dim_font_size) / line_height).floor();
    let max_lines = if max_lines > 1.0 { max_lines as usize } else { 1 };
    let mut display: Vec<String> = lines.iter().take(max_lines).cloned().collect();
    if display.len() < lines.len() {
        if let Some(last) = display.last_mut() {
            last.pop();
            last.push('…');
        }
    }

    let total_text_height = display.len() as f64 * line_height + dim_font_size;
    let text_y = py + (h - total_text_height) / 2.0 + font_size * 0.8;
    let dim_y = text_y + display.len() as f64 * line_height;

    writeln!(output, "  <g>").unwrap();
    writeln!(
        output,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="white" />"#,
        format_length(px),
        format_length(py),
        format_length(w),
        format_length(h)
    )
    .unwrap();
    writeln!(
        output,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="url(#hatch-{})" stroke="{}" stroke-width="1.5" />"#,
        format_length(px),
        format_length(py),
        format_length(w),
        format_length(h),
        style_index,
        style.color
    )
    .unwrap();

    write!(
        output,
        r##"    <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="#1a1a1a" font-family="ui-monospace, monospace">"##,
        format_length(cx),
        format_length(text_y),
        format_length(font_size)
    )
    .unwrap();
    for (i, line) in display.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { line_height };
        write!(
            output,
            r#"<tspan x="{}" dy="{}">{}</tspan>"#,
            format_length(cx),
            format_length(dy),
            escape_xml(line)
        )
        .unwrap();
    }
    writeln!(output, "</text>").unwrap();

    writeln!(
        output,
        r##"    <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="#4a4a4a" font-family="ui-monospace, monospace">{}×{}</text>"##,
        format_length(cx),
        format_length(dim_y),
        format_length(dim_font_size),
        format_length(placement.panel.width),
        format_length(placement.panel.height)
    )
    .unwrap();
    writeln!(output, "  </g>").unwrap();
}

/// Draw the sheet at `index` in `result.sheets`, or `None` if out of range.
pub fn generate_sheet_svg(result: &PackingResult, index: usize) -> Option<String> {
    let sheet = result.sheets.get(index)?;
    let styles = style_indices(result);
    Some(render_sheet(result, &sheet.placements, &styles))
}

/// Draw every sheet of `result`, in sheet order.
pub fn generate_all_sheets_svg(result: &PackingResult) -> Vec<String> {
    let styles = style_indices(result);
    result
        .sheets
        .iter()
        .map(|sheet| render_sheet(result, &sheet.placements, &styles))
        .collect()
}

fn render_sheet(
    result: &PackingResult,
    placements: &[Placement],
    styles: &HashMap<(String, String), usize>,
) -> String {
    let config = &result.config;
    let width = format_length(config.width);
    let height = format_length(config.height);
    let mut output = String::new();

    writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )
    .unwrap();

    writeln!(output, "  <defs>").unwrap();
    for style_index in ordered_styles(styles) {
        let style = PanelStyle::for_index(style_index);
        writeln!(
            output,
            r#"    <pattern id="hatch-{idx}" patternUnits="userSpaceOnUse" width="{s}" height="{s}" patternTransform="rotate({angle})">"#,
            idx = style_index,
            s = format_length(HATCH_SPACING),
            angle = style.angle
        )
        .unwrap();
        writeln!(
            output,
            r#"      <line x1="0" y1="0" x2="0" y2="{}" stroke="{}" stroke-width="0.5" stroke-opacity="0.3" />"#,
            format_length(HATCH_SPACING),
            style.color
        )
        .unwrap();
        writeln!(output, "    </pattern>").unwrap();
    }
    writeln!(output, "  </defs>").unwrap();

    writeln!(
        output,
        r##"  <rect x="0" y="0" width="{}" height="{}" fill="none" stroke="#1a1a1a" stroke-width="2" />"##,
        width, height
    )
    .unwrap();

    let usable = config.usable_area();
    writeln!(
        output,
        r##"  <rect x="{m}" y="{m}" width="{}" height="{}" fill="none" stroke="#1a1a1a" stroke-width="0.5" stroke-dasharray="4 2" />"##,
        format_length(usable.width),
        format_length(usable.height),
        m = format_length(config.margin)
    )
    .unwrap();

    for placement in placements {
        let key = (
            placement.panel.box_name.clone(),
            placement.panel.label.clone(),
        );
        let style_index = styles.get(&key).copied().unwrap_or(0);
        render_placement(&mut output, placement, config.margin, style_index);
    }

    writeln!(output, "</svg>").unwrap();
    output
}

//! Output generators for packing results.

mod report;
mod svg;
mod text;

pub use report::{render_packing_summary, render_panel_list};
pub use svg::{
    escape_xml, format_length, generate_all_sheets_svg, generate_sheet_svg, placement_label,
    PanelStyle,
};
pub use text::wrap_text;

//! Master cut-list rendering.

use std::fmt::Write;

use ductkit_core::ProjectData;

/// Column header row of the cut list.
pub const CUT_LIST_HEADER: &str = "Part Name,Type,Width (mm),Height/Length (mm),Qty,Material,Notes";

/// Render the master cut list: one CSV row per part, in part-list order.
pub fn render_cut_list(project: &ProjectData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", CUT_LIST_HEADER);
    for part in &project.parts {
        let _ = writeln!(
            out,
            "{},{},{:.1},{:.1},{},{},{}",
            part.name,
            part.category.name(),
            part.width,
            part.height,
            part.quantity,
            part.material,
            part.notes.replace(',', ";"),
        );
    }
    out
}

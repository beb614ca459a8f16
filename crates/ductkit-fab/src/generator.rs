//! Fabrication file orchestrator.
//!
//! Drives the geometry engine and dimensioning layer per part and packages
//! the results: the master cut list first, then one drawing per panel in
//! part-list order, then one drawing per profile.

use ductkit_core::{
    FileKind, GeneratedFile, Hole, HoleShape, PartCategory, PartGeometry, Point, ProjectData,
};
use ductkit_dxf::{
    DxfWriter, COLOR_RED, COLOR_WHITE, COLOR_YELLOW, LAYER_BEND, LAYER_CUT_INNER, LAYER_CUT_OUTER,
    LAYER_TEXT,
};
use tracing::{debug, info};

use crate::cutlist::render_cut_list;
use crate::error::{FabError, FabResult};
use crate::flatten::{flatten_segments, SHEET_GAUGE};
use crate::profile::section_from_name;
use crate::tray::{tray_layout, RIVET_HOLE_DIAMETER};

/// Perpendicular offset of the overall dimensions from the part edges.
const DIM_OFFSET: f64 = 15.0;
/// Stacking step for the cumulative bend dimensions on profile strips.
const DIM_STACK_STEP: f64 = 8.0;
/// Height of the part label text.
const LABEL_HEIGHT: f64 = 5.0;

/// Generate all fabrication files for a validated project.
///
/// Output order: cut list, panels in part-list order, profiles in
/// part-list order. Fails fast on degenerate part dimensions rather than
/// emitting unusable geometry.
pub fn generate_fabrication_files(project: &ProjectData) -> FabResult<Vec<GeneratedFile>> {
    for part in &project.parts {
        validate_part(part)?;
    }

    let mut files = Vec::with_capacity(project.parts.len() + 1);

    files.push(GeneratedFile {
        name: format!("{}_cut_list.csv", sanitize_name(&project.project_name)),
        content: render_cut_list(project),
        kind: FileKind::CutList,
        description: format!(
            "Master cut list for {} ({})",
            project.project_name, project.unit_model
        ),
    });
    info!(project = %project.project_name, parts = project.parts.len(), "generating fabrication files");

    for part in project.parts.iter().filter(|p| p.category == PartCategory::Panel) {
        files.push(panel_drawing(part));
    }
    for part in project.parts.iter().filter(|p| p.category == PartCategory::Profile) {
        files.push(profile_drawing(part));
    }

    Ok(files)
}

fn validate_part(part: &PartGeometry) -> FabResult<()> {
    if !(part.width > 0.0) || !(part.height > 0.0) {
        return Err(FabError::InvalidPart {
            name: part.name.clone(),
            reason: format!(
                "dimensions must be positive, got {}x{}",
                part.width, part.height
            ),
        });
    }
    if part.quantity == 0 {
        return Err(FabError::InvalidPart {
            name: part.name.clone(),
            reason: "quantity must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Replace everything outside `[A-Za-z0-9_-]` so names are safe as file
/// stems on any platform.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn part_label(writer: &mut DxfWriter, part: &PartGeometry, top_y: f64) {
    let label = format!("{} ({}x) - {}", part.name, part.quantity, part.material);
    writer.add_text(&label, 0.0, top_y + LABEL_HEIGHT, LABEL_HEIGHT, LAYER_TEXT, 0.0);
}

fn draw_hole(writer: &mut DxfWriter, hole: &Hole) {
    match hole.shape {
        HoleShape::Circle => {
            let radius = hole.width / 2.0;
            writer.add_circle(hole.x, hole.y, radius, LAYER_CUT_INNER, COLOR_RED);
            writer.add_callout(
                hole.x + radius,
                hole.y,
                &format!("D{:.0}", hole.width),
                30.0,
                12.0,
            );
        }
        HoleShape::Rectangle => {
            let w = hole.width;
            let h = hole.height.unwrap_or(hole.width);
            let corners = [
                Point::new(hole.x - w / 2.0, hole.y - h / 2.0),
                Point::new(hole.x + w / 2.0, hole.y - h / 2.0),
                Point::new(hole.x + w / 2.0, hole.y + h / 2.0),
                Point::new(hole.x - w / 2.0, hole.y + h / 2.0),
            ];
            writer.add_polyline(&corners, LAYER_CUT_INNER, COLOR_RED, true);
            writer.add_callout(
                hole.x + w / 2.0,
                hole.y,
                &format!("{:.0}x{:.0}", w, h),
                30.0,
                12.0,
            );
        }
    }
}

fn panel_drawing(part: &PartGeometry) -> GeneratedFile {
    let mut writer = DxfWriter::new();

    let (top_y, style) = if part.is_flat() {
        draw_flat_panel(&mut writer, part);
        (part.height, "flat sheet")
    } else {
        let layout = tray_layout(part);
        draw_tray_panel(&mut writer, &layout);
        (layout.flat_height, "tray flat pattern")
    };
    part_label(&mut writer, part, top_y);
    debug!(part = %part.name, style, "panel drawing generated");

    GeneratedFile {
        name: format!("{}.dxf", sanitize_name(&part.name)),
        content: writer.finish(),
        kind: FileKind::Drawing,
        description: format!("{} for panel {}", style, part.name),
    }
}

fn draw_flat_panel(writer: &mut DxfWriter, part: &PartGeometry) {
    let (w, h) = (part.width, part.height);
    let outline = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    writer.add_polyline(&outline, LAYER_CUT_OUTER, COLOR_WHITE, true);

    for hole in &part.holes {
        draw_hole(writer, hole);
    }

    writer.add_dimension(0.0, 0.0, w, 0.0, None, -DIM_OFFSET);
    writer.add_dimension(0.0, 0.0, 0.0, h, None, DIM_OFFSET);
}

fn draw_tray_panel(writer: &mut DxfWriter, layout: &crate::tray::TrayLayout) {
    writer.add_polyline(&layout.outline, LAYER_CUT_OUTER, COLOR_WHITE, true);

    for (start, end) in &layout.bend_lines {
        writer.add_line(start.x, start.y, end.x, end.y, LAYER_BEND, COLOR_YELLOW);
        writer.add_text(
            "FOLD 90",
            (start.x + end.x) / 2.0,
            (start.y + end.y) / 2.0 + 1.0,
            2.5,
            LAYER_TEXT,
            if (start.x - end.x).abs() < 1e-9 { 90.0 } else { 0.0 },
        );
    }

    for center in &layout.rivet_holes {
        writer.add_circle(
            center.x,
            center.y,
            RIVET_HOLE_DIAMETER / 2.0,
            LAYER_CUT_INNER,
            COLOR_RED,
        );
    }

    for hole in &layout.holes {
        draw_hole(writer, hole);
    }

    writer.add_dimension(0.0, 0.0, layout.flat_width, 0.0, None, -DIM_OFFSET);
    writer.add_dimension(0.0, 0.0, 0.0, layout.flat_height, None, DIM_OFFSET);
}

fn profile_drawing(part: &PartGeometry) -> GeneratedFile {
    let mut writer = DxfWriter::new();

    let section = section_from_name(&part.name, part.width, crate::tray::FLANGE_WIDTH);
    let flattened = flatten_segments(&section.segments(), SHEET_GAUGE);
    let (flat_len, length) = (flattened.flat_length, part.height);

    let outline = [
        Point::new(0.0, 0.0),
        Point::new(flat_len, 0.0),
        Point::new(flat_len, length),
        Point::new(0.0, length),
    ];
    writer.add_polyline(&outline, LAYER_CUT_OUTER, COLOR_WHITE, true);

    // Bend lines run the full strip length; cumulative dimensions stack
    // below the strip so they stay legible.
    for (i, pos) in flattened.bend_positions.iter().enumerate() {
        writer.add_line(*pos, 0.0, *pos, length, LAYER_BEND, COLOR_YELLOW);
        writer.add_text("FOLD 90", *pos + 1.0, length / 2.0, 2.5, LAYER_TEXT, 90.0);
        writer.add_dimension(
            0.0,
            0.0,
            *pos,
            0.0,
            None,
            -(DIM_OFFSET + DIM_STACK_STEP * i as f64),
        );
    }
    let stack = flattened.bend_positions.len() as f64;
    writer.add_dimension(
        0.0,
        0.0,
        flat_len,
        0.0,
        None,
        -(DIM_OFFSET + DIM_STACK_STEP * stack),
    );
    writer.add_dimension(0.0, 0.0, 0.0, length, None, DIM_OFFSET);

    part_label(&mut writer, part, length);
    debug!(part = %part.name, flat_len, "profile drawing generated");

    GeneratedFile {
        name: format!("{}.dxf", sanitize_name(&part.name)),
        content: writer.finish(),
        kind: FileKind::Drawing,
        description: format!("flat strip for profile {}", part.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("TDC 30x30"), "TDC_30x30");
        assert_eq!(sanitize_name("Base_Tray"), "Base_Tray");
        assert_eq!(sanitize_name("a/b:c"), "a_b_c");
    }

    #[test]
    fn test_degenerate_part_is_rejected() {
        let project = ProjectData {
            project_name: "P".to_string(),
            unit_model: "M".to_string(),
            outer_width: 1.0,
            outer_height: 1.0,
            outer_depth: 1.0,
            base_height: 0.0,
            outer_material: String::new(),
            inner_material: String::new(),
            insulation_thickness: 0.0,
            supply_duct_cut: String::new(),
            return_duct_cut: String::new(),
            parts: vec![PartGeometry {
                name: "Bad".to_string(),
                category: PartCategory::Panel,
                material: String::new(),
                quantity: 1,
                width: 0.0,
                height: 100.0,
                notes: String::new(),
                holes: Vec::new(),
            }],
        };
        let err = generate_fabrication_files(&project).unwrap_err();
        assert!(matches!(err, FabError::InvalidPart { .. }));
    }
}

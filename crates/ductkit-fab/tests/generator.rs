//! End-to-end pipeline coverage: project data in, parsed drawings out.

use ductkit_core::{
    FileKind, Hole, HoleShape, PartCategory, PartGeometry, ProjectData,
};
use ductkit_dxf::{DxfEntity, DxfEntityType, DxfParser, LAYER_BEND, LAYER_CUT_OUTER};
use ductkit_fab::generate_fabrication_files;

fn project(parts: Vec<PartGeometry>) -> ProjectData {
    ProjectData {
        project_name: "AHU-7".to_string(),
        unit_model: "KG Top 190".to_string(),
        outer_width: 1200.0,
        outer_height: 800.0,
        outer_depth: 600.0,
        base_height: 110.0,
        outer_material: "AlZn 1.0".to_string(),
        inner_material: "Galvanized 1.0".to_string(),
        insulation_thickness: 50.0,
        supply_duct_cut: "400x300".to_string(),
        return_duct_cut: "400x300".to_string(),
        parts,
    }
}

fn panel(name: &str, width: f64, height: f64, notes: &str, holes: Vec<Hole>) -> PartGeometry {
    PartGeometry {
        name: name.to_string(),
        category: PartCategory::Panel,
        material: "Galvanized 1.0".to_string(),
        quantity: 1,
        width,
        height,
        notes: notes.to_string(),
        holes,
    }
}

#[test]
fn flat_panel_produces_rectangle_and_two_dimensions() {
    let files =
        generate_fabrication_files(&project(vec![panel("Plate_A", 200.0, 100.0, "flat", vec![])]))
            .unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].kind, FileKind::CutList);
    assert_eq!(files[1].kind, FileKind::Drawing);
    assert_eq!(files[1].name, "Plate_A.dxf");

    let parsed = DxfParser::parse(&files[1].content).unwrap();
    let polylines: Vec<_> = parsed
        .entities
        .iter()
        .filter_map(|e| match e {
            DxfEntity::Polyline(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(polylines.len(), 1);
    let outline = polylines[0];
    assert!(outline.closed);
    assert_eq!(outline.layer, LAYER_CUT_OUTER);
    assert_eq!(outline.vertices.len(), 4);
    assert_eq!(outline.vertices[1].x, 200.0);
    assert_eq!(outline.vertices[2].y, 100.0);

    // Two dimension groups: each is 2 extension lines, 1 dimension line,
    // 2 ticks and one value text.
    let lines = parsed
        .entities
        .iter()
        .filter(|e| e.entity_type() == DxfEntityType::Line)
        .count();
    let texts = parsed
        .entities
        .iter()
        .filter(|e| e.entity_type() == DxfEntityType::Text)
        .count();
    assert_eq!(lines, 10);
    // Two dimension values plus the part label.
    assert_eq!(texts, 3);
}

#[test]
fn tray_panel_produces_notched_outline_bends_and_rivets() {
    let files = generate_fabrication_files(&project(vec![panel(
        "Base_Tray",
        300.0,
        200.0,
        "",
        vec![],
    )]))
    .unwrap();
    let parsed = DxfParser::parse(&files[1].content).unwrap();

    let outline = parsed
        .entities
        .iter()
        .find_map(|e| match e {
            DxfEntity::Polyline(p) => Some(p),
            _ => None,
        })
        .expect("tray drawing must contain the outer cut");
    assert_eq!(outline.vertices.len(), 12);
    assert!(outline.closed);

    // Flat pattern spans W + 2*25 - 2*2 by H + 2*25 - 2*2.
    let max_x = outline.vertices.iter().map(|v| v.x).fold(f64::MIN, f64::max);
    let max_y = outline.vertices.iter().map(|v| v.y).fold(f64::MIN, f64::max);
    assert!((max_x - 346.0).abs() < 1e-3);
    assert!((max_y - 246.0).abs() < 1e-3);

    let bend_lines = parsed
        .entities
        .iter()
        .filter(|e| e.entity_type() == DxfEntityType::Line && e.layer() == LAYER_BEND)
        .count();
    assert_eq!(bend_lines, 4);

    // 298mm and 198mm usable runs carry one rivet each, on four flanges.
    let rivets: Vec<_> = parsed
        .entities
        .iter()
        .filter_map(|e| match e {
            DxfEntity::Circle(c) => Some(c),
            _ => None,
        })
        .collect();
    assert_eq!(rivets.len(), 4);
    for rivet in &rivets {
        assert!((rivet.radius - 2.0).abs() < 1e-3);
    }
    // Symmetric about the flange midline.
    let bottom: Vec<_> = rivets.iter().filter(|c| c.center.y < 24.0).collect();
    assert_eq!(bottom.len(), 1);
    assert!((bottom[0].center.x - 346.0 / 2.0).abs() < 1e-3);
}

#[test]
fn tray_holes_are_remapped_by_notch_offset() {
    let hole = Hole {
        shape: HoleShape::Circle,
        x: 150.0,
        y: 100.0,
        width: 20.0,
        height: None,
    };
    let files = generate_fabrication_files(&project(vec![panel(
        "Side_Panel",
        300.0,
        200.0,
        "",
        vec![hole],
    )]))
    .unwrap();
    let parsed = DxfParser::parse(&files[1].content).unwrap();

    let cut = parsed
        .entities
        .iter()
        .filter_map(|e| match e {
            DxfEntity::Circle(c) => Some(c),
            _ => None,
        })
        .find(|c| (c.radius - 10.0).abs() < 1e-3)
        .expect("remapped input hole must be drawn");
    assert!((cut.center.x - 174.0).abs() < 1e-3);
    assert!((cut.center.y - 124.0).abs() < 1e-3);
}

#[test]
fn profile_strip_spans_flattened_length() {
    let profile = PartGeometry {
        name: "TDC 30x30".to_string(),
        category: PartCategory::Profile,
        material: "Galvanized 1.0".to_string(),
        quantity: 4,
        width: 30.0,
        height: 1200.0,
        notes: String::new(),
        holes: Vec::new(),
    };
    let files = generate_fabrication_files(&project(vec![profile])).unwrap();
    assert_eq!(files.len(), 2);
    let parsed = DxfParser::parse(&files[1].content).unwrap();

    let outline = parsed
        .entities
        .iter()
        .find_map(|e| match e {
            DxfEntity::Polyline(p) => Some(p),
            _ => None,
        })
        .unwrap();
    // [10, 30, 30, 30, 10] with 4 bends at D = 2.0 -> 110 - 8 = 102.
    let max_x = outline.vertices.iter().map(|v| v.x).fold(f64::MIN, f64::max);
    assert!((max_x - 102.0).abs() < 1e-3);

    let bend_lines = parsed
        .entities
        .iter()
        .filter(|e| e.entity_type() == DxfEntityType::Line && e.layer() == LAYER_BEND)
        .count();
    assert_eq!(bend_lines, 4);
}

#[test]
fn output_order_is_cutlist_then_panels_then_profiles() {
    let parts = vec![
        PartGeometry {
            name: "Corner 25x25".to_string(),
            category: PartCategory::Profile,
            material: "AlZn".to_string(),
            quantity: 4,
            width: 25.0,
            height: 800.0,
            notes: String::new(),
            holes: Vec::new(),
        },
        panel("Roof", 400.0, 300.0, "", vec![]),
        panel("Floor", 400.0, 300.0, "flat", vec![]),
    ];
    let files = generate_fabrication_files(&project(parts)).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AHU-7_cut_list.csv",
            "Roof.dxf",
            "Floor.dxf",
            "Corner_25x25.dxf"
        ]
    );
    assert_eq!(files[0].kind, FileKind::CutList);
    assert!(files[0].content.starts_with("Part Name,Type,"));
}

//! Output-contract coverage: generated files are plain named text blobs a
//! caller can persist or ship as JSON without help from the engine.

use std::fs;

use ductkit_core::{FileKind, GeneratedFile, PartCategory, PartGeometry, ProjectData};
use ductkit_fab::generate_fabrication_files;

fn sample_project() -> ProjectData {
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
        parts: vec![PartGeometry {
            name: "Roof".to_string(),
            category: PartCategory::Panel,
            material: "AlZn 1.0".to_string(),
            quantity: 1,
            width: 400.0,
            height: 300.0,
            notes: String::new(),
            holes: Vec::new(),
        }],
    }
}

#[test]
fn generated_files_roundtrip_through_json() {
    let files = generate_fabrication_files(&sample_project()).unwrap();
    let json = serde_json::to_string(&files).unwrap();
    let back: Vec<GeneratedFile> = serde_json::from_str(&json).unwrap();
    assert_eq!(files, back);
    assert_eq!(back[0].kind, FileKind::CutList);
}

#[test]
fn generated_files_persist_to_disk_verbatim() {
    let files = generate_fabrication_files(&sample_project()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    for file in &files {
        let path = dir.path().join(&file.name);
        fs::write(&path, &file.content).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), file.content);
    }
}

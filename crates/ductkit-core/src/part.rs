//! Part and project data model.
//!
//! `ProjectData` is the sole external input to the engine. It arrives from
//! the upstream document extraction service as JSON and is assumed to be
//! fully populated; the engine only rejects degenerate numeric dimensions.

use serde::{Deserialize, Serialize};

/// Shape of a cut-out in a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleShape {
    /// Round hole; `width` is the diameter.
    Circle,
    /// Rectangular opening; `width` x `height`.
    Rectangle,
}

/// A hole specification, positioned by its center relative to the part's
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub shape: HoleShape,
    /// Center X, mm from the part's bottom-left corner.
    pub x: f64,
    /// Center Y, mm from the part's bottom-left corner.
    pub y: f64,
    /// Diameter for circles, width for rectangles.
    pub width: f64,
    /// Height for rectangles; ignored for circles.
    pub height: Option<f64>,
}

/// Whether a part is a sheet panel or a folded structural profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Panel,
    Profile,
}

impl PartCategory {
    /// Display name used in the cut list.
    pub fn name(&self) -> &'static str {
        match self {
            PartCategory::Panel => "Panel",
            PartCategory::Profile => "Profile",
        }
    }
}

/// One fabrication part as extracted from the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartGeometry {
    pub name: String,
    pub category: PartCategory,
    pub material: String,
    pub quantity: u32,
    /// Nominal finished width, mm. For profiles this is the nominal
    /// cross-section size used as fallback when the name carries none.
    pub width: f64,
    /// Nominal finished height, mm. For profiles this is the cut length.
    pub height: f64,
    /// Free-form notes. A panel whose notes contain "flat" is drawn as a
    /// plain rectangle with no flanges.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl PartGeometry {
    /// Whether the notes mark this panel as a plain flat sheet.
    pub fn is_flat(&self) -> bool {
        self.notes.to_lowercase().contains("flat")
    }
}

/// The extracted project record: global unit data plus the ordered part
/// list. Field names follow the extraction service's JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub project_name: String,
    pub unit_model: String,
    pub outer_width: f64,
    pub outer_height: f64,
    pub outer_depth: f64,
    pub base_height: f64,
    pub outer_material: String,
    pub inner_material: String,
    pub insulation_thickness: f64,
    /// Supply-side duct cut-out dimensions, as written in the document
    /// (e.g. "400x300").
    pub supply_duct_cut: String,
    /// Return-side duct cut-out dimensions.
    pub return_duct_cut: String,
    pub parts: Vec<PartGeometry>,
}

/// Kind of output file produced by the fabrication pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A DXF drawing for one panel or profile.
    Drawing,
    /// The master cut-list text file.
    CutList,
}

/// One generated output unit. The engine performs no file I/O; callers
/// persist or transmit these as they see fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
    pub kind: FileKind,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_flat_case_insensitive() {
        let mut part = PartGeometry {
            name: "Plate_A".to_string(),
            category: PartCategory::Panel,
            material: "Galvanized 1.0mm".to_string(),
            quantity: 1,
            width: 200.0,
            height: 100.0,
            notes: "FLAT sheet, no folds".to_string(),
            holes: Vec::new(),
        };
        assert!(part.is_flat());
        part.notes = "standard tray".to_string();
        assert!(!part.is_flat());
    }

    #[test]
    fn test_part_deserializes_with_defaults() {
        let json = r#"{
            "name": "Side_Panel",
            "category": "panel",
            "material": "AlZn 1.0",
            "quantity": 2,
            "width": 500.0,
            "height": 300.0
        }"#;
        let part: PartGeometry = serde_json::from_str(json).unwrap();
        assert!(part.notes.is_empty());
        assert!(part.holes.is_empty());
    }

    #[test]
    fn test_hole_roundtrips_through_json() {
        let hole = Hole {
            shape: HoleShape::Rectangle,
            x: 50.0,
            y: 25.0,
            width: 40.0,
            height: Some(20.0),
        };
        let json = serde_json::to_string(&hole).unwrap();
        let back: Hole = serde_json::from_str(&json).unwrap();
        assert_eq!(hole, back);
    }
}

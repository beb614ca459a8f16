//! Drawing entities and the fixed layer table.
//!
//! Entities are immutable once appended to a document; append order is
//! serialization order. Every entity carries its layer name and an AutoCAD
//! color index alongside the type-specific geometry.

use ductkit_core::Point;
use serde::{Deserialize, Serialize};

/// Default layer, present in every DXF document.
pub const LAYER_DEFAULT: &str = "0";
/// Outer cut contours (part outlines).
pub const LAYER_CUT_OUTER: &str = "CUT_OUTER";
/// Inner cut contours (holes and openings).
pub const LAYER_CUT_INNER: &str = "CUT_INNER";
/// Bend/fold lines, drawn dashed.
pub const LAYER_BEND: &str = "BEND";
/// Dimension lines, extension lines, ticks and dimension text.
pub const LAYER_DIM: &str = "DIM";
/// Labels and callout text.
pub const LAYER_TEXT: &str = "TEXT";

/// AutoCAD color index: red.
pub const COLOR_RED: i32 = 1;
/// AutoCAD color index: yellow.
pub const COLOR_YELLOW: i32 = 2;
/// AutoCAD color index: green.
pub const COLOR_GREEN: i32 = 3;
/// AutoCAD color index: cyan.
pub const COLOR_CYAN: i32 = 4;
/// AutoCAD color index: white.
pub const COLOR_WHITE: i32 = 7;

/// One row of the layer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDef {
    pub name: &'static str,
    pub color: i32,
    pub linetype: &'static str,
}

/// The fixed layer set, written once at document-open time.
pub const LAYERS: [LayerDef; 6] = [
    LayerDef {
        name: LAYER_DEFAULT,
        color: COLOR_WHITE,
        linetype: "CONTINUOUS",
    },
    LayerDef {
        name: LAYER_CUT_OUTER,
        color: COLOR_WHITE,
        linetype: "CONTINUOUS",
    },
    LayerDef {
        name: LAYER_CUT_INNER,
        color: COLOR_RED,
        linetype: "CONTINUOUS",
    },
    LayerDef {
        name: LAYER_BEND,
        color: COLOR_YELLOW,
        linetype: "DASHED",
    },
    LayerDef {
        name: LAYER_DIM,
        color: COLOR_GREEN,
        linetype: "CONTINUOUS",
    },
    LayerDef {
        name: LAYER_TEXT,
        color: COLOR_CYAN,
        linetype: "CONTINUOUS",
    },
];

/// A two-point line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DxfLine {
    pub start: Point,
    pub end: Point,
    pub layer: String,
    pub color: i32,
}

/// An ordered vertex sequence, optionally closed into a loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DxfPolyline {
    pub vertices: Vec<Point>,
    pub closed: bool,
    pub layer: String,
    pub color: i32,
}

/// A circle given by center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DxfCircle {
    pub center: Point,
    pub radius: f64,
    pub layer: String,
    pub color: i32,
}

/// A text label anchored at its insertion point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DxfText {
    pub content: String,
    pub position: Point,
    pub height: f64,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
    pub layer: String,
    pub color: i32,
}

/// The closed set of entity kinds the dialect supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DxfEntityType {
    Line,
    Polyline,
    Circle,
    Text,
}

/// A drawing entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DxfEntity {
    Line(DxfLine),
    Polyline(DxfPolyline),
    Circle(DxfCircle),
    Text(DxfText),
}

impl DxfEntity {
    /// The kind tag of this entity.
    pub fn entity_type(&self) -> DxfEntityType {
        match self {
            DxfEntity::Line(_) => DxfEntityType::Line,
            DxfEntity::Polyline(_) => DxfEntityType::Polyline,
            DxfEntity::Circle(_) => DxfEntityType::Circle,
            DxfEntity::Text(_) => DxfEntityType::Text,
        }
    }

    /// Layer the entity lives on.
    pub fn layer(&self) -> &str {
        match self {
            DxfEntity::Line(e) => &e.layer,
            DxfEntity::Polyline(e) => &e.layer,
            DxfEntity::Circle(e) => &e.layer,
            DxfEntity::Text(e) => &e.layer,
        }
    }
}

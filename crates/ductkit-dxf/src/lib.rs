//! # Ductkit DXF
//!
//! Minimal ASCII DXF dialect used by the fabrication pipeline.
//!
//! ## Components
//!
//! - **Entities**: the four supported drawing entities (LINE, POLYLINE,
//!   CIRCLE, TEXT) and the fixed six-layer table
//! - **Writer**: append-only builder consumed by a terminal [`DxfWriter::finish`]
//! - **Dimensioning**: linear dimensions with extension lines and tick
//!   marks, plus leader callouts, built as composite writer operations
//! - **Parser**: group-code tokenizer reconstructing entities and an
//!   axis-aligned bounding box for round-trip verification and preview
//!
//! The dialect is deliberately small: one format version marker (AC1009),
//! six predefined layers, planar entities only, coordinates serialized
//! with exactly three decimals in millimeters.

pub mod dimension;
pub mod entities;
pub mod parser;
pub mod writer;

pub use entities::{
    DxfCircle, DxfEntity, DxfEntityType, DxfLine, DxfPolyline, DxfText, LayerDef, COLOR_CYAN,
    COLOR_GREEN, COLOR_RED, COLOR_WHITE, COLOR_YELLOW, LAYERS, LAYER_BEND, LAYER_CUT_INNER,
    LAYER_CUT_OUTER, LAYER_DEFAULT, LAYER_DIM, LAYER_TEXT,
};
pub use parser::{DxfError, DxfParser, DxfResult, ParsedDrawing};
pub use writer::DxfWriter;

//! # Ductkit Core
//!
//! Shared types for the ductkit sheet-metal fabrication engine.
//!
//! ## Core Components
//!
//! - **Geometry**: 2D points and axis-aligned bounding boxes in drawing
//!   units (millimeters)
//! - **Part Model**: panels, structural profiles, hole specifications and
//!   the extracted project record handed over by the upstream extractor
//! - **Generated Files**: the named, typed text blobs produced by the
//!   fabrication pipeline
//!
//! All model types are serde-serializable; the upstream extraction service
//! delivers `ProjectData` as JSON and the engine treats it as already
//! validated apart from degenerate numeric clamping.

pub mod geometry;
pub mod part;

pub use geometry::{BoundingBox2D, Point};
pub use part::{
    FileKind, GeneratedFile, Hole, HoleShape, PartCategory, PartGeometry, ProjectData,
};

//! # Ductkit Fab
//!
//! Flat-pattern geometry engine and fabrication file generator.
//!
//! ## Components
//!
//! - **Flatten**: stretched-out length and bend positions for folded
//!   multi-segment profiles (bend deduction)
//! - **Tray**: tray-style panel expansion with corner notching, flange
//!   rivet distribution and hole remapping into flat coordinates
//! - **Profile**: cross-section derivation from profile names with an
//!   explicit fallback, and flat-strip layout
//! - **Cut list**: the master CSV summary of every part
//! - **Generator**: the orchestrator producing one [`GeneratedFile`] per
//!   panel/profile plus the cut list, in part-list order
//!
//! Everything here is a pure, synchronous transformation. Per-part
//! generation only reads its own part, so callers may parallelize over
//! parts and collect results in input order.
//!
//! [`GeneratedFile`]: ductkit_core::GeneratedFile

pub mod cutlist;
pub mod error;
pub mod flatten;
pub mod generator;
pub mod profile;
pub mod tray;

pub use cutlist::render_cut_list;
pub use error::{FabError, FabResult};
pub use flatten::{flatten_segments, FlattenedProfile};
pub use generator::generate_fabrication_files;
pub use profile::{section_from_name, ProfileSection};
pub use tray::{tray_layout, TrayLayout, BEND_DEDUCTION, FLANGE_WIDTH, RIVET_TARGET_SPACING};

//! Multi-segment bend flattening.
//!
//! A folded cross-section is described by its ordered outer segment
//! lengths (for example lip, flange, web, flange, lip). The outer lengths
//! overstate the flat stock length because material stretches at every
//! bend; the deduction is `2 x thickness` per internal bend. The formulas
//! here are what the press brake tooling is set up against, so they must
//! not drift.

/// Assumed sheet gauge for the standard duct panels and profiles, mm.
pub const SHEET_GAUGE: f64 = 1.0;

use serde::{Deserialize, Serialize};

/// Result of flattening a folded profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedProfile {
    /// True flat stock length, mm.
    pub flat_length: f64,
    /// Position of each bend along the flattened strip, mm from the left
    /// edge. Strictly increasing; one entry per internal bend.
    pub bend_positions: Vec<f64>,
}

/// Flatten an ordered segment list for material of the given thickness.
///
/// `flat_length = sum(segments) - (n-1) * 2t`. Each bend position is the
/// cumulative outer length up to that bend corrected by `D*i + D/2`, so
/// every preceding bend's deduction is fully accounted for.
pub fn flatten_segments(segments: &[f64], thickness: f64) -> FlattenedProfile {
    let deduction = 2.0 * thickness;
    let bend_count = segments.len().saturating_sub(1);

    let flat_length = segments.iter().sum::<f64>() - bend_count as f64 * deduction;

    let mut bend_positions = Vec::with_capacity(bend_count);
    let mut outer = 0.0;
    for (i, segment) in segments.iter().take(bend_count).enumerate() {
        outer += segment;
        bend_positions.push(outer - (deduction * i as f64 + deduction / 2.0));
    }

    FlattenedProfile {
        flat_length,
        bend_positions,
    }
}

//! Tray-style panel expansion.
//!
//! A finished box face of width W and height H gains a standard flange on
//! all four sides, corner-notched so the flanges can fold without
//! colliding. Rivet holes are distributed evenly along each flange's
//! usable run, and any holes supplied with the part are remapped from
//! finished-part coordinates into the shifted flat-pattern frame.

use ductkit_core::{Hole, PartGeometry, Point};
use serde::{Deserialize, Serialize};

use crate::flatten::SHEET_GAUGE;

/// Standard flange width added to every tray side, mm.
pub const FLANGE_WIDTH: f64 = 25.0;

/// Bend deduction for the assumed gauge (`2 x t`), mm.
pub const BEND_DEDUCTION: f64 = 2.0 * SHEET_GAUGE;

/// Corner notch size, mm.
pub const NOTCH: f64 = FLANGE_WIDTH - BEND_DEDUCTION / 2.0;

/// Target rivet pitch along a flange, mm.
pub const RIVET_TARGET_SPACING: f64 = 150.0;

/// Rivet hole diameter, mm.
pub const RIVET_HOLE_DIAMETER: f64 = 4.0;

/// Computed flat-pattern geometry for one tray panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayLayout {
    /// Overall flat width: `W + 2*FLANGE - 2*D`.
    pub flat_width: f64,
    /// Overall flat height: `H + 2*FLANGE - 2*D`.
    pub flat_height: f64,
    /// Corner notch size.
    pub notch: f64,
    /// Twelve-vertex corner-notched outer cut, counter-clockwise, closed.
    pub outline: Vec<Point>,
    /// Four fold lines, one per side, inset by the notch size.
    pub bend_lines: Vec<(Point, Point)>,
    /// Auto-placed rivet hole centers on all four flanges.
    pub rivet_holes: Vec<Point>,
    /// The part's holes remapped into flat-pattern coordinates. The input
    /// part is left untouched.
    pub holes: Vec<Hole>,
}

/// Evenly redistribute holes over a usable run: `floor(usable/target)`
/// holes at `usable/(count+1)` pitch, so there is no leftover slack at
/// one end. A run too short for a single hole gets none.
fn distribute(usable: f64, target: f64) -> (usize, f64) {
    if usable <= 0.0 {
        return (0, 0.0);
    }
    let count = (usable / target).floor() as usize;
    if count == 0 {
        return (0, 0.0);
    }
    (count, usable / (count + 1) as f64)
}

/// Expand a tray panel into its flat pattern.
pub fn tray_layout(part: &PartGeometry) -> TrayLayout {
    let flat_w = part.width + 2.0 * FLANGE_WIDTH - 2.0 * BEND_DEDUCTION;
    let flat_h = part.height + 2.0 * FLANGE_WIDTH - 2.0 * BEND_DEDUCTION;
    let n = NOTCH;

    let outline = vec![
        Point::new(n, 0.0),
        Point::new(flat_w - n, 0.0),
        Point::new(flat_w - n, n),
        Point::new(flat_w, n),
        Point::new(flat_w, flat_h - n),
        Point::new(flat_w - n, flat_h - n),
        Point::new(flat_w - n, flat_h),
        Point::new(n, flat_h),
        Point::new(n, flat_h - n),
        Point::new(0.0, flat_h - n),
        Point::new(0.0, n),
        Point::new(n, n),
    ];

    let bend_lines = vec![
        (Point::new(n, n), Point::new(flat_w - n, n)),
        (Point::new(n, flat_h - n), Point::new(flat_w - n, flat_h - n)),
        (Point::new(n, n), Point::new(n, flat_h - n)),
        (Point::new(flat_w - n, n), Point::new(flat_w - n, flat_h - n)),
    ];

    // Long and short flange pairs get independent counts.
    let mut rivet_holes = Vec::new();
    let (count_x, pitch_x) = distribute(flat_w - 2.0 * n, RIVET_TARGET_SPACING);
    for k in 1..=count_x {
        let x = n + pitch_x * k as f64;
        rivet_holes.push(Point::new(x, n / 2.0));
        rivet_holes.push(Point::new(x, flat_h - n / 2.0));
    }
    let (count_y, pitch_y) = distribute(flat_h - 2.0 * n, RIVET_TARGET_SPACING);
    for k in 1..=count_y {
        let y = n + pitch_y * k as f64;
        rivet_holes.push(Point::new(n / 2.0, y));
        rivet_holes.push(Point::new(flat_w - n / 2.0, y));
    }

    // The flat pattern's origin sits one notch below and left of the
    // finished box corner.
    let holes = part
        .holes
        .iter()
        .map(|h| Hole {
            x: h.x + n,
            y: h.y + n,
            ..h.clone()
        })
        .collect();

    TrayLayout {
        flat_width: flat_w,
        flat_height: flat_h,
        notch: n,
        outline,
        bend_lines,
        rivet_holes,
        holes,
    }
}

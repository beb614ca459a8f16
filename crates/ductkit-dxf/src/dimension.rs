//! Dimensioning and annotation as composite writer operations.
//!
//! Both operations expand into plain lines and text on the fixed layers,
//! so the parser needs no special dimension entity support.

use crate::entities::{COLOR_CYAN, COLOR_GREEN, LAYER_DIM, LAYER_TEXT};
use crate::writer::DxfWriter;

/// Endpoints closer than this are treated as coincident and produce no
/// dimension at all.
pub const MIN_DIMENSION_LENGTH: f64 = 0.1;

/// Gap between a measured point and the start of its extension line.
const EXTENSION_GAP: f64 = 1.0;
/// How far extension lines overshoot the dimension line.
const EXTENSION_OVERSHOOT: f64 = 2.0;
/// Half-length of the diagonal tick marks standing in for arrowheads.
const TICK_SIZE: f64 = 2.0;
/// Offset of the value text beyond the dimension line.
const TEXT_OFFSET: f64 = 2.0;
/// Height of dimension value text.
const DIM_TEXT_HEIGHT: f64 = 3.5;

/// Length of the horizontal landing segment of a leader callout.
const LANDING_LENGTH: f64 = 5.0;
/// Height of callout label text.
const CALLOUT_TEXT_HEIGHT: f64 = 2.5;
/// Estimated glyph width as a fraction of text height. Kept identical to
/// the parser's bounds heuristic so previews line up with callout labels.
pub const GLYPH_WIDTH_FACTOR: f64 = 0.6;

impl DxfWriter {
    /// Append a linear dimension between two points.
    ///
    /// `offset` is the signed perpendicular distance from the measured
    /// segment to the dimension line. `value` overrides the measured
    /// Euclidean distance when given. Coincident endpoints (closer than
    /// [`MIN_DIMENSION_LENGTH`]) append nothing.
    pub fn add_dimension(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        value: Option<f64>,
        offset: f64,
    ) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let length = (dx * dx + dy * dy).sqrt();
        if length < MIN_DIMENSION_LENGTH {
            return;
        }

        let (ux, uy) = (dx / length, dy / length);
        // Perpendicular, counter-clockwise from the segment direction.
        let (px, py) = (-uy, ux);
        let sign = offset.signum();

        // Extension lines, gapped at the measured points and overshooting
        // the dimension line.
        let reach = offset + sign * EXTENSION_OVERSHOOT;
        self.add_line(
            x1 + px * sign * EXTENSION_GAP,
            y1 + py * sign * EXTENSION_GAP,
            x1 + px * reach,
            y1 + py * reach,
            LAYER_DIM,
            COLOR_GREEN,
        );
        self.add_line(
            x2 + px * sign * EXTENSION_GAP,
            y2 + py * sign * EXTENSION_GAP,
            x2 + px * reach,
            y2 + py * reach,
            LAYER_DIM,
            COLOR_GREEN,
        );

        // Dimension line at the full offset.
        let (dx1, dy1) = (x1 + px * offset, y1 + py * offset);
        let (dx2, dy2) = (x2 + px * offset, y2 + py * offset);
        self.add_line(dx1, dy1, dx2, dy2, LAYER_DIM, COLOR_GREEN);

        // Diagonal tick marks at both ends.
        let (tx, ty) = ((ux + px) * TICK_SIZE / 2.0, (uy + py) * TICK_SIZE / 2.0);
        self.add_line(dx1 - tx, dy1 - ty, dx1 + tx, dy1 + ty, LAYER_DIM, COLOR_GREEN);
        self.add_line(dx2 - tx, dy2 - ty, dx2 + tx, dy2 + ty, LAYER_DIM, COLOR_GREEN);

        // Value text, centered above the dimension line midpoint and
        // rotated with it, never upside-down.
        let shown = value.unwrap_or(length);
        let mut angle = dy.atan2(dx).to_degrees();
        if angle <= -90.0 {
            angle += 180.0;
        } else if angle > 90.0 {
            angle -= 180.0;
        }
        let text_reach = offset + sign * TEXT_OFFSET;
        let (mx, my) = (
            (x1 + x2) / 2.0 + px * text_reach,
            (y1 + y2) / 2.0 + py * text_reach,
        );
        let label = format!("{:.1}", shown);
        // Shift back by half the estimated label width so the text centers
        // on the midpoint.
        let half_width = label.len() as f64 * DIM_TEXT_HEIGHT * GLYPH_WIDTH_FACTOR / 2.0;
        let angle_rad = angle.to_radians();
        self.add_text(
            &label,
            mx - angle_rad.cos() * half_width,
            my - angle_rad.sin() * half_width,
            DIM_TEXT_HEIGHT,
            LAYER_DIM,
            angle,
        );
    }

    /// Append a leader callout: a line from the anchor at `angle_deg` for
    /// `length` mm, a short horizontal landing, and the label text on the
    /// side the landing points toward.
    pub fn add_callout(&mut self, x: f64, y: f64, text: &str, angle_deg: f64, length: f64) {
        let angle_rad = angle_deg.to_radians();
        let ex = x + angle_rad.cos() * length;
        let ey = y + angle_rad.sin() * length;
        self.add_line(x, y, ex, ey, LAYER_TEXT, COLOR_CYAN);

        // Landing direction follows the sign of the leader's horizontal
        // component; a vertical leader lands to the right.
        let dir = if angle_rad.cos() < 0.0 { -1.0 } else { 1.0 };
        let lx = ex + dir * LANDING_LENGTH;
        self.add_line(ex, ey, lx, ey, LAYER_TEXT, COLOR_CYAN);

        let text_x = if dir > 0.0 {
            lx + 1.0
        } else {
            lx - 1.0 - text.len() as f64 * CALLOUT_TEXT_HEIGHT * GLYPH_WIDTH_FACTOR
        };
        self.add_text(
            text,
            text_x,
            ey - CALLOUT_TEXT_HEIGHT / 2.0,
            CALLOUT_TEXT_HEIGHT,
            LAYER_TEXT,
            0.0,
        );
    }
}

//! Append-only DXF document builder.
//!
//! `DxfWriter` accumulates entities in insertion order and renders the
//! whole document once through the consuming [`DxfWriter::finish`]. The
//! consuming signature makes appending after render unrepresentable, which
//! is what keeps the end-of-file marker unique by construction.

use std::fmt::Write;

use ductkit_core::Point;

use crate::entities::{DxfCircle, DxfEntity, DxfLine, DxfPolyline, DxfText, LAYERS};

/// Format version marker written to the HEADER section.
pub const ACAD_VERSION: &str = "AC1009";

/// Builder for one drawing document.
#[derive(Debug, Default)]
pub struct DxfWriter {
    entities: Vec<DxfEntity>,
}

/// Append a group code / value pair on two lines.
fn push_pair(out: &mut String, code: i32, value: &str) {
    // Infallible for String; discard the fmt::Result.
    let _ = writeln!(out, "{}", code);
    let _ = writeln!(out, "{}", value);
}

/// Append a coordinate or distance with exactly three decimals.
fn push_value(out: &mut String, code: i32, value: f64) {
    let _ = writeln!(out, "{}", code);
    let _ = writeln!(out, "{:.3}", value);
}

impl DxfWriter {
    /// Open a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-built entity.
    pub fn add_entity(&mut self, entity: DxfEntity) {
        self.entities.push(entity);
    }

    /// Append a two-point line segment.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, layer: &str, color: i32) {
        self.entities.push(DxfEntity::Line(DxfLine {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            layer: layer.to_string(),
            color,
        }));
    }

    /// Append a polyline through the given vertices.
    pub fn add_polyline(&mut self, points: &[Point], layer: &str, color: i32, closed: bool) {
        self.entities.push(DxfEntity::Polyline(DxfPolyline {
            vertices: points.to_vec(),
            closed,
            layer: layer.to_string(),
            color,
        }));
    }

    /// Append a circle.
    pub fn add_circle(&mut self, cx: f64, cy: f64, radius: f64, layer: &str, color: i32) {
        self.entities.push(DxfEntity::Circle(DxfCircle {
            center: Point::new(cx, cy),
            radius,
            layer: layer.to_string(),
            color,
        }));
    }

    /// Append a text label.
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        height: f64,
        layer: &str,
        rotation_deg: f64,
    ) {
        self.entities.push(DxfEntity::Text(DxfText {
            content: text.to_string(),
            position: Point::new(x, y),
            height,
            rotation: rotation_deg,
            layer: layer.to_string(),
            color: crate::entities::COLOR_CYAN,
        }));
    }

    /// Number of entities appended so far.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entities appended so far, in insertion order.
    pub fn entities(&self) -> &[DxfEntity] {
        &self.entities
    }

    /// Render the complete document and consume the builder.
    pub fn finish(self) -> String {
        let mut out = String::new();

        self.write_header(&mut out);
        self.write_tables(&mut out);
        self.write_entities(&mut out);

        push_pair(&mut out, 0, "EOF");
        out
    }

    fn write_header(&self, out: &mut String) {
        push_pair(out, 0, "SECTION");
        push_pair(out, 2, "HEADER");
        push_pair(out, 9, "$ACADVER");
        push_pair(out, 1, ACAD_VERSION);
        push_pair(out, 0, "ENDSEC");
    }

    fn write_tables(&self, out: &mut String) {
        push_pair(out, 0, "SECTION");
        push_pair(out, 2, "TABLES");

        // Linetype table: solid plus the dashed pattern used for bend lines.
        push_pair(out, 0, "TABLE");
        push_pair(out, 2, "LTYPE");
        push_pair(out, 70, "2");
        push_pair(out, 0, "LTYPE");
        push_pair(out, 2, "CONTINUOUS");
        push_pair(out, 70, "64");
        push_pair(out, 3, "Solid line");
        push_pair(out, 72, "65");
        push_pair(out, 73, "0");
        push_value(out, 40, 0.0);
        push_pair(out, 0, "LTYPE");
        push_pair(out, 2, "DASHED");
        push_pair(out, 70, "64");
        push_pair(out, 3, "Dashed line");
        push_pair(out, 72, "65");
        push_pair(out, 73, "2");
        push_value(out, 40, 10.0);
        push_value(out, 49, 5.0);
        push_value(out, 49, -5.0);
        push_pair(out, 0, "ENDTAB");

        push_pair(out, 0, "TABLE");
        push_pair(out, 2, "LAYER");
        push_pair(out, 70, &LAYERS.len().to_string());
        for layer in &LAYERS {
            push_pair(out, 0, "LAYER");
            push_pair(out, 2, layer.name);
            push_pair(out, 70, "0");
            push_pair(out, 62, &layer.color.to_string());
            push_pair(out, 6, layer.linetype);
        }
        push_pair(out, 0, "ENDTAB");

        push_pair(out, 0, "ENDSEC");
    }

    fn write_entities(&self, out: &mut String) {
        push_pair(out, 0, "SECTION");
        push_pair(out, 2, "ENTITIES");

        for entity in &self.entities {
            match entity {
                DxfEntity::Line(line) => {
                    push_pair(out, 0, "LINE");
                    push_pair(out, 8, &line.layer);
                    push_pair(out, 62, &line.color.to_string());
                    push_value(out, 10, line.start.x);
                    push_value(out, 20, line.start.y);
                    push_value(out, 11, line.end.x);
                    push_value(out, 21, line.end.y);
                }
                DxfEntity::Polyline(poly) => {
                    push_pair(out, 0, "POLYLINE");
                    push_pair(out, 8, &poly.layer);
                    push_pair(out, 62, &poly.color.to_string());
                    push_pair(out, 66, "1");
                    push_pair(out, 70, if poly.closed { "1" } else { "0" });
                    for v in &poly.vertices {
                        push_pair(out, 0, "VERTEX");
                        push_pair(out, 8, &poly.layer);
                        push_value(out, 10, v.x);
                        push_value(out, 20, v.y);
                    }
                    push_pair(out, 0, "SEQEND");
                }
                DxfEntity::Circle(circle) => {
                    push_pair(out, 0, "CIRCLE");
                    push_pair(out, 8, &circle.layer);
                    push_pair(out, 62, &circle.color.to_string());
                    push_value(out, 10, circle.center.x);
                    push_value(out, 20, circle.center.y);
                    push_value(out, 40, circle.radius);
                }
                DxfEntity::Text(text) => {
                    push_pair(out, 0, "TEXT");
                    push_pair(out, 8, &text.layer);
                    push_pair(out, 62, &text.color.to_string());
                    push_value(out, 10, text.position.x);
                    push_value(out, 20, text.position.y);
                    push_value(out, 40, text.height);
                    push_value(out, 50, text.rotation);
                    push_pair(out, 1, &text.content);
                }
            }
        }

        push_pair(out, 0, "ENDSEC");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{COLOR_WHITE, LAYER_CUT_OUTER};

    #[test]
    fn test_empty_document_structure() {
        let doc = DxfWriter::new().finish();
        assert!(doc.starts_with("0\nSECTION\n2\nHEADER\n"));
        assert!(doc.contains("$ACADVER"));
        assert!(doc.contains("AC1009"));
        assert!(doc.ends_with("0\nEOF\n"));
        // The EOF marker appears exactly once.
        assert_eq!(doc.matches("EOF").count(), 1);
    }

    #[test]
    fn test_layer_table_emitted_once() {
        let doc = DxfWriter::new().finish();
        for layer in &LAYERS {
            assert!(doc.contains(layer.name), "missing layer {}", layer.name);
        }
        assert_eq!(doc.matches("ENDTAB").count(), 2);
    }

    #[test]
    fn test_coordinates_have_three_decimals() {
        let mut writer = DxfWriter::new();
        writer.add_line(0.0, 0.0, 100.5, 0.25, LAYER_CUT_OUTER, COLOR_WHITE);
        let doc = writer.finish();
        assert!(doc.contains("100.500"));
        assert!(doc.contains("0.250"));
    }

    #[test]
    fn test_closed_polyline_flag() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let mut writer = DxfWriter::new();
        writer.add_polyline(&pts, LAYER_CUT_OUTER, COLOR_WHITE, true);
        let doc = writer.finish();
        let poly_at = doc.find("POLYLINE").unwrap();
        let seqend_at = doc.find("SEQEND").unwrap();
        assert!(poly_at < seqend_at);
        assert_eq!(doc.matches("VERTEX").count(), 3);
        assert!(doc[poly_at..seqend_at].contains("70\n1\n"));
    }

    #[test]
    fn test_entities_serialized_in_append_order() {
        let mut writer = DxfWriter::new();
        writer.add_circle(5.0, 5.0, 2.0, LAYER_CUT_OUTER, COLOR_WHITE);
        writer.add_line(0.0, 0.0, 1.0, 1.0, LAYER_CUT_OUTER, COLOR_WHITE);
        assert_eq!(writer.entity_count(), 2);
        let doc = writer.finish();
        assert!(doc.find("CIRCLE").unwrap() < doc.find("LINE").unwrap());
    }
}

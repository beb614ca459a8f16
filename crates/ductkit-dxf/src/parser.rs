//! DXF parser for round-trip verification and preview.
//!
//! Parses the minimal dialect emitted by [`crate::writer::DxfWriter`]
//! back into typed entities plus an axis-aligned bounding box. Entity
//! types the dialect does not know are skipped, never rejected, so files
//! written by richer CAD packages still preview. Malformed numeric tokens
//! in recognized fields are a decode error.

use ductkit_core::{BoundingBox2D, Point};
use thiserror::Error;
use tracing::debug;

use crate::entities::{
    DxfCircle, DxfEntity, DxfLine, DxfPolyline, DxfText, COLOR_WHITE, LAYER_DEFAULT,
};

/// Errors produced while decoding drawing text.
#[derive(Error, Debug)]
pub enum DxfError {
    /// A group code line did not parse as an integer.
    #[error("invalid group code {raw:?} at line {line}")]
    InvalidGroupCode { raw: String, line: usize },

    /// The input ended with a code line that has no value line.
    #[error("dangling group code {code} at end of input")]
    TruncatedPair { code: i32 },

    /// A recognized numeric field held a non-numeric value.
    #[error("invalid numeric value {value:?} for group code {code}")]
    InvalidNumber { code: i32, value: String },

    /// The text contains no SECTION marker at all.
    #[error("not a DXF document: no SECTION marker found")]
    MissingSection,
}

/// Result type alias for parser operations.
pub type DxfResult<T> = Result<T, DxfError>;

/// Bounds fallback when no entity contributes a coordinate.
const FALLBACK_BOUNDS: BoundingBox2D = BoundingBox2D {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 100.0,
    max_y: 100.0,
};

/// Estimated glyph width as a fraction of text height, used to grow the
/// bounds around text entities. Matches the writer-side callout layout;
/// preview parity depends on both using the same factor.
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// A parsed drawing: typed entities in file order plus accumulated bounds.
#[derive(Debug, Clone)]
pub struct ParsedDrawing {
    pub entities: Vec<DxfEntity>,
    pub bounds: BoundingBox2D,
}

/// One group code / value pair.
#[derive(Debug, Clone, Copy)]
struct Group<'a> {
    code: i32,
    value: &'a str,
}

/// Parser for the minimal ASCII DXF dialect.
pub struct DxfParser;

impl DxfParser {
    /// Quick sanity check that the text looks like a DXF document at all.
    pub fn validate_header(text: &str) -> DxfResult<()> {
        if text.lines().any(|l| l.trim() == "SECTION") {
            Ok(())
        } else {
            Err(DxfError::MissingSection)
        }
    }

    /// Parse drawing text into entities and bounds.
    pub fn parse(text: &str) -> DxfResult<ParsedDrawing> {
        let groups = tokenize(text)?;
        let mut entities = Vec::new();
        let mut bounds = BoundingBox2D::empty();

        let mut in_entities = false;
        let mut i = 0;
        while i < groups.len() {
            let g = groups[i];
            match (g.code, g.value) {
                (0, "SECTION") => {
                    // The section name follows as a group 2 pair.
                    if let Some(name) = groups.get(i + 1).filter(|n| n.code == 2) {
                        in_entities = name.value == "ENTITIES";
                        i += 2;
                        continue;
                    }
                    i += 1;
                }
                (0, "ENDSEC") => {
                    in_entities = false;
                    i += 1;
                }
                (0, kind) if in_entities => {
                    i += 1;
                    match kind {
                        "LINE" => entities.push(parse_line(&groups, &mut i, &mut bounds)?),
                        "CIRCLE" => entities.push(parse_circle(&groups, &mut i, &mut bounds)?),
                        "TEXT" => entities.push(parse_text(&groups, &mut i, &mut bounds)?),
                        "POLYLINE" => entities.push(parse_polyline(&groups, &mut i, &mut bounds)?),
                        other => {
                            // Forward compatibility: unknown entity kinds
                            // are dropped, not errors.
                            debug!(entity = other, "skipping unsupported entity type");
                            skip_entity(&groups, &mut i);
                        }
                    }
                }
                _ => i += 1,
            }
        }

        if !bounds.is_valid() {
            bounds = FALLBACK_BOUNDS;
        }

        Ok(ParsedDrawing { entities, bounds })
    }
}

/// Split the text into (code, value) pairs on alternating lines.
fn tokenize(text: &str) -> DxfResult<Vec<Group<'_>>> {
    let mut groups = Vec::new();
    let mut lines = text.lines().enumerate();
    while let Some((line_no, code_line)) = lines.next() {
        let raw = code_line.trim();
        if raw.is_empty() && lines.clone().next().is_none() {
            // Trailing blank line after EOF.
            break;
        }
        let code: i32 = raw.parse().map_err(|_| DxfError::InvalidGroupCode {
            raw: raw.to_string(),
            line: line_no + 1,
        })?;
        let value = match lines.next() {
            Some((_, v)) => v.trim(),
            None => return Err(DxfError::TruncatedPair { code }),
        };
        groups.push(Group { code, value });
    }
    Ok(groups)
}

fn parse_f64(g: Group<'_>) -> DxfResult<f64> {
    g.value.parse().map_err(|_| DxfError::InvalidNumber {
        code: g.code,
        value: g.value.to_string(),
    })
}

/// Advance past the current entity's fields without interpreting them.
fn skip_entity(groups: &[Group<'_>], i: &mut usize) {
    while *i < groups.len() && groups[*i].code != 0 {
        *i += 1;
    }
}

fn parse_line(
    groups: &[Group<'_>],
    i: &mut usize,
    bounds: &mut BoundingBox2D,
) -> DxfResult<DxfEntity> {
    let mut line = DxfLine {
        start: Point::ORIGIN,
        end: Point::ORIGIN,
        layer: LAYER_DEFAULT.to_string(),
        color: COLOR_WHITE,
    };
    while *i < groups.len() && groups[*i].code != 0 {
        let g = groups[*i];
        match g.code {
            8 => line.layer = g.value.to_string(),
            62 => line.color = parse_f64(g)? as i32,
            10 => line.start.x = parse_f64(g)?,
            20 => line.start.y = parse_f64(g)?,
            11 => line.end.x = parse_f64(g)?,
            21 => line.end.y = parse_f64(g)?,
            _ => {}
        }
        *i += 1;
    }
    bounds.include_point(line.start);
    bounds.include_point(line.end);
    Ok(DxfEntity::Line(line))
}

fn parse_circle(
    groups: &[Group<'_>],
    i: &mut usize,
    bounds: &mut BoundingBox2D,
) -> DxfResult<DxfEntity> {
    let mut circle = DxfCircle {
        center: Point::ORIGIN,
        radius: 0.0,
        layer: LAYER_DEFAULT.to_string(),
        color: COLOR_WHITE,
    };
    while *i < groups.len() && groups[*i].code != 0 {
        let g = groups[*i];
        match g.code {
            8 => circle.layer = g.value.to_string(),
            62 => circle.color = parse_f64(g)? as i32,
            10 => circle.center.x = parse_f64(g)?,
            20 => circle.center.y = parse_f64(g)?,
            40 => circle.radius = parse_f64(g)?,
            _ => {}
        }
        *i += 1;
    }
    bounds.include_xy(circle.center.x - circle.radius, circle.center.y - circle.radius);
    bounds.include_xy(circle.center.x + circle.radius, circle.center.y + circle.radius);
    Ok(DxfEntity::Circle(circle))
}

fn parse_text(
    groups: &[Group<'_>],
    i: &mut usize,
    bounds: &mut BoundingBox2D,
) -> DxfResult<DxfEntity> {
    let mut text = DxfText {
        content: String::new(),
        position: Point::ORIGIN,
        height: 0.0,
        rotation: 0.0,
        layer: LAYER_DEFAULT.to_string(),
        color: COLOR_WHITE,
    };
    while *i < groups.len() && groups[*i].code != 0 {
        let g = groups[*i];
        match g.code {
            8 => text.layer = g.value.to_string(),
            62 => text.color = parse_f64(g)? as i32,
            10 => text.position.x = parse_f64(g)?,
            20 => text.position.y = parse_f64(g)?,
            40 => text.height = parse_f64(g)?,
            50 => text.rotation = parse_f64(g)?,
            1 => text.content = g.value.to_string(),
            _ => {}
        }
        *i += 1;
    }
    // Glyph-width estimate; true metrics are out of scope for preview.
    let est_width = text.content.chars().count() as f64 * text.height * GLYPH_WIDTH_FACTOR;
    bounds.include_point(text.position);
    bounds.include_xy(text.position.x + est_width, text.position.y + text.height);
    Ok(DxfEntity::Text(text))
}

fn parse_polyline(
    groups: &[Group<'_>],
    i: &mut usize,
    bounds: &mut BoundingBox2D,
) -> DxfResult<DxfEntity> {
    let mut poly = DxfPolyline {
        vertices: Vec::new(),
        closed: false,
        layer: LAYER_DEFAULT.to_string(),
        color: COLOR_WHITE,
    };
    // Header fields up to the first nested record.
    while *i < groups.len() && groups[*i].code != 0 {
        let g = groups[*i];
        match g.code {
            8 => poly.layer = g.value.to_string(),
            62 => poly.color = parse_f64(g)? as i32,
            70 => poly.closed = parse_f64(g)? as i64 & 1 == 1,
            _ => {}
        }
        *i += 1;
    }
    // Vertex sequence, terminated by SEQEND.
    while *i < groups.len() {
        let g = groups[*i];
        if g.code == 0 && g.value == "SEQEND" {
            *i += 1;
            skip_entity(groups, i);
            break;
        }
        if g.code == 0 && g.value == "VERTEX" {
            *i += 1;
            let mut vertex = Point::ORIGIN;
            while *i < groups.len() && groups[*i].code != 0 {
                let g = groups[*i];
                match g.code {
                    10 => vertex.x = parse_f64(g)?,
                    20 => vertex.y = parse_f64(g)?,
                    _ => {}
                }
                *i += 1;
            }
            bounds.include_point(vertex);
            poly.vertices.push(vertex);
        } else {
            // Anything else ends the sequence early.
            break;
        }
    }
    Ok(DxfEntity::Polyline(poly))
}

use crate::error::GraphError;
use crate::ir::{Drawing, Node, Segment};
use std::collections::BTreeMap;

/// Parses the two dataset files of a drawing export into the entity
/// lists the pipeline consumes. Errors out when both datasets are empty
/// — there is no graph to compute.
pub fn parse_drawing(
    nodes_data: &str,
    polylines_data: &str,
    separator: &str,
) -> Result<Drawing, GraphError> {
    let drawing = Drawing {
        nodes: parse_nodes(nodes_data, separator)?,
        segments: parse_polylines(polylines_data, separator)?,
    };
    if drawing.is_empty() {
        return Err(GraphError::EmptyDrawing);
    }
    Ok(drawing)
}

/// Node dataset: one marker per line, `label<sep>x<sep>y`. Blank lines
/// are skipped; anything else malformed is reported with its line
/// number.
pub fn parse_nodes(input: &str, separator: &str) -> Result<Vec<Node>, GraphError> {
    let mut nodes = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(separator).collect();
        if fields.len() != 3 {
            return Err(dataset_error(
                idx,
                format!(
                    "expected label{separator}x{separator}y, found {} fields",
                    fields.len()
                ),
            ));
        }
        let label = fields[0].trim();
        if label.is_empty() {
            return Err(dataset_error(idx, "empty node label".to_string()));
        }
        nodes.push(Node {
            label: label.to_string(),
            x: parse_coordinate(fields[1], idx)?,
            y: parse_coordinate(fields[2], idx)?,
        });
    }
    Ok(nodes)
}

/// Polyline dataset: one vertex per line,
/// `polyline_id<sep>vertex_index<sep>x<sep>y`. Vertices sharing an id
/// form one polyline, ordered by vertex index; each polyline with at
/// least two vertices yields a segment spanning its first and last
/// vertex with the summed geometric length. A single-vertex polyline is
/// degenerate geometry and is dropped.
pub fn parse_polylines(input: &str, separator: &str) -> Result<Vec<Segment>, GraphError> {
    let mut polylines: BTreeMap<u64, Vec<(u64, f64, f64)>> = BTreeMap::new();
    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(separator).collect();
        if fields.len() != 4 {
            return Err(dataset_error(
                idx,
                format!(
                    "expected id{separator}vertex{separator}x{separator}y, found {} fields",
                    fields.len()
                ),
            ));
        }
        let id = parse_index(fields[0], idx, "polyline id")?;
        let vertex = parse_index(fields[1], idx, "vertex index")?;
        let x = parse_coordinate(fields[2], idx)?;
        let y = parse_coordinate(fields[3], idx)?;
        polylines.entry(id).or_default().push((vertex, x, y));
    }

    let mut segments = Vec::with_capacity(polylines.len());
    for (_, mut vertices) in polylines {
        vertices.sort_by_key(|vertex| vertex.0);
        if vertices.len() < 2 {
            continue;
        }
        let length: f64 = vertices
            .windows(2)
            .map(|span| (span[1].1 - span[0].1).hypot(span[1].2 - span[0].2))
            .sum();
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        segments.push(Segment {
            x_start: first.1,
            y_start: first.2,
            x_end: last.1,
            y_end: last.2,
            length,
        });
    }
    Ok(segments)
}

fn parse_coordinate(field: &str, line_idx: usize) -> Result<f64, GraphError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| dataset_error(line_idx, format!("invalid coordinate {:?}", field.trim())))
}

fn parse_index(field: &str, line_idx: usize, what: &str) -> Result<u64, GraphError> {
    field
        .trim()
        .parse::<u64>()
        .map_err(|_| dataset_error(line_idx, format!("invalid {what} {:?}", field.trim())))
}

fn dataset_error(line_idx: usize, message: String) -> GraphError {
    GraphError::Dataset {
        line: line_idx + 1,
        message,
    }
}

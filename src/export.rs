use crate::config::FormatConfig;
use crate::error::GraphError;
use crate::graph::GraphModel;
use crate::shortest::ShortestPathMatrix;
use std::path::{Path, PathBuf};

pub const DISTANCES_FILENAME: &str = "shortest_path_matrix_distances.csv";
pub const ROUTES_FILENAME: &str = "shortest_path_matrix_routes.csv";

/// Formats one distance cell: fixed decimals with the configured decimal
/// separator, infinity as the configured symbol.
pub fn format_distance(value: f64, format: &FormatConfig) -> String {
    if value.is_infinite() {
        return format.infinity.clone();
    }
    let cell = format!("{value:.precision$}", precision = format.decimal_places);
    if format.decimal_separator == '.' {
        cell
    } else {
        cell.replace('.', &format.decimal_separator.to_string())
    }
}

/// Header row shared by both tables: an empty leading cell, then every
/// node label. Every cell, the last one included, is terminated by the
/// separator; consumers of these tables rely on the trailing separator.
fn header_line(model: &GraphModel, separator: &str) -> String {
    let mut line = String::from(separator);
    for node in &model.nodes {
        line.push_str(&node.label);
        line.push_str(separator);
    }
    line
}

pub fn render_distance_table(
    matrix: &ShortestPathMatrix,
    model: &GraphModel,
    format: &FormatConfig,
) -> String {
    let separator = format.list_separator.as_str();
    let mut out = header_line(model, separator);
    out.push('\n');
    for (idx, row) in matrix.iter().enumerate() {
        out.push_str(&model.nodes[idx].label);
        out.push_str(separator);
        for cell in row {
            out.push_str(&format_distance(cell.distance, format));
            out.push_str(separator);
        }
        out.push('\n');
    }
    out
}

pub fn render_route_table(
    matrix: &ShortestPathMatrix,
    model: &GraphModel,
    format: &FormatConfig,
) -> String {
    let separator = format.list_separator.as_str();
    let mut out = header_line(model, separator);
    out.push('\n');
    for (idx, row) in matrix.iter().enumerate() {
        out.push_str(&model.nodes[idx].label);
        out.push_str(separator);
        for cell in row {
            out.push_str(&cell.route_labels.join(&format.route_separator));
            out.push_str(separator);
        }
        out.push('\n');
    }
    out
}

/// Writes both tables into `out_dir`, overwriting unconditionally. The
/// two files are independent writes: if the second one fails the first
/// stays on disk.
pub fn export_matrices(
    matrix: &ShortestPathMatrix,
    model: &GraphModel,
    out_dir: &Path,
    format: &FormatConfig,
) -> Result<(PathBuf, PathBuf), GraphError> {
    let distances_path = out_dir.join(DISTANCES_FILENAME);
    std::fs::write(&distances_path, render_distance_table(matrix, model, format))?;
    let routes_path = out_dir.join(ROUTES_FILENAME);
    std::fs::write(&routes_path, render_route_table(matrix, model, format))?;
    Ok((distances_path, routes_path))
}

use crate::graph::GraphModel;
use crate::shortest::ShortestPathMatrix;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON mirror of the computed matrix, for debugging and downstream
/// tooling. Unreachable pairs carry `distance: null` since JSON has no
/// infinity literal.
#[derive(Debug, Serialize)]
pub struct MatrixDump {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<CellDump>>,
}

#[derive(Debug, Serialize)]
pub struct CellDump {
    pub distance: Option<f64>,
    pub route: Vec<String>,
}

impl MatrixDump {
    pub fn from_matrix(matrix: &ShortestPathMatrix, model: &GraphModel) -> Self {
        let rows = matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| CellDump {
                        distance: cell.distance.is_finite().then_some(cell.distance),
                        route: cell.route_labels.clone(),
                    })
                    .collect()
            })
            .collect();

        MatrixDump {
            labels: model.labels(),
            rows,
        }
    }
}

pub fn write_matrix_dump(
    path: &Path,
    matrix: &ShortestPathMatrix,
    model: &GraphModel,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = MatrixDump::from_matrix(matrix, model);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

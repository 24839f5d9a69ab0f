use crate::error::GraphError;
use crate::ir::{Drawing, Node};
use std::collections::HashMap;

/// Label-sorted node list plus the dense symmetric adjacency matrix.
/// `adjacency[i][j]` is the segment length between nodes `i` and `j`,
/// with `0.0` meaning "no edge" — a real zero-length edge cannot exist.
#[derive(Debug, Clone)]
pub struct GraphModel {
    pub nodes: Vec<Node>,
    pub adjacency: Vec<Vec<f64>>,
}

fn position_key(x: f64, y: f64) -> (u64, u64) {
    (x.to_bits(), y.to_bits())
}

impl GraphModel {
    /// Builds the matrix by resolving segment endpoints against node
    /// positions. Endpoints must be bit-identical to a node coordinate
    /// pair; a segment with an unmatched endpoint is dropped. When
    /// several segments connect the same pair, the last one wins.
    ///
    /// The label sort fixes node index assignment, so it also fixes the
    /// row/column order of everything exported downstream.
    // TODO: optional snap tolerance for endpoint matching; exact f64
    // equality silently drops segments whose endpoints were placed by
    // hand rather than snapped.
    pub fn build(drawing: Drawing) -> Result<Self, GraphError> {
        if drawing.is_empty() {
            return Err(GraphError::EmptyDrawing);
        }

        let Drawing {
            mut nodes,
            segments,
        } = drawing;
        nodes.sort_by(|a, b| a.label.cmp(&b.label));
        for pair in nodes.windows(2) {
            if pair[0].label == pair[1].label {
                return Err(GraphError::DuplicateLabel {
                    label: pair[0].label.clone(),
                });
            }
        }

        let mut index_by_position: HashMap<(u64, u64), usize> =
            HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if let Some(prev) = index_by_position.insert(position_key(node.x, node.y), idx) {
                return Err(GraphError::DuplicateCoordinate {
                    first: nodes[prev].label.clone(),
                    second: node.label.clone(),
                    x: node.x,
                    y: node.y,
                });
            }
        }

        let mut adjacency = vec![vec![0.0; nodes.len()]; nodes.len()];
        for segment in &segments {
            let start = index_by_position.get(&position_key(segment.x_start, segment.y_start));
            let end = index_by_position.get(&position_key(segment.x_end, segment.y_end));
            let (Some(&i), Some(&j)) = (start, end) else {
                continue;
            };
            adjacency[i][j] = segment.length;
            adjacency[j][i] = segment.length;
        }

        Ok(Self { nodes, adjacency })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.label.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Segment;

    fn triangle() -> Drawing {
        Drawing {
            nodes: vec![
                Node::new("C", 3.0, 4.0),
                Node::new("A", 0.0, 0.0),
                Node::new("B", 3.0, 0.0),
            ],
            segments: vec![
                Segment {
                    x_start: 0.0,
                    y_start: 0.0,
                    x_end: 3.0,
                    y_end: 0.0,
                    length: 3.0,
                },
                Segment {
                    x_start: 3.0,
                    y_start: 0.0,
                    x_end: 3.0,
                    y_end: 4.0,
                    length: 4.0,
                },
            ],
        }
    }

    #[test]
    fn build_sorts_nodes_and_fills_symmetric_matrix() {
        let model = GraphModel::build(triangle()).unwrap();
        assert_eq!(model.labels(), vec!["A", "B", "C"]);
        assert_eq!(model.adjacency[0][1], 3.0);
        assert_eq!(model.adjacency[1][0], 3.0);
        assert_eq!(model.adjacency[1][2], 4.0);
        assert_eq!(model.adjacency[2][1], 4.0);
        assert_eq!(model.adjacency[0][2], 0.0);
    }

    #[test]
    fn unmatched_endpoint_discards_segment() {
        let mut drawing = triangle();
        drawing.segments.push(Segment {
            x_start: 0.0,
            y_start: 0.0,
            x_end: 99.0,
            y_end: 99.0,
            length: 140.0,
        });
        let model = GraphModel::build(drawing).unwrap();
        let edge_count: usize = model
            .adjacency
            .iter()
            .map(|row| row.iter().filter(|w| **w > 0.0).count())
            .sum();
        assert_eq!(edge_count, 4);
    }

    #[test]
    fn repeated_pair_keeps_last_segment_length() {
        let mut drawing = triangle();
        drawing.segments.push(Segment {
            x_start: 3.0,
            y_start: 0.0,
            x_end: 0.0,
            y_end: 0.0,
            length: 7.5,
        });
        let model = GraphModel::build(drawing).unwrap();
        assert_eq!(model.adjacency[0][1], 7.5);
        assert_eq!(model.adjacency[1][0], 7.5);
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let mut drawing = triangle();
        drawing.nodes.push(Node::new("A", 9.0, 9.0));
        let err = GraphModel::build(drawing).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateLabel { label } if label == "A"));
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let mut drawing = triangle();
        drawing.nodes.push(Node::new("D", 0.0, 0.0));
        let err = GraphModel::build(drawing).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateCoordinate { .. }));
    }

    #[test]
    fn empty_drawing_is_rejected() {
        let err = GraphModel::build(Drawing::default()).unwrap_err();
        assert!(matches!(err, GraphError::EmptyDrawing));
    }
}

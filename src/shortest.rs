use crate::error::GraphError;
use crate::graph::GraphModel;

/// Shortest distance from a source node to one target, plus the ordered
/// intermediate stops on the way (source and target excluded). An
/// unreachable target keeps `f64::INFINITY` and an empty route.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceAndRoute {
    pub distance: f64,
    pub route: Vec<usize>,
    pub route_labels: Vec<String>,
}

impl DistanceAndRoute {
    fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            route: Vec::new(),
            route_labels: Vec::new(),
        }
    }
}

/// Row `s` holds the single-source results with node `s` as source.
pub type ShortestPathMatrix = Vec<Vec<DistanceAndRoute>>;

/// Picks the next vertex to settle: scan the worklist in order and keep
/// any index whose distance is `<=` the running minimum, so among equal
/// minima the one scanned last wins. The exported tables depend on this
/// exact tie-break; do not replace it with a first-minimum scan or a
/// heap.
fn next_vertex(worklist: &mut Vec<usize>, routes: &[DistanceAndRoute]) -> usize {
    let mut min = f64::INFINITY;
    let mut keep = 0;
    for (pos, &candidate) in worklist.iter().enumerate() {
        if routes[candidate].distance <= min {
            min = routes[candidate].distance;
            keep = pos;
        }
    }
    worklist.remove(keep)
}

/// Single-source shortest paths over the dense matrix: the classic
/// label-setting loop with an O(n) linear scan per round instead of a
/// priority structure. O(n²) per source; fine for drawing-sized graphs.
///
/// `source` must index into the matrix. Weights are non-negative by
/// construction (segment lengths); `0.0` entries mean "no edge" and are
/// never relaxed.
pub fn shortest_paths(
    adjacency: &[Vec<f64>],
    source: usize,
    labels: &[String],
) -> Result<Vec<DistanceAndRoute>, GraphError> {
    let len = adjacency.len();
    if len == 0 || adjacency.iter().any(|row| row.len() != len) {
        return Err(GraphError::BadMatrix);
    }

    let mut routes: Vec<DistanceAndRoute> =
        (0..len).map(|_| DistanceAndRoute::unreached()).collect();
    routes[source].distance = 0.0;
    let mut worklist: Vec<usize> = (0..len).collect();

    while !worklist.is_empty() {
        let u = next_vertex(&mut worklist, &routes);
        for v in 0..len {
            if adjacency[u][v] > 0.0 {
                let candidate = routes[u].distance + adjacency[u][v];
                if candidate < routes[v].distance {
                    let mut route = routes[u].route.clone();
                    let mut route_labels = routes[u].route_labels.clone();
                    if u != source {
                        route.push(u);
                        route_labels.push(labels[u].clone());
                    }
                    routes[v] = DistanceAndRoute {
                        distance: candidate,
                        route,
                        route_labels,
                    };
                }
            }
        }
    }

    Ok(routes)
}

/// All-pairs matrix: one single-source run per node, ascending index
/// order, results positional. O(n³) total with the linear-scan
/// selection — a deliberate ceiling, not an oversight; graphs traced
/// from drawings stay in the tens of nodes.
pub fn shortest_path_matrix(model: &GraphModel) -> Result<ShortestPathMatrix, GraphError> {
    let labels = model.labels();
    let mut matrix = Vec::with_capacity(model.len());
    for source in 0..model.len() {
        matrix.push(shortest_paths(&model.adjacency, source, &labels)?);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    /// A(0)-B(1) weight 3, B-C(2) weight 4, A-C absent.
    fn triangle() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 3.0, 0.0],
            vec![3.0, 0.0, 4.0],
            vec![0.0, 4.0, 0.0],
        ]
    }

    #[test]
    fn source_row_is_zero_with_empty_route() {
        let routes = shortest_paths(&triangle(), 0, &labels(&["A", "B", "C"])).unwrap();
        assert_eq!(routes[0].distance, 0.0);
        assert!(routes[0].route.is_empty());
        assert!(routes[0].route_labels.is_empty());
    }

    #[test]
    fn two_hop_path_accumulates_distance_and_route() {
        let routes = shortest_paths(&triangle(), 0, &labels(&["A", "B", "C"])).unwrap();
        assert_eq!(routes[2].distance, 7.0);
        assert_eq!(routes[2].route, vec![1]);
        assert_eq!(routes[2].route_labels, vec!["B"]);
    }

    #[test]
    fn unreachable_node_stays_infinite() {
        let adjacency = vec![
            vec![0.0, 3.0, 0.0],
            vec![3.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ];
        let routes = shortest_paths(&adjacency, 0, &labels(&["A", "B", "D"])).unwrap();
        assert!(routes[2].distance.is_infinite());
        assert!(routes[2].route.is_empty());
    }

    #[test]
    fn empty_matrix_is_a_format_error() {
        let err = shortest_paths(&[], 0, &[]).unwrap_err();
        assert!(matches!(err, GraphError::BadMatrix));
    }

    #[test]
    fn ragged_matrix_is_a_format_error() {
        let adjacency = vec![vec![0.0, 1.0], vec![1.0]];
        let err = shortest_paths(&adjacency, 0, &labels(&["A", "B"])).unwrap_err();
        assert!(matches!(err, GraphError::BadMatrix));
    }

    /// Diamond A-B, A-C, B-D, C-D with unit weights: after settling A,
    /// both B and C sit at distance 1; the keep-if-equal scan settles C
    /// (the later index) first, so D's route goes through C. A
    /// first-minimum scan would route through B instead.
    #[test]
    fn equal_minimum_candidates_settle_in_scan_order() {
        let adjacency = vec![
            vec![0.0, 1.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0, 0.0],
        ];
        let routes = shortest_paths(&adjacency, 0, &labels(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(routes[3].distance, 2.0);
        assert_eq!(routes[3].route_labels, vec!["C"]);
    }

    #[test]
    fn all_pairs_matrix_is_symmetric() {
        let model = GraphModel {
            nodes: vec![
                crate::ir::Node::new("A", 0.0, 0.0),
                crate::ir::Node::new("B", 3.0, 0.0),
                crate::ir::Node::new("C", 3.0, 4.0),
            ],
            adjacency: triangle(),
        };
        let matrix = shortest_path_matrix(&model).unwrap();
        for s in 0..3 {
            for t in 0..3 {
                assert_eq!(matrix[s][t].distance, matrix[t][s].distance);
            }
        }
    }

    #[test]
    fn all_pairs_diagonal_is_zero() {
        let model = GraphModel {
            nodes: vec![
                crate::ir::Node::new("A", 0.0, 0.0),
                crate::ir::Node::new("B", 3.0, 0.0),
                crate::ir::Node::new("C", 3.0, 4.0),
            ],
            adjacency: triangle(),
        };
        let matrix = shortest_path_matrix(&model).unwrap();
        for (idx, row) in matrix.iter().enumerate() {
            assert_eq!(row[idx].distance, 0.0);
            assert!(row[idx].route.is_empty());
        }
    }
}

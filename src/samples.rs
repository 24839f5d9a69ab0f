use crate::error::GraphError;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// A bundled drawing export, in the same dataset format the parser
/// reads from disk (semicolon-separated).
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub nodes: &'static str,
    pub polylines: &'static str,
}

static SAMPLES: Lazy<BTreeMap<&'static str, Sample>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "graph1",
            Sample {
                nodes: include_str!("samples/graph1_nodes.csv"),
                polylines: include_str!("samples/graph1_polylines.csv"),
            },
        ),
        (
            "graph2",
            Sample {
                nodes: include_str!("samples/graph2_nodes.csv"),
                polylines: include_str!("samples/graph2_polylines.csv"),
            },
        ),
    ])
});

pub fn find(name: &str) -> Result<Sample, GraphError> {
    SAMPLES
        .get(name)
        .copied()
        .ok_or_else(|| GraphError::UnknownSample {
            name: name.to_string(),
            available: names().join(", "),
        })
}

pub fn names() -> Vec<&'static str> {
    SAMPLES.keys().copied().collect()
}

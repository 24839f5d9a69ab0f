use thiserror::Error;

/// Terminal failures of the matrix pipeline. Every variant aborts the
/// whole export; there is no partial-result or retry path. Output files
/// already flushed before the failure are left in place.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The drawing supplied no nodes and no segments at all.
    #[error("no graph to compute: the drawing contains no nodes or segments")]
    EmptyDrawing,

    /// The adjacency matrix is empty or not square.
    #[error("graph error, wrong format or no nodes to compute")]
    BadMatrix,

    /// Two nodes carry the same label; matrix rows would be ambiguous.
    #[error("duplicate node label {label:?}")]
    DuplicateLabel { label: String },

    /// Two nodes sit on the same point; endpoint matching cannot tell
    /// them apart.
    #[error("nodes {first:?} and {second:?} share the position ({x}, {y})")]
    DuplicateCoordinate {
        first: String,
        second: String,
        x: f64,
        y: f64,
    },

    /// A dataset line did not match the expected record shape.
    #[error("line {line}: {message}")]
    Dataset { line: usize, message: String },

    #[error("unknown sample {name:?} (available: {available})")]
    UnknownSample { name: String, available: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

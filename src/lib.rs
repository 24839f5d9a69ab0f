#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod export;
pub mod graph;
pub mod ir;
pub mod parser;
pub mod samples;
pub mod shortest;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, FormatConfig};
pub use error::GraphError;
pub use graph::GraphModel;
pub use shortest::{DistanceAndRoute, ShortestPathMatrix, shortest_path_matrix, shortest_paths};

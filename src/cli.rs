use crate::config::{Config, load_config};
use crate::dump::write_matrix_dump;
use crate::export::export_matrices;
use crate::graph::GraphModel;
use crate::ir::Drawing;
use crate::parser::{parse_drawing, parse_nodes, parse_polylines};
use crate::samples;
use crate::shortest::shortest_path_matrix;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pmx",
    version,
    about = "All-pairs shortest-path matrix exporter for drawing graphs"
)]
pub struct Args {
    /// Node dataset file (label;x;y per line)
    #[arg(short = 'n', long = "nodes")]
    pub nodes: Option<PathBuf>,

    /// Polyline dataset file (id;vertex;x;y per line)
    #[arg(short = 'p', long = "polylines")]
    pub polylines: Option<PathBuf>,

    /// Bundled sample dataset (graph1, graph2)
    #[arg(short = 's', long = "sample")]
    pub sample: Option<String>,

    /// Directory receiving the two matrix files
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,

    /// Config JSON file (formatting overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Field separator for the exported tables
    #[arg(long = "separator")]
    pub separator: Option<String>,

    /// Decimal separator for distance cells
    #[arg(long = "decimal")]
    pub decimal: Option<char>,

    /// Also write the computed matrix as pretty JSON
    #[arg(long = "dumpJson")]
    pub dump_json: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(separator) = &args.separator {
        config.format.list_separator = separator.clone();
    }
    if let Some(decimal) = args.decimal {
        config.format.decimal_separator = decimal;
    }

    let drawing = read_drawing(&args, &config)?;
    let model = GraphModel::build(drawing)?;
    let matrix = shortest_path_matrix(&model)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;
    let (distances, routes) = export_matrices(&matrix, &model, &args.output, &config.format)?;
    if let Some(path) = &args.dump_json {
        write_matrix_dump(path, &matrix, &model)
            .with_context(|| format!("writing matrix dump {}", path.display()))?;
    }

    println!("{}", distances.display());
    println!("{}", routes.display());
    Ok(())
}

fn read_drawing(args: &Args, config: &Config) -> Result<Drawing> {
    if let Some(name) = &args.sample {
        if args.nodes.is_some() || args.polylines.is_some() {
            anyhow::bail!("--sample cannot be combined with dataset files");
        }
        let sample = samples::find(name)?;
        return Ok(parse_drawing(
            sample.nodes,
            sample.polylines,
            &config.dataset.separator,
        )?);
    }

    let (Some(nodes_path), Some(polylines_path)) = (&args.nodes, &args.polylines) else {
        anyhow::bail!("either --sample or both --nodes and --polylines are required");
    };
    let nodes_data = std::fs::read_to_string(nodes_path)
        .with_context(|| format!("reading {}", nodes_path.display()))?;
    let polylines_data = std::fs::read_to_string(polylines_path)
        .with_context(|| format!("reading {}", polylines_path.display()))?;
    let drawing = Drawing {
        nodes: parse_nodes(&nodes_data, &config.dataset.separator)
            .with_context(|| format!("parsing {}", nodes_path.display()))?,
        segments: parse_polylines(&polylines_data, &config.dataset.separator)
            .with_context(|| format!("parsing {}", polylines_path.display()))?,
    };
    if drawing.is_empty() {
        return Err(crate::error::GraphError::EmptyDrawing.into());
    }
    Ok(drawing)
}

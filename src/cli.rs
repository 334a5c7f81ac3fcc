use crate::config::load_config;
use crate::graph::{GraphSnapshot, Size};
use crate::layout::{self, Strategy};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pvl", version, about = "Automatic layout for pipeline graphs")]
pub struct Args {
    /// Input graph JSON ({ nodes, edges }) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Engine config file (JSON5 accepted)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Fit the result into a view of this width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Fit the result into a view of this height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Padding kept free inside the view when fitting
    #[arg(long = "padding", default_value_t = 50.0)]
    pub padding: f32,

    /// Force an arrangement strategy instead of the heuristic
    #[arg(short = 's', long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StrategyArg {
    Grid,
    Circular,
    Hierarchical,
    Layered,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Grid => Strategy::Grid,
            StrategyArg::Circular => Strategy::Circular,
            StrategyArg::Hierarchical => Strategy::Hierarchical,
            StrategyArg::Layered => Strategy::Layered,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;

    let input = read_input(args.input.as_deref())?;
    let snapshot: GraphSnapshot =
        serde_json::from_str(&input).context("invalid graph document")?;

    let laid_out = match args.strategy {
        Some(strategy) => layout::compute_layout_using(
            strategy.into(),
            &snapshot.nodes,
            &snapshot.edges,
            &config,
        ),
        None => layout::compute_layout_with(&snapshot.nodes, &snapshot.edges, &config),
    };

    let nodes = match (args.width, args.height) {
        (Some(width), Some(height)) => {
            layout::fit_to_viewport_with(
                &laid_out,
                Size::new(width, height),
                args.padding,
                &config.layout,
            )
            .nodes
        }
        _ => laid_out,
    };

    let document = GraphSnapshot {
        nodes,
        edges: snapshot.edges,
    };
    let json = serde_json::to_string_pretty(&document)?;
    write_output(&json, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(contents);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

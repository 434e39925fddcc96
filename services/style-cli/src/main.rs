//! Styled-layer export tool.
//!
//! Loads a GeoJSON feature collection, classifies it for a mode and a pair
//! of years, and writes the styled layers plus legend data as one JSON
//! document for the map front end.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cropmap_common::feature::FeatureCollection;
use cropmap_common::{fields, MapMode};
use styler::legend::LegendSpec;
use styler::{CompareView, FeatureSummary, RenderOptions, StyledLayer};

#[derive(Parser, Debug)]
#[command(name = "style-cli")]
#[command(about = "Export styled choropleth layers and legend data")]
struct Args {
    /// Input GeoJSON feature collection
    #[arg(short, long)]
    data: PathBuf,

    /// Visualization mode: yield, bivariate, dotdensity
    #[arg(short, long, default_value = "yield")]
    mode: String,

    /// Year for the left map pane
    #[arg(long, default_value_t = 2019)]
    year_a: u16,

    /// Year for the right map pane (defaults to the left pane's year)
    #[arg(long)]
    year_b: Option<u16>,

    /// Include per-feature summary records for the left pane's year
    #[arg(long)]
    summaries: bool,

    /// Output path; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Everything the front end needs for one render pass of both panes.
#[derive(Debug, Serialize)]
struct ExportDocument {
    mode: MapMode,
    year_a: u16,
    year_b: u16,
    layer_a: Option<StyledLayer>,
    layer_b: Option<StyledLayer>,
    legend: Option<LegendSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summaries: Option<Vec<FeatureSummary>>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let document = run(&args)?;
    let json = serde_json::to_string_pretty(&document)?;

    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote export document");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn run(args: &Args) -> Result<ExportDocument> {
    let options = RenderOptions::from_env();
    options
        .validate()
        .map_err(|message| anyhow::anyhow!("invalid render options: {message}"))?;

    let mode: MapMode = args.mode.parse()?;
    let year_a = args.year_a;
    let year_b = args.year_b.unwrap_or(year_a);

    let json = fs::read_to_string(&args.data)
        .with_context(|| format!("reading {}", args.data.display()))?;
    let collection = FeatureCollection::from_json(&json)?;
    if collection.is_empty() {
        return Err(cropmap_common::MapError::EmptyCollection.into());
    }
    info!(features = collection.len(), %mode, year_a, year_b, "loaded collection");

    // Catch a typo'd or absent year up front instead of rendering an
    // all-neutral map.
    fields::validate_fields(&collection, year_a)?;
    if year_b != year_a {
        fields::validate_fields(&collection, year_b)?;
    }

    let mut compare = CompareView::new(mode, year_a, year_b, options);
    let (layer_a, layer_b) = compare.layers(&collection);
    let legend = compare.legend();

    let summaries = args.summaries.then(|| {
        collection
            .features
            .iter()
            .map(|f| FeatureSummary::for_feature(f, year_a))
            .collect()
    });

    Ok(ExportDocument {
        mode,
        year_a,
        year_b,
        layer_a,
        layer_b,
        legend,
        summaries,
    })
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays clean for the exported document.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

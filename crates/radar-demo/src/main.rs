// File: crates/radar-demo/src/main.rs
// Summary: Demo host: loads options from TOML and/or label,value CSV, drives the renderer and writes a PNG.

use anyhow::{Context, Result};
use clap::Parser;
use radar_core::{theme, ChartConfig, RadarChart, RadarOptions, RasterSurface};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "radar-demo")]
#[command(version, about = "Render a radar chart to PNG")]
struct Args {
    /// TOML file with chart options (camelCase keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV with a header row and label,value columns; replaces labels/data
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Display size of the square surface, in logical pixels
    #[arg(long, default_value_t = 400.0)]
    size: f64,

    /// Device pixel ratio of the backing store
    #[arg(long, default_value_t = 2.0)]
    dpr: f64,

    /// Theme preset: neon, light, solarized-dark, solarized-light, high-contrast-dark
    #[arg(long)]
    theme: Option<String>,

    /// Output PNG path
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Grid size control (nominal 60..150), applied after construction
    #[arg(long)]
    radar_radius: Option<f64>,

    /// Horizontal label radius in pixels, applied after construction
    #[arg(long)]
    label_width: Option<f64>,

    /// Vertical label radius in pixels, applied after construction
    #[arg(long)]
    label_height: Option<f64>,

    /// Label font size in pixels, applied after construction
    #[arg(long)]
    label_font_size: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("radar_demo=info,radar_core=info")),
        )
        .init();

    let args = Args::parse();

    let mut opts = match &args.config {
        Some(path) => load_options(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RadarOptions::default(),
    };
    if let Some(name) = &args.theme {
        opts.theme = Some(name.clone());
    }
    if let Some(path) = &args.csv {
        let (labels, data) = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!(rows = labels.len(), "loaded CSV");
        opts.labels = Some(labels);
        opts.data = Some(data);
    }
    if opts.labels.is_none() {
        let (labels, data) = sample();
        opts.labels = Some(labels);
        opts.data.get_or_insert(data);
    }

    let backdrop = theme::find(opts.theme.as_deref().unwrap_or("neon")).background;
    let config = ChartConfig::from_options(opts)?;
    info!(points = config.point_count(), max_value = config.max_value, "chart configured");

    let surface = RasterSurface::new(args.size, args.size, args.dpr)?.with_background(backdrop);
    let mut chart = RadarChart::new(surface, config);
    chart.draw();

    // Each setter repaints on its own
    if let Some(v) = args.radar_radius { chart.set_radar_radius(v); }
    if let Some(v) = args.label_width { chart.set_label_width(v); }
    if let Some(v) = args.label_height { chart.set_label_height(v); }
    if let Some(v) = args.label_font_size { chart.set_label_font_size(v); }

    let out = args.out.unwrap_or_else(|| PathBuf::from("target/out/radar.png"));
    chart
        .surface_mut()
        .write_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    let (w, h) = chart.surface().backing_size();
    info!(path = %out.display(), width = w, height = h, "wrote chart");
    Ok(())
}

fn load_options(path: &Path) -> Result<RadarOptions> {
    let content = std::fs::read_to_string(path)?;
    let opts: RadarOptions = toml::from_str(&content)?;
    Ok(opts)
}

/// Load `label,value` rows. Column names are matched case-insensitively,
/// falling back to the first two columns.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "axis", "category"]).unwrap_or(0);
    let i_value = idx(&["value", "score", "data"]).unwrap_or(1);

    let mut labels = Vec::new();
    let mut data = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or("").trim().to_string();
        // Unparsable values stay in place as NaN so later axes keep their index
        let value = match rec.get(i_value).map(str::trim).map(str::parse::<f64>) {
            Some(Ok(v)) => v,
            _ => {
                warn!(row = row + 1, label = %label, "missing or invalid value, reading as 0");
                f64::NAN
            }
        };
        labels.push(label);
        data.push(value);
    }
    Ok((labels, data))
}

fn sample() -> (Vec<String>, Vec<f64>) {
    let labels = ["Speed", "Power", "Range", "Armor", "Agility", "Stealth"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    (labels, vec![7.5, 9.0, 4.0, 6.5, 8.0, 3.0])
}

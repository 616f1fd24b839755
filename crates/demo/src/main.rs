// File: crates/demo/src/main.rs
// Summary: Demo loads a month/inflow/outflow CSV and renders bar, line and doughnut charts to PNGs.
// A `.json` input is treated as a single chart configuration instead.

use anyhow::{Context, Result};
use minichart_core::{
    theme, ChartBuilder, ChartConfig, ChartOptions, ChartType, ColorSpec, Cutout, Dataset, LogicalSize, RenderOptions,
    SkiaSurface,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const OUT_WIDTH: f32 = 640.0;
const OUT_HEIGHT: f32 = 360.0;
const OUT_DENSITY: f32 = 2.0;

struct Row {
    month: String,
    inflow: f64,
    outflow: f64,
}

fn main() -> Result<()> {
    let _ = minichart_core::init_default_tracing();

    // Args: [input.csv|config.json] [out_dir] [theme]
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/cashflow.csv"));
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    let opts = RenderOptions::default().with_theme(theme::find(&args.next().unwrap_or_default()));

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    println!("Using input file: {}", input.display());

    let charts = if is_json(&input) {
        let text = std::fs::read_to_string(&input).with_context(|| format!("reading {}", input.display()))?;
        let config = ChartConfig::from_json(&text).with_context(|| format!("parsing {}", input.display()))?;
        vec![(file_stem(&input), config)]
    } else {
        let rows = load_cashflow_csv(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
        println!("Loaded {} months", rows.len());
        cashflow_charts(&rows)
    };

    for (name, config) in charts {
        let out = out_dir.join(format!("chart_{name}.png"));
        render_png(config, &opts, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn render_png(config: ChartConfig, opts: &RenderOptions, out: &Path) -> Result<()> {
    let surface = SkiaSurface::new(LogicalSize::new(OUT_WIDTH, OUT_HEIGHT), OUT_DENSITY);
    let mut chart = ChartBuilder::new().options(*opts).create(surface, config);
    info!(outcome = ?chart.last_outcome(), path = %out.display(), "rendered");

    let (px, w, h) = chart.surface_mut().read_rgba8()?;
    let img = image::RgbaImage::from_raw(w, h, px).context("pixel buffer does not match surface size")?;
    img.save(out).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Bar (inflow vs outflow), line (running balance) and doughnut (totals) from monthly rows.
fn cashflow_charts(rows: &[Row]) -> Vec<(String, ChartConfig)> {
    let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    let inflow: Vec<f64> = rows.iter().map(|r| r.inflow).collect();
    let outflow: Vec<f64> = rows.iter().map(|r| r.outflow).collect();
    let balance: Vec<f64> = rows
        .iter()
        .scan(0.0, |acc, r| {
            *acc += r.inflow - r.outflow;
            Some(*acc)
        })
        .collect();

    let bar = ChartConfig::new(ChartType::Bar, months.clone())
        .with_dataset(Dataset::new("Inflow", inflow.clone()).with_background(ColorSpec::single("rgba(25,135,84,.65)")))
        .with_dataset(Dataset::new("Outflow", outflow.clone()).with_background(ColorSpec::single("rgba(220,53,69,.65)")));

    let line = ChartConfig::new(ChartType::Line, months)
        .with_dataset(Dataset::new("Balance", balance));

    let totals = ChartConfig::new(ChartType::Doughnut, ["Inflow", "Outflow"])
        .with_dataset(
            Dataset::new("Total", vec![inflow.iter().sum::<f64>(), outflow.iter().sum::<f64>()])
                .with_background(ColorSpec::per_item(["#198754", "#dc3545"])),
        )
        .with_options(ChartOptions::default().with_cutout(Cutout::Percent(60.0)));

    vec![("bar".into(), bar), ("line".into(), line), ("doughnut".into(), totals)]
}

fn load_cashflow_csv(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_month = idx(&["month", "label", "date", "period"]).context("no month/label column")?;
    let i_in = idx(&["inflow", "in", "income", "credit"]).context("no inflow column")?;
    let i_out = idx(&["outflow", "out", "expense", "debit"]).context("no outflow column")?;

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (rec.get(i_month), num(i_in), num(i_out)) {
            (Some(month), Some(inflow), Some(outflow)) => out.push(Row { month: month.to_owned(), inflow, outflow }),
            _ => warn!(line = line + 2, "skipping malformed row"),
        }
    }
    Ok(out)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_owned()
}

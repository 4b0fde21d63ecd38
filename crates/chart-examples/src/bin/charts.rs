// File: crates/chart-examples/src/bin/charts.rs
// Summary: Renders chart JSON files given on the command line to PNG, or a line/radar/pie demo sheet
//          from one shared set of random items plus a function graph overlay when no file is given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{
    Canvas, Chart, CurveStyle, FuncConfig, FuncGraph, InterpolationKind, LineConfig, PieConfig,
    RadarConfig, Rgba, WeightedItem,
};
use chart_render_skia::{render, render_function, SkiaCanvas};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MARGIN: u32 = 50;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::var("CHART_SEED").ok().and_then(|s| s.parse().ok()).unwrap_or(7);
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

    let inputs: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        demo_sheet(&mut rng)?;
        return demo_functions(&mut rng);
    }

    for path in &inputs {
        let chart = match load_chart(path) {
            Ok(chart) => chart,
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "skipping chart");
                continue;
            }
        };
        let out = out_name(path);
        render(&chart, &mut rng)?.write_png(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn load_chart(path: &Path) -> Result<Chart> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse chart '{}'", path.display()))
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}

/// Line, radar and pie charts of the same items, side by side.
fn demo_sheet(rng: &mut Xoshiro256StarStar) -> Result<()> {
    let items: Vec<WeightedItem> = (0..12)
        .map(|_| {
            let color = Rgba::rgb(
                rng.random_range(128..=216),
                rng.random_range(128..=216),
                rng.random_range(128..=216),
            );
            WeightedItem::new(rng.random_range(1..=5) as f64).with_color(color)
        })
        .collect();

    let line_style = CurveStyle::line()
        .with_thickness(10)
        .with_fill(Rgba::new(23, 100, 231, 156))
        .with_outline(Rgba::rgb(45, 143, 197))
        .with_point_width(20)
        .with_only_source_points(true)
        .with_sample_count(items.len() * 5)
        .with_interpolation(InterpolationKind::Cubic);
    let radar_style = CurveStyle::radar()
        .with_thickness(10)
        .with_fill(Rgba::new(167, 33, 242, 156))
        .with_outline(Rgba::rgb(189, 12, 234))
        .with_point_width(20)
        .with_sample_count(items.len())
        .with_interpolation(InterpolationKind::Cubic);

    let mut charts = vec![
        Chart::line(LineConfig::builder(2000, 1000).min_height(100).style(line_style).build()?),
        Chart::radar(RadarConfig::builder(500).min_radius(100).style(radar_style).build()?),
        Chart::pie(PieConfig::builder(500).thickness(300).emboss(50).gap(10).build()?),
    ];
    for chart in &mut charts {
        chart.add_items(&items)?;
    }

    let mut rendered = Vec::with_capacity(charts.len());
    for chart in &charts {
        let mut canvas = render(chart, rng)?;
        let out = PathBuf::from("target/out").join(format!("demo_{}.png", chart.kind().name()));
        canvas.write_png(&out)?;
        println!("Wrote {}", out.display());
        rendered.push(canvas);
    }

    let width = rendered.iter().map(|c| c.size().0).sum::<u32>() + MARGIN * (rendered.len() as u32 + 1);
    let height = rendered.iter().map(|c| c.size().1).max().unwrap_or(0) + MARGIN * 2;
    let mut sheet = SkiaCanvas::new(width, height)?;
    let mut x = MARGIN;
    for canvas in rendered {
        let w = canvas.size().0;
        sheet.composite(canvas, (x as i32, MARGIN as i32));
        x += w + MARGIN;
    }

    let out = PathBuf::from("target/out/demo_all.png");
    sheet.write_png(&out)?;
    info!(width, height, "demo sheet rendered");
    println!("Wrote {}", out.display());
    Ok(())
}

/// x^2, sin(x) and x^3 drawn over each other on one canvas.
fn demo_functions(rng: &mut Xoshiro256StarStar) -> Result<()> {
    let config = |color: Rgba| FuncConfig::builder(1000, 1000).thickness(10).outline(color).build();
    let graphs: [(Rgba, fn(f64) -> f64); 3] = [
        (Rgba::rgb(45, 143, 197), |x| x * x),
        (Rgba::rgb(189, 12, 234), f64::sin),
        (Rgba::rgb(231, 100, 23), |x| x.powi(3)),
    ];

    let mut sheet = SkiaCanvas::new(1000, 1000)?;
    for (color, f) in graphs {
        let canvas = render_function(&FuncGraph::new(config(color)?, f), rng)?;
        sheet.composite(canvas, (0, 0));
    }

    let out = PathBuf::from("target/out/demo_functions.png");
    sheet.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

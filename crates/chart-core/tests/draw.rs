// File: crates/chart-core/tests/draw.rs
// Purpose: Draw pipeline checks against the recording canvas.

use chart_core::{
    Chart, CurveStyle, DrawOp, FuncConfig, FuncGraph, LineConfig, Paint, PieConfig, RadarConfig,
    RecordingCanvas, Rgba, WeightedItem,
};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(42)
}

fn draw(chart: &Chart) -> RecordingCanvas {
    let size = chart.canvas_size();
    let mut canvas = RecordingCanvas::new(size.width, size.height);
    chart.draw(&mut canvas, &mut rng()).unwrap();
    canvas
}

#[test]
fn donut_slices_are_layered_then_cut() {
    let cfg = PieConfig::builder(100).thickness(40).gap(4).build().unwrap();
    let mut chart = Chart::pie(cfg);
    chart
        .add_items(&[
            WeightedItem::new(1.0).with_color(Rgba::rgb(200, 0, 0)),
            WeightedItem::new(2.0).with_color(Rgba::rgb(0, 200, 0)),
            WeightedItem::new(3.0).with_color(Rgba::rgb(0, 0, 200)),
        ])
        .unwrap();

    let canvas = draw(&chart);
    let ops = canvas.ops();
    // three layers, three cuts, one center disc
    assert_eq!(ops.len(), 7);
    for op in &ops[..3] {
        let DrawOp::Composite { ops: layer, offset } = op else { panic!("expected layer: {op:?}") };
        assert_eq!(*offset, (0, 0));
        assert!(matches!(layer[0], DrawOp::PieSlice { .. }));
        assert!(matches!(layer[1], DrawOp::Ellipse { fill, .. } if fill == Rgba::TRANSPARENT));
    }
    for op in &ops[3..6] {
        assert!(matches!(op, DrawOp::Polyline { color, width, .. } if *color == Rgba::TRANSPARENT && *width == 4.0));
    }
    assert!(matches!(ops[6], DrawOp::Ellipse { fill, .. } if fill == Rgba::TRANSPARENT));
}

#[test]
fn transparent_slices_are_skipped() {
    let mut chart = Chart::pie(PieConfig::builder(50).build().unwrap());
    chart
        .add_items(&[WeightedItem::new(1.0).with_color(Paint::None), WeightedItem::new(1.0)])
        .unwrap();
    assert_eq!(draw(&chart).ops().len(), 1);
}

#[test]
fn line_draws_fill_outline_markers() {
    let style = CurveStyle::line()
        .with_fill(Rgba::rgb(10, 20, 30))
        .with_outline(Rgba::BLACK)
        .with_thickness(3)
        .with_sample_count(10);
    let mut chart = Chart::line(LineConfig::builder(200, 80).style(style).build().unwrap());
    chart.add_items(&[WeightedItem::new(1.0), WeightedItem::new(4.0), WeightedItem::new(2.0)]).unwrap();

    let canvas = draw(&chart);
    let ops = canvas.ops();
    assert!(matches!(&ops[0], DrawOp::Polygon { points, .. } if points.len() == 12));
    assert!(matches!(&ops[1], DrawOp::Polyline { width, joined_curve: true, .. } if *width == 3.0));
    // no point width: only the two curve ends are marked
    assert_eq!(ops.len(), 4);
}

#[test]
fn no_fill_means_no_polygon() {
    let style = CurveStyle::radar().with_fill(Paint::None);
    let mut chart = Chart::radar(RadarConfig::builder(60).style(style).build().unwrap());
    chart.add_items(&[WeightedItem::new(1.0), WeightedItem::new(2.0), WeightedItem::new(3.0)]).unwrap();

    let canvas = draw(&chart);
    assert!(canvas.ops().iter().all(|op| !matches!(op, DrawOp::Polygon { .. })));
}

#[test]
fn random_colors_follow_the_seed() {
    let mut chart = Chart::radar(RadarConfig::builder(60).build().unwrap());
    chart.add_items(&[WeightedItem::new(5.0), WeightedItem::new(2.0), WeightedItem::new(3.0)]).unwrap();
    assert_eq!(draw(&chart), draw(&chart));
}

#[test]
fn empty_chart_draws_nothing() {
    let chart = Chart::line(LineConfig::builder(100, 100).build().unwrap());
    assert!(draw(&chart).ops().is_empty());
}

#[test]
fn function_graph_is_a_stroke_with_end_caps() {
    let cfg = FuncConfig::builder(400, 200).thickness(10).outline(Rgba::BLACK).build().unwrap();
    let graph = FuncGraph::new(cfg, |x: f64| x * x);
    let mut canvas = RecordingCanvas::new(400, 200);
    graph.draw(&mut canvas, &mut rng());

    let ops = canvas.ops();
    assert_eq!(ops.len(), 3);
    assert!(matches!(&ops[0], DrawOp::Polyline { width, joined_curve: true, color, .. } if *width == 10.0 && *color == Rgba::BLACK));
    for op in &ops[1..] {
        assert!(matches!(op, DrawOp::Ellipse { fill, .. } if *fill == Rgba::BLACK));
    }
}

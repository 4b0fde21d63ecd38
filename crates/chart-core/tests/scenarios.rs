// File: crates/chart-core/tests/scenarios.rs
// Purpose: End-to-end layout checks for line, pie and radar charts built through the public Chart API.

use chart_core::{
    Chart, ConfigError, CurveStyle, Geometry, InterpolationKind, LineConfig, PieConfig, RadarConfig,
    WeightedItem,
};

fn items(weights: &[f64]) -> Vec<WeightedItem> {
    weights.iter().map(|&w| WeightedItem::new(w)).collect()
}

fn angle_of(p: chart_core::Point, c: chart_core::Point) -> f64 {
    (p.y - c.y).atan2(p.x - c.x).to_degrees().rem_euclid(360.0)
}

#[test]
fn line_chart_six_linear_samples() {
    let style = CurveStyle::line().with_sample_count(6).with_interpolation(InterpolationKind::Linear);
    let mut chart = Chart::line(LineConfig::builder(300, 100).style(style).build().unwrap());
    chart.add_items(&items(&[1.0, 5.0, 3.0])).unwrap();

    let Geometry::Line(g) = chart.layout().unwrap() else { panic!("expected line geometry") };
    assert_eq!(g.curve.len(), 6);
    for pair in g.curve.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
    for p in &g.curve {
        assert!((0.0..=300.0).contains(&p.x));
        assert!(p.y >= g.marker_radius - 1e-9 && p.y <= 100.0 - g.marker_radius + 1e-9);
    }
    // the curve is inset by the marker radius on both ends
    assert!((g.curve[0].x - g.marker_radius).abs() < 1e-9);
    assert!((g.curve[5].x - (300.0 - g.marker_radius)).abs() < 1e-9);
}

#[test]
fn equal_pie_has_four_right_angles() {
    let mut chart = Chart::pie(PieConfig::builder(100).start_angle(30.0).build().unwrap());
    chart.add_items(&items(&[1.0, 1.0, 1.0, 1.0])).unwrap();

    let Geometry::Pie(g) = chart.layout().unwrap() else { panic!("expected pie geometry") };
    let starts: Vec<f64> = g.slices.iter().map(|s| s.start_angle).collect();
    assert_eq!(starts, vec![30.0, 120.0, 210.0, 300.0]);
    assert!(g.slices.iter().all(|s| (s.sweep() - 90.0).abs() < 1e-9));
}

#[test]
fn pie_of_huge_weights_splits_in_half() {
    let mut chart = Chart::pie(PieConfig::builder(100).thickness(40).emboss(10).build().unwrap());
    chart.add_items(&items(&[1e308, 1e308])).unwrap();

    let Geometry::Pie(g) = chart.layout().unwrap() else { panic!("expected pie geometry") };
    let spans: Vec<(f64, f64)> = g.slices.iter().map(|s| (s.start_angle, s.end_angle)).collect();
    assert_eq!(spans, vec![(0.0, 180.0), (180.0, 360.0)]);
    assert!(g.slices.iter().all(|s| s.outer_radius == 100.0 && s.inner_radius == 60.0));
}

#[test]
fn uniform_radar_is_regular() {
    let mut chart = Chart::radar(RadarConfig::builder(120).build().unwrap());
    chart.add_items(&items(&[2.0, 2.0, 2.0])).unwrap();

    let Geometry::Radar(g) = chart.layout().unwrap() else { panic!("expected radar geometry") };
    assert_eq!(g.vertices.len(), 3);
    let d0 = g.vertices[0].distance(g.center);
    assert!(d0 > 0.0);
    for v in &g.vertices {
        assert!((v.distance(g.center) - d0).abs() < 1e-9);
    }
    for i in 0..3 {
        let a = angle_of(g.vertices[i], g.center);
        let b = angle_of(g.vertices[(i + 1) % 3], g.center);
        let diff = (b - a).rem_euclid(360.0);
        assert!((diff - 120.0).abs() < 1e-6, "vertex {i}: {diff}");
    }
}

#[test]
fn oversized_donut_rejected_before_items() {
    let err = PieConfig::builder(500).thickness(600).build().unwrap_err();
    assert_eq!(err, ConfigError::ThicknessExceedsRadius { thickness: 600, radius: 500 });
}

#[test]
fn full_turn_start_angle_is_identity() {
    let weights = items(&[3.0, 1.0, 2.0, 5.0]);

    let mut a = Chart::pie(PieConfig::builder(80).start_angle(0.0).build().unwrap());
    let mut b = Chart::pie(PieConfig::builder(80).start_angle(360.0).build().unwrap());
    a.add_items(&weights).unwrap();
    b.add_items(&weights).unwrap();
    assert_eq!(a.layout().unwrap(), b.layout().unwrap());

    let mut a = Chart::radar(RadarConfig::builder(80).start_angle(0.0).build().unwrap());
    let mut b = Chart::radar(RadarConfig::builder(80).start_angle(360.0).build().unwrap());
    a.add_items(&weights).unwrap();
    b.add_items(&weights).unwrap();
    assert_eq!(a.layout().unwrap(), b.layout().unwrap());
}

#[test]
fn empty_charts_lay_out_to_nothing() {
    let line = Chart::line(LineConfig::builder(100, 50).build().unwrap());
    let Geometry::Line(g) = line.layout().unwrap() else { panic!() };
    assert!(g.curve.is_empty() && g.markers.is_empty());

    let pie = Chart::pie(PieConfig::builder(50).build().unwrap());
    let Geometry::Pie(g) = pie.layout().unwrap() else { panic!() };
    assert!(g.slices.is_empty());
}

#[test]
fn cubic_line_needs_four_items() {
    let style = CurveStyle::line().with_interpolation(InterpolationKind::Cubic);
    let mut chart = Chart::line(LineConfig::builder(200, 100).style(style).build().unwrap());
    chart.add_items(&items(&[1.0, 2.0, 3.0])).unwrap();
    assert!(chart.layout().is_err());

    chart.add_item(WeightedItem::new(4.0)).unwrap();
    let Geometry::Line(g) = chart.layout().unwrap() else { panic!() };
    assert_eq!(g.curve.len(), 8);
}

#[test]
fn chart_document_round_trip() {
    let json = r##"{
        "kind": {"type": "pie", "radius": 90, "thickness": 30, "emboss": 5, "gap": 2},
        "items": [{"weight": 1}, {"weight": 2, "color": {"solid": "#336699"}}]
    }"##;
    let chart: Chart = serde_json::from_str(json).unwrap();
    assert_eq!(chart.len(), 2);
    assert_eq!(chart.canvas_size(), chart_core::Size::new(180, 180));

    let back: Chart = serde_json::from_str(&serde_json::to_string(&chart).unwrap()).unwrap();
    assert_eq!(back, chart);

    let bad = r#"{"kind": {"type": "line", "size": {"width": 10, "height": 10}}, "items": [{"weight": -1}]}"#;
    assert!(serde_json::from_str::<Chart>(bad).is_err());
}

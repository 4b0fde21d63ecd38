use chart_core::{
    Chart, CurveStyle, InterpolationKind, LineConfig, PieConfig, RadarConfig, RecordingCanvas,
    WeightedItem,
};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn weighted(n: usize) -> Vec<WeightedItem> {
    (0..n).map(|i| WeightedItem::new(((i as f64 * 0.7).sin() + 1.5) * 10.0)).collect()
}

fn build(kind: &str, n: usize) -> Chart {
    let style = CurveStyle::line().with_interpolation(InterpolationKind::Quadratic).with_sample_count(n * 10);
    let mut ch = match kind {
        "line" => Chart::line(LineConfig::builder(800, 500).style(style).build().unwrap()),
        "radar" => Chart::radar(RadarConfig::builder(250).style(style).build().unwrap()),
        _ => Chart::pie(PieConfig::builder(250).thickness(120).emboss(30).gap(3).build().unwrap()),
    };
    ch.add_items(&weighted(n)).unwrap();
    ch
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_and_draw");
    for kind in ["line", "radar", "pie"] {
        let ch = build(kind, 48);
        group.bench_function(format!("{kind}_layout"), |b| {
            b.iter(|| black_box(ch.layout().unwrap()));
        });
        group.bench_function(format!("{kind}_draw_recorded"), |b| {
            let size = ch.canvas_size();
            b.iter(|| {
                let mut canvas = RecordingCanvas::new(size.width, size.height);
                let mut rng = Xoshiro256StarStar::seed_from_u64(1);
                ch.draw(&mut canvas, &mut rng).unwrap();
                black_box(canvas);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);

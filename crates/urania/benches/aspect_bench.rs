use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{declination_aspects, AspectCalculator, AspectSettings, OrbStrictness};
use urania::chart::ChartRules;
use urania::position::{CelestialPoint, MovingPoint, Placement};

const NAMES: [&str; 13] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    "Chiron", "North Node", "South Node",
];

fn chart_points() -> Vec<CelestialPoint> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let placement = Placement::new(*name, (i as f64) * 27.7 % 360.0, (i as f64) - 6.0, 1);
            let moving = MovingPoint::new(placement, 1.0 - (i as f64) * 0.1);
            if name.ends_with("Node") {
                CelestialPoint::Node(moving)
            } else {
                CelestialPoint::Planet(moving)
            }
        })
        .collect()
}

fn bench_calculate_aspect(c: &mut Criterion) {
    let rules = ChartRules::standard();
    let calculator = AspectCalculator::new(&rules.orbs);
    let points = chart_points();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| {
            calculator.calculate_aspect(
                black_box(&points[0]),
                black_box(&points[4]),
                black_box(OrbStrictness::Standard),
            )
        })
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let rules = ChartRules::standard();
    let calculator = AspectCalculator::new(&rules.orbs);
    let points = chart_points();

    for strictness in [OrbStrictness::Strict, OrbStrictness::Wide] {
        let settings = AspectSettings {
            strictness,
            include_nodes: true,
        };
        c.bench_function(&format!("compute_aspects_{}", strictness), |b| {
            b.iter(|| calculator.compute(black_box(&points), black_box(&settings)))
        });
    }

    c.bench_function("declination_aspects", |b| {
        b.iter(|| declination_aspects(black_box(&points), true))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_compute_aspects);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{AspectCalculator, AspectSettings};
use urania::chart::ChartRules;
use urania::patterns::detect_patterns;
use urania::position::{CelestialPoint, MovingPoint, Placement};

fn planet(name: &str, lon: f64) -> CelestialPoint {
    CelestialPoint::Planet(MovingPoint::new(Placement::new(name, lon, 0.0, 1), 1.0))
}

fn bench_detect_patterns(c: &mut Criterion) {
    // grand cross plus a grand trine, a stellium and a yod apex
    let points = vec![
        planet("Sun", 0.0),
        planet("Moon", 90.0),
        planet("Mercury", 180.0),
        planet("Venus", 270.0),
        planet("Mars", 120.0),
        planet("Jupiter", 240.0),
        planet("Saturn", 2.0),
        planet("Uranus", 4.0),
        planet("Neptune", 150.0),
        planet("Pluto", 210.0),
    ];
    let rules = ChartRules::standard();
    let aspects = AspectCalculator::new(&rules.orbs).compute(&points, &AspectSettings::default());

    c.bench_function("detect_patterns", |b| {
        b.iter(|| detect_patterns(black_box(&points), black_box(&aspects)))
    });
}

criterion_group!(benches, bench_detect_patterns);
criterion_main!(benches);

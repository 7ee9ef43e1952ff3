use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ev_station_dashboard::{
    build_page,
    models::{
        CandidatePoint, DemandPoint, ExistingStation, Method, PerformanceRow, PerformanceTable,
        RawPoint, SelectionSet, SelectionTable,
    },
    render::{map_to_feature_collection, render_html},
    DashboardConfig, DataSources, StudyData, UiState,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;

fn benchmark_build_page(c: &mut Criterion) {
    let data = create_benchmark_data(2_000, 40);
    let config = DashboardConfig::default();
    let state = UiState {
        k: 5,
        method: Method::Ilp,
        show_recommended: true,
    };

    c.bench_function("build_page", |b| {
        b.iter(|| build_page(black_box(&data), black_box(&state), &config))
    });

    let page = build_page(&data, &state, &config);
    c.bench_function("render_html", |b| b.iter(|| render_html(black_box(&page))));

    if let Some(dashboard) = page.dashboard() {
        c.bench_function("map_to_feature_collection", |b| {
            b.iter(|| map_to_feature_collection(black_box(&dashboard.map)))
        });
    }
}

fn benchmark_load(c: &mut Criterion) {
    let sources = DataSources::in_dir(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join("sample"),
    );

    c.bench_function("study_load", |b| {
        b.iter(|| StudyData::load(black_box(&sources)))
    });
}

// Random points scattered over San Francisco, with a gap now and then
fn random_points(rng: &mut StdRng, count: usize) -> Vec<RawPoint> {
    (0..count)
        .map(|_| {
            let mut point = RawPoint::new(rng.gen_range(-122.52..-122.36), rng.gen_range(37.70..37.82));
            if rng.gen_bool(0.02) {
                point.lat = None;
            }
            point
        })
        .collect()
}

fn create_benchmark_data(points: usize, max_k: u32) -> StudyData {
    let mut rng = StdRng::seed_from_u64(42);

    let existing = random_points(&mut rng, points / 4)
        .into_iter()
        .map(|point| ExistingStation { point })
        .collect();
    let demand = random_points(&mut rng, points)
        .into_iter()
        .map(|point| DemandPoint {
            point,
            weight: Some(rng.gen_range(500.0..8000.0)),
        })
        .collect();
    let candidates = random_points(&mut rng, points / 2)
        .into_iter()
        .map(|point| CandidatePoint { point })
        .collect();

    let mut rows = Vec::new();
    for method in [Method::Ilp, Method::Greedy] {
        let (mut pop, mut pts) = (0.0, 0.0);
        for k in 1..=max_k {
            pop += rng.gen_range(100.0..3000.0);
            pts += rng.gen_range(5.0..80.0);
            rows.push(PerformanceRow::new(k, method.as_str(), pop, pts));
        }
    }
    let curve = PerformanceTable::new(rows).unwrap_or_else(|e| panic!("bad benchmark curve: {}", e));

    let mut selections = SelectionSet::new();
    for method in [Method::Ilp, Method::Greedy] {
        selections.insert(SelectionTable::new(method, 5, random_points(&mut rng, 5)));
    }

    StudyData {
        existing,
        demand,
        candidates,
        curve,
        selections,
    }
}

criterion_group!(benches, benchmark_build_page, benchmark_load);
criterion_main!(benches);

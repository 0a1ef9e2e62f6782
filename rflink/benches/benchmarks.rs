use criterion::{criterion_group, criterion_main, Criterion};
use rflink::{
    compute_link_geometry,
    ellipse::{project_to_screen, EllipseConfig},
    viewport::WebMercator,
    GeoPoint,
};

fn fresnel_ellipse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fresnel Ellipse");

    let start = GeoPoint::new(28.6139, 77.2090);
    let end = GeoPoint::new(28.7041, 77.1025);
    let viewport = WebMercator::centered(start, 12.0, geo::coord!(x: 1920.0, y: 1080.0));
    let config = EllipseConfig::default();

    group.bench_function("geometry", |b| {
        b.iter(|| compute_link_geometry(start, end, 5.0).unwrap())
    });

    group.bench_function("geometry+projection", |b| {
        b.iter(|| {
            let geometry = compute_link_geometry(start, end, 5.0).unwrap();
            project_to_screen(&geometry, start, end, &viewport, &config)
        })
    });
}

criterion_group!(benches, fresnel_ellipse);
criterion_main!(benches);

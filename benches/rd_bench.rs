use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rd_grid::proj::rijksdriehoek::{self, Rijksdriehoek};
use rd_grid::proj::{transform_points, Direction, Projection};

/// Geographic grid (radians) over the Netherlands.
fn make_geographic(size: usize) -> Vec<(f64, f64)> {
    let mut coords = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let lon = 3.5 + 3.5 * col as f64 / size as f64;
            let lat = 50.8 + 2.7 * row as f64 / size as f64;
            coords.push((lon.to_radians(), lat.to_radians()));
        }
    }
    coords
}

/// Planar grid (metres) covering the RD domain.
fn make_planar(size: usize) -> Vec<(f64, f64)> {
    let mut coords = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let x = 10_000.0 + 270_000.0 * col as f64 / size as f64;
            let y = 300_000.0 + 320_000.0 * row as f64 / size as f64;
            coords.push((x, y));
        }
    }
    coords
}

fn bench_single_point(c: &mut Criterion) {
    let lon = 4.88352559_f64.to_radians();
    let lat = 52.37453253_f64.to_radians();
    c.bench_function("forward_single", |b| {
        b.iter(|| rijksdriehoek::forward(black_box(lon), black_box(lat)))
    });
    c.bench_function("inverse_single", |b| {
        b.iter(|| rijksdriehoek::inverse(black_box(120_700.723), black_box(487_525.501)))
    });
}

fn bench_batch(c: &mut Criterion) {
    for size in [64, 256, 1024] {
        let geo = make_geographic(size);
        let planar = make_planar(size);

        c.bench_function(&format!("forward_batch_{size}x{size}"), |b| {
            b.iter(|| {
                let mut coords = geo.clone();
                Rijksdriehoek.forward_batch(black_box(&mut coords)).unwrap();
                coords
            })
        });

        c.bench_function(&format!("inverse_batch_{size}x{size}"), |b| {
            b.iter(|| {
                let mut coords = planar.clone();
                Rijksdriehoek.inverse_batch(black_box(&mut coords)).unwrap();
                coords
            })
        });
    }
}

fn bench_transform_points(c: &mut Criterion) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = make_planar(512).into_iter().unzip();
    c.bench_function("transform_points_inverse_512x512", |b| {
        b.iter(|| {
            transform_points(&Rijksdriehoek, black_box(&xs), black_box(&ys), Direction::Inverse)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_single_point,
    bench_batch,
    bench_transform_points
);
criterion_main!(benches);

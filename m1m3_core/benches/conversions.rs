use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use m1m3_config::fixtures::{AxisColumns, Fixture};
use m1m3_core::fitter::N_FEATURES;
use m1m3_core::{AccelerationAndVelocityFitter, ForceCalculator, MeasuredForces};
use m1m3_fatable::{FATABLE_XFA, FATABLE_YFA, FATABLE_ZFA};
use nalgebra::DMatrix;

// Deterministic non-trivial table values
fn filled(seed: usize) -> AxisColumns {
    AxisColumns::from_fn(|r, c| (((r + 1) * (c + 3) * (seed + 7)) % 97) as f64 - 48.0)
}

fn calculator() -> (tempfile::TempDir, ForceCalculator) {
    let mut fx = Fixture::default();
    for (i, row) in fx.hardpoint.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    fx.forces_to_mirror = std::array::from_fn(filled);
    fx.moments_to_mirror = std::array::from_fn(|i| filled(i + 3));
    fx.acceleration = std::array::from_fn(|i| filled(i + 6));
    fx.velocity = std::array::from_fn(|i| filled(i + 9));
    let dir = tempfile::tempdir().unwrap();
    fx.write(dir.path()).unwrap();
    let calc = ForceCalculator::load_config(dir.path()).unwrap();
    (dir, calc)
}

fn configure(g: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>) {
    // Allow quick tweaking without CLI flags (Criterion 0.5):
    //   BENCH_SAMPLE_SIZE=10 BENCH_MEAS_MS=50 cargo bench -p m1m3_core --bench conversions
    if let Ok(ss) = std::env::var("BENCH_SAMPLE_SIZE") {
        if let Ok(n) = ss.parse::<usize>() {
            g.sample_size(n.max(10));
        }
    } else {
        g.sample_size(50);
    }
    if let Ok(ms) = std::env::var("BENCH_MEAS_MS")
        && let Ok(ms_u64) = ms.parse::<u64>()
    {
        g.measurement_time(std::time::Duration::from_millis(ms_u64));
    }
}

pub fn bench_conversions(c: &mut Criterion) {
    let (_dir, calc) = calculator();
    let mut g = c.benchmark_group("conversions");
    configure(&mut g);

    g.bench_function("acceleration", |b| {
        b.iter(|| black_box(calc.acceleration(black_box(&[0.01, -0.02, 0.005]))))
    });
    g.bench_function("velocity", |b| {
        b.iter(|| black_box(calc.velocity(black_box(&[0.03, 0.01, -0.02]))))
    });
    g.bench_function("hardpoint_forces", |b| {
        b.iter(|| black_box(calc.hardpoint_forces(black_box(&[10.0, 20.0, 30.0, 1.0, 2.0, 3.0]))))
    });
    g.finish();
}

pub fn bench_fit(c: &mut Criterion) {
    let mut g = c.benchmark_group("fit");
    configure(&mut g);

    for &n in &[100usize, 1000] {
        let design = DMatrix::from_fn(n, N_FEATURES, |r, c| ((r * (c + 1)) as f64 * 0.37).sin());
        let fitter = AccelerationAndVelocityFitter::from_design(design).unwrap();
        let forces: Vec<MeasuredForces> = (0..n)
            .map(|r| MeasuredForces {
                timestamp: r as f64,
                x_forces: vec![(r as f64).cos(); FATABLE_XFA],
                y_forces: vec![(r as f64).sin(); FATABLE_YFA],
                z_forces: vec![(r as f64 * 0.5).cos(); FATABLE_ZFA],
            })
            .collect();
        g.bench_function(format!("do_fit_{n}"), |b| {
            b.iter_batched(
                || forces.clone(),
                |f| black_box(fitter.do_fit(black_box(&f))),
                BatchSize::LargeInput,
            )
        });
    }
    g.finish();
}

criterion_group!(benches, bench_conversions, bench_fit);
criterion_main!(benches);

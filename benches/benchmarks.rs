/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phonon_dsf::phonon::{nacl_model, run_mesh, PhononSolver};
use phonon_dsf::scattering::{atomic_form_factor_wk1995, wk1995_params, AmplitudeSource};
use phonon_dsf::spectrum::{DsfConfig, DynamicStructureFactor};

fn form_factor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Form Factors");
    let params = wk1995_params("Cl").unwrap();
    let flat = params.to_vec();

    group.bench_function("typed", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(params.evaluate(black_box(i as f64 * 0.01)));
            }
        })
    });

    group.bench_function("flat", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(atomic_form_factor_wk1995(black_box(i as f64 * 0.01), &flat).unwrap());
            }
        })
    });

    group.finish();
}

fn structure_factor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structure Factor");
    let model = nacl_model().unwrap();

    group.bench_function("solve", |b| {
        b.iter(|| black_box(model.solve(black_box([0.1, 0.2, 0.3])).unwrap()))
    });

    group.bench_function("mesh_5x5x5", |b| {
        b.iter(|| black_box(run_mesh(&model, [5, 5, 5]).unwrap()))
    });

    let mesh = run_mesh(&model, [5, 5, 5]).unwrap();
    let qpoints = DsfConfig::default().scattering_paths().unwrap()[0].qpoints.clone();
    group.bench_function("gamma_to_l", |b| {
        b.iter(|| {
            let source = AmplitudeSource::wk1995(&["Na", "Cl"]).unwrap();
            let dsf =
                DynamicStructureFactor::new(&model, &mesh, qpoints.clone(), 300.0, source, 1e-3)
                    .unwrap();
            black_box(dsf.run().unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, form_factor_benchmark, structure_factor_benchmark);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use fitcalc::config::sample_packages;
use fitcalc::read_package;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let packages = sample_packages();

    c.bench_function("read_package + summary (samples)", |b| {
        b.iter(|| {
            for p in &packages {
                let training = read_package(black_box(&p.code), black_box(&p.params))
                    .expect("sample package must resolve");
                black_box(training.show_training_info().expect("sample summary"));
            }
        })
    });

    let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
    c.bench_function("walking spent_calories", |b| {
        b.iter(|| black_box(walking.spent_calories()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

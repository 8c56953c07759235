use criterion::{BatchSize, Criterion, criterion_group, criterion_main};


use runner::Workload;

fn bench_data_view(c: &mut Criterion) {
    c.bench_function("DataView Float64 sweep", |b| {
        b.iter_batched(
            || Workload::new(4096),
            |mut workload| workload.float64_sweep(512),
            BatchSize::PerIteration,
        )
    });
    c.bench_function("DataView BigInt64 sweep", |b| {
        b.iter_batched(
            || Workload::new(4096),
            |mut workload| workload.big_int64_sweep(512),
            BatchSize::PerIteration,
        )
    });
}

fn bench_big_int(c: &mut Criterion) {
    let binary = format!("0b1{}", "01".repeat(512));
    c.bench_function("BigInt parse binary", |b| {
        b.iter_batched(
            || Workload::new(0),
            |mut workload| workload.parse_big_int(&binary),
            BatchSize::PerIteration,
        )
    });
    c.bench_function("BigInt.asIntN wide", |b| {
        b.iter_batched(
            || {
                let mut workload = Workload::new(0);
                let value = workload.parse_big_int(&binary);
                (workload, value)
            },
            |(mut workload, value)| workload.truncate_signed(333, value),
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, bench_data_view, bench_big_int);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use unicode_tables_benches::{MEASUREMENT_TIME, TABLES, WARM_UP_TIME};
use unicode_tables_prepare::tables::compositions::Dispatch;

#[inline(never)]
fn compose_all(dispatch: &Dispatch, sequences: &[Vec<u32>]) -> u32
{
    sequences
        .iter()
        .filter_map(|sequence| dispatch.evaluate(sequence))
        .fold(0, |acc, composite| acc ^ composite.encode())
}

fn compose(c: &mut Criterion)
{
    let sequences: Vec<Vec<u32>> = TABLES.decompositions.values().cloned().collect();
    let codes: Vec<u32> = TABLES.decompositions.keys().copied().collect();

    let mut group = c.benchmark_group("compose");

    group.warm_up_time(Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME));

    group.bench_function("evaluate", |b| {
        b.iter(|| compose_all(&TABLES.composition, black_box(&sequences)))
    });

    group.bench_function("lookup", |b| {
        b.iter(|| {
            codes
                .iter()
                .map(|&code| TABLES.decomposition.lookup(black_box(code)))
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, compose);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use unicode_tables_benches::{MEASUREMENT_TIME, PROPERTIES, WARM_UP_TIME};
use unicode_tables_prepare::tables::category::CategoryTable;
use unicode_tables_prepare::tables::compositions::CompositionTrie;
use unicode_tables_prepare::tables::decomposition;
use unicode_tables_prepare::tables::relative::{identity_page, RelativeTable};
use unicode_tables_prepare::tables::UnicodeTables;

fn prepare(c: &mut Criterion)
{
    let properties = &*PROPERTIES;
    let decompositions = decomposition::resolve(properties).unwrap();

    let mut group = c.benchmark_group("prepare");

    group.warm_up_time(Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME));

    group.bench_function("category", |b| b.iter(|| CategoryTable::build(black_box(properties))));

    group.bench_function("resolve", |b| b.iter(|| decomposition::resolve(black_box(properties))));

    group.bench_function("decomposition", |b| {
        let identity = identity_page();
        b.iter(|| RelativeTable::build("decomposition", black_box(&decompositions), &identity))
    });

    group.bench_function("composition", |b| {
        b.iter(|| CompositionTrie::from_decompositions(properties, black_box(&decompositions)).map(|trie| trie.lower()))
    });

    group.bench_function("all", |b| b.iter(|| UnicodeTables::prepare(black_box(properties), None)));

    group.finish();
}

criterion_group!(benches, prepare);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use openhours::extract::parse_week_intervals;
use openhours::grammar;

fn criterion_benchmark(c: &mut Criterion) {
    let description = "Mon lunch 11:30am-2:30pm, dinner 5-10pm, Sat-Sun 9am-11pm, closed Wed";

    c.bench_function("tokenize", |b| {
        b.iter(|| grammar::tokenize(black_box(description)))
    });
    c.bench_function("parse week intervals", |b| {
        b.iter(|| parse_week_intervals(black_box(description)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

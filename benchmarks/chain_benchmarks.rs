#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parameter benchmarks: qparams vs the url crate's `form_urlencoded`
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qparams::QueryParams;
use url::form_urlencoded;

const QUERY: &str = "q=rust+lang&page=2&sort=desc&filter=a%2Cb&filter=c&redirect=/home?x=1&empty=&flag";

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("qparams", |b| {
        b.iter(|| QueryParams::parse(black_box(QUERY)).len());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| form_urlencoded::parse(black_box(QUERY).as_bytes()).count());
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = QueryParams::parse(QUERY);
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    group.bench_function("qparams", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

/// Build a store through `n` chained appends and read it once
fn bench_chained_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_append");

    for n in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut params = QueryParams::new();
                for i in 0..n {
                    params = params.append("k", i);
                }
                params.get_all("k").map(<[String]>::len)
            });
        });
    }

    group.finish();
}

fn bench_read_after_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let params = QueryParams::parse(QUERY).append("extra", "1").delete("flag", None);
    let _ = params.has("q");

    group.bench_function("get", |b| {
        b.iter(|| black_box(&params).get(black_box("filter")).map(str::len));
    });

    group.bench_function("get_all", |b| {
        b.iter(|| black_box(&params).get_all(black_box("filter")).map(<[String]>::len));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_serialize_all,
    bench_chained_append,
    bench_read_after_materialize
);

criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use media_type::MediaType;

fn bench_cmp(c: &mut Criterion) {
    let mut group = c.benchmark_group("cmp");

    let left = MediaType::parse("text/plain; charset=utf-8").unwrap();
    let right = MediaType::parse("text/plain; charset=utf-8").unwrap();
    group.bench_function("eq_parsed_both", |b| b.iter(|| black_box(&left) == black_box(&right)));

    let left = MediaType::parse("text/plain; a=1; b=2; c=3").unwrap();
    let right = MediaType::parse("text/plain; c=3; b=2; a=1").unwrap();
    group.bench_function("eq_reordered_params", |b| {
        b.iter(|| black_box(&left) == black_box(&right))
    });

    let left = MediaType::parse("text/plain; charset=utf-8").unwrap();
    let right = MediaType::parse("text/css; charset=utf-8").unwrap();
    group.bench_function("ne_parsed_subtype", |b| b.iter(|| black_box(&left) == black_box(&right)));

    let mt = MediaType::parse("text/plain; charset=utf-8").unwrap();
    group.bench_function("eq_type_", |b| b.iter(|| black_box(&mt).type_() == "text"));

    group.finish();
}

criterion_group!(benches, bench_cmp);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use media_type::MediaType;

const SAMPLES: &[(&str, &str)] = &[
    ("simple", "text/plain"),
    ("charset_utf8", "text/plain; charset=utf-8"),
    ("extended", "text/plain; charset=utf-8; foo=bar"),
    ("quoted", "multipart/form-data; boundary=\"----=_Part_0\\\"x\""),
    ("lenient", " TEXT/Plain ;charset=();charset=gbk;foo;bar= "),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &(name, input) in SAMPLES {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| MediaType::parse(black_box(input))));
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &(name, input) in SAMPLES {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| MediaType::validate(black_box(input))));
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);

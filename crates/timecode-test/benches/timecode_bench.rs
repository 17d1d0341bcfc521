//! Benchmarks for timecode parsing, rendering and conversion

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timecode_core::{DropFrameConverter, Timecode};

fn bench_parse_smpte(c: &mut Criterion) {
    c.bench_function("parse_smpte", |b| {
        b.iter(|| Timecode::parse(black_box("10:15:24:12"), 25))
    });
}

fn bench_parse_drop_frame(c: &mut Criterion) {
    c.bench_function("parse_drop_frame", |b| {
        b.iter(|| Timecode::parse(black_box("01:23:00;04"), 29.97))
    });
}

fn bench_parse_suffixed(c: &mut Criterion) {
    c.bench_function("parse_suffixed", |b| {
        b.iter(|| Timecode::parse(black_box("1h 20m 4s 12f"), 25))
    });
}

fn bench_soft_parse_garbage(c: &mut Criterion) {
    c.bench_function("soft_parse_garbage", |b| {
        b.iter(|| Timecode::soft_parse(black_box("not a timecode at all"), 25))
    });
}

fn bench_to_s(c: &mut Criterion) {
    let tc = Timecode::new(2_345_678, 29.97, true).unwrap();

    c.bench_function("to_s", |b| b.iter(|| black_box(tc).to_s()));
}

fn bench_drop_frame_conversion(c: &mut Criterion) {
    let converter = DropFrameConverter::new(59.94, true);

    c.bench_function("drop_frame_conversion", |b| {
        let mut total = 0u64;
        b.iter(|| {
            total = (total + 7919) % 21_000_000;
            let atoms = converter.to_atoms(black_box(total));
            black_box(converter.to_total(atoms))
        })
    });
}

fn bench_to_uint(c: &mut Criterion) {
    let tc = Timecode::at(5, 34, 42, 5, 25, false).unwrap();

    c.bench_function("to_uint", |b| b.iter(|| black_box(tc).to_uint()));
}

fn bench_add(c: &mut Criterion) {
    let a = Timecode::new(90_000, 25, false).unwrap();
    let b_tc = Timecode::new(1_234, 25, false).unwrap();

    c.bench_function("add", |b| b.iter(|| black_box(a) + black_box(b_tc)));
}

criterion_group!(
    benches,
    bench_parse_smpte,
    bench_parse_drop_frame,
    bench_parse_suffixed,
    bench_soft_parse_garbage,
    bench_to_s,
    bench_drop_frame_conversion,
    bench_to_uint,
    bench_add,
);
criterion_main!(benches);

//! Benchmark – `segcursor::Reader` field scans over one segment vs many
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use segcursor::{FieldOptions, Reader, chunk_utils::produce_segments};

/// Produce a deterministic record stream of exactly `target_len` bytes.
/// Every fourth record carries an escaped delimiter so the escape path is
/// exercised too.
fn make_payload(target_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(target_len + 16);
    let mut n = 0usize;
    while out.len() < target_len {
        out.extend_from_slice(format!("record-{n}").as_bytes());
        if n % 4 == 0 {
            out.extend_from_slice(b"^|cont");
        }
        out.push(b'|');
        n += 1;
    }
    out.truncate(target_len);
    out
}

fn count_fields(reader: &mut Reader<'_, u8>, options: FieldOptions<u8>) -> usize {
    reader.fields(options).map(|f| f.len()).sum()
}

fn bench_fields(c: &mut Criterion) {
    let payload = make_payload(64 * 1024);
    let escaped = FieldOptions::new(b'|').with_escape(b'^');
    let plain = FieldOptions::new(b'|');

    let mut group = c.benchmark_group("fields_split");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for &parts in &[1usize, 16, 256, 4_096] {
        for (name, options) in [("escaped", escaped), ("plain", plain)] {
            group.bench_with_input(
                BenchmarkId::new(parts.to_string(), name),
                &options,
                |b, &options| {
                    b.iter(|| {
                        let mut reader = Reader::new(produce_segments(black_box(payload.as_slice()), parts));
                        black_box(count_fields(&mut reader, options));
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_slice_delimiter(c: &mut Criterion) {
    let payload: Vec<u8> = make_payload(64 * 1024)
        .into_iter()
        .flat_map(|b| if b == b'|' { vec![b'\r', b'\n'] } else { vec![b] })
        .collect();

    let mut group = c.benchmark_group("slice_delimiter_split");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    for &parts in &[1usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| {
                let mut reader = Reader::new(produce_segments(black_box(payload.as_slice()), parts));
                let mut lines = 0usize;
                while reader.try_read_to_slice(b"\r\n", true).is_some() {
                    lines += 1;
                }
                black_box(lines);
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_fields, bench_slice_delimiter }
criterion_main!(benches);

// benches/field_ops.rs

use bitpack::{Field, PackedWord, get_signed, get_unsigned, new_signed, new_unsigned};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const WIDTHS: [u32; 4] = [1, 8, 21, 63];

fn words(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let input = words(1_000);

    let mut group = c.benchmark_group("extract");
    for width in WIDTHS {
        let lsb = 64 - width;
        group.bench_with_input(BenchmarkId::new("unsigned", width), &width, |b, &width| {
            b.iter(|| {
                input
                    .iter()
                    .map(|&w| black_box(get_unsigned(w, width, lsb)))
                    .fold(0u64, u64::wrapping_add)
            });
        });
        group.bench_with_input(BenchmarkId::new("signed", width), &width, |b, &width| {
            b.iter(|| {
                input
                    .iter()
                    .map(|&w| black_box(get_signed(w, width, lsb)))
                    .fold(0i64, i64::wrapping_add)
            });
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let input = words(1_000);

    let mut group = c.benchmark_group("insert");
    for width in WIDTHS {
        let value = (1u64 << (width - 1)) - 1;
        group.bench_with_input(BenchmarkId::new("unsigned", width), &width, |b, &width| {
            b.iter(|| {
                for &w in &input {
                    black_box(new_unsigned(w, width, 0, value).unwrap());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("signed", width), &width, |b, &width| {
            b.iter(|| {
                for &w in &input {
                    black_box(new_signed(w, width, 0, -(value as i64) - 1).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_packed_word(c: &mut Criterion) {
    const OPCODE: Field = Field::new(4, 28);
    const RA: Field = Field::new(3, 6);
    const RB: Field = RA.below(3);
    const RC: Field = RB.below(3);

    c.bench_function("pack_instruction", |b| {
        b.iter(|| {
            let word = PackedWord::default()
                .with_unsigned(OPCODE, black_box(3))
                .and_then(|w| w.with_unsigned(RA, black_box(1)))
                .and_then(|w| w.with_unsigned(RB, black_box(2)))
                .and_then(|w| w.with_unsigned(RC, black_box(7)))
                .unwrap();
            black_box(word)
        });
    });
}

criterion_group!(benches, bench_extract, bench_insert, bench_packed_word);
criterion_main!(benches);

//! Benchmarks for the matrix animation codec.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use matrix_anim::{
    animation::AnimationSequence,
    codec::{Grid, PIXEL_BITS, pack, unpack},
    schema::ShortRowPolicy,
    text::{extract_word_rows, split_frames, to_c_array},
};

/// Checkerboard-ish grid with a deterministic bit pattern.
fn pattern_grid(seed: usize) -> Grid {
    let bits: Vec<bool> = (0..PIXEL_BITS).map(|i| (i * 7 + seed) % 3 == 0).collect();
    Grid::from_bits(&bits).unwrap()
}

fn bench_pack_unpack(c: &mut Criterion) {
    let grid = pattern_grid(1);
    let frame = pack(&grid, 55);

    c.bench_function("pack", |b| b.iter(|| pack(black_box(&grid), 55)));
    c.bench_function("unpack", |b| b.iter(|| unpack(black_box(&frame))));
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");

    for frames in [16, 256, 4096] {
        let sheet: String = (0..frames)
            .map(|i| pattern_grid(i).to_text_rows('#', '.').join("\n") + "\n\n")
            .collect();
        let groups = split_frames(&sheet);
        let sequence = AnimationSequence::from_frame_groups(&groups, 55)
            .unwrap()
            .value;
        let listing = to_c_array(&sequence, "HeartAnim");

        group.bench_with_input(BenchmarkId::new("encode", frames), &sheet, |b, sheet| {
            b.iter(|| {
                let groups = split_frames(black_box(sheet));
                let sequence = AnimationSequence::from_frame_groups(&groups, 55).unwrap();
                to_c_array(&sequence.value, "HeartAnim")
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", frames), &listing, |b, listing| {
            b.iter(|| {
                let rows = extract_word_rows(black_box(listing)).unwrap();
                AnimationSequence::from_word_rows(&rows, ShortRowPolicy::Skip).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack_unpack, bench_listing);
criterion_main!(benches);

//! Benchmark: arrow-key traversal math.
//!
//! Run with: `cargo bench -p keygrid-core --bench nav_bench`
//!
//! `next_coord` sits on the key-repeat hot path (a held arrow key fires on
//! every repeat), so it should stay in the low single-digit nanoseconds.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keygrid_core::coord::{CellCoord, GridShape};
use keygrid_core::event::KeyCode;
use keygrid_core::nav::next_coord;

fn bench_next_coord(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_coord");
    let shape = GridShape::new(101, 12);

    group.bench_function("down_mid_grid", |b| {
        let start = CellCoord::new(50, 6);
        b.iter(|| next_coord(black_box(KeyCode::Down), black_box(start), shape, false));
    });

    group.bench_function("right_wrap", |b| {
        let start = CellCoord::new(50, 11);
        b.iter(|| next_coord(black_box(KeyCode::Right), black_box(start), shape, false));
    });

    group.bench_function("full_walk", |b| {
        b.iter(|| {
            let mut coord = CellCoord::ORIGIN;
            for _ in 0..1_000 {
                coord = next_coord(KeyCode::Right, coord, shape, false);
            }
            black_box(coord)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_next_coord);
criterion_main!(benches);

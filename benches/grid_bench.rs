// Benchmarks for month grid derivation

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use smart_planner::services::navigator::grid;

fn bench_month_grid(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("month_grid_single", |b| {
        b.iter(|| grid::month_grid(black_box(2024), black_box(5), black_box(today)).unwrap())
    });

    c.bench_function("month_grid_full_year", |b| {
        b.iter(|| {
            for month0 in 0..12 {
                let g = grid::month_grid(black_box(2024), month0, black_box(today)).unwrap();
                black_box(g);
            }
        })
    });

    c.bench_function("week_row_days_all_rows", |b| {
        b.iter(|| {
            for row in 0..6 {
                let slots = grid::week_row_days(black_box(2024), black_box(1), row, today).unwrap();
                black_box(slots);
            }
        })
    });
}

criterion_group!(benches, bench_month_grid);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind::{bank, parse_code, scan, CodePeg};
use std::time::Duration;

pub fn bench_score(c: &mut Criterion) {
    let mut g = c.benchmark_group("score");
    g.measurement_time(Duration::from_secs(1));
    let guesses = [
        "k b g w", "w g b k", "k k k k", "r k g w", "b b k k", "y y r r", "g k b w",
    ]
    .map(|s| parse_code(s).unwrap());

    let shield = parse_code("k b g w").unwrap();

    g.bench_function("scan exact", |b| {
        b.iter(|| scan::score(black_box(&shield), black_box(&shield)))
    });
    g.bench_function("bank exact", |b| {
        b.iter(|| bank::score(black_box(&shield), black_box(&shield)))
    });
    g.bench_function("scan mixed", |b| {
        b.iter(|| scan::score(black_box(&guesses[3]), black_box(&shield)))
    });
    g.bench_function("bank mixed", |b| {
        b.iter(|| bank::score(black_box(&guesses[3]), black_box(&shield)))
    });

    g.bench_function("scan many", |b| {
        b.iter(|| {
            guesses
                .iter()
                .map(|w| black_box(scan::score(black_box(w), black_box(&shield))).total())
                .sum::<usize>()
        })
    });
    g.bench_function("bank many", |b| {
        b.iter(|| {
            guesses
                .iter()
                .map(|w| black_box(bank::score(black_box(w), black_box(&shield))).total())
                .sum::<usize>()
        })
    });

    let long: Vec<CodePeg> = CodePeg::ALL.iter().copied().cycle().take(64).collect();
    let long_guess: Vec<CodePeg> = long.iter().rev().copied().collect();
    g.bench_function("scan 64", |b| {
        b.iter(|| scan::score(black_box(&long_guess), black_box(&long)))
    });
    g.bench_function("bank 64", |b| {
        b.iter(|| bank::score(black_box(&long_guess), black_box(&long)))
    });
}

criterion_group!(score, bench_score);
criterion_main!(score);

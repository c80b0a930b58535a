use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use treap_bimap::BiMap;

struct PairGenerator {
    rng: StdRng,
}
impl PairGenerator {
    fn new() -> Self {
        Self {
            rng: StdRng::from_seed([0; 32]),
        }
    }

    fn next(&mut self) -> (u64, u64) {
        (self.rng.gen(), self.rng.gen())
    }
}

// insert helper fn
fn bimap_insert(count: usize, bench: &mut Bencher) {
    let mut gen = PairGenerator::new();
    let pairs: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut map = BiMap::new();
        for (left, right) in pairs.iter().copied() {
            black_box(map.insert(left, right));
        }
    });
}

// insert and erase helper fn
fn bimap_insert_erase(count: usize, bench: &mut Bencher) {
    let mut gen = PairGenerator::new();
    let pairs: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut map = BiMap::new();
        for (left, right) in pairs.iter().copied() {
            black_box(map.insert(left, right));
        }
        for (left, _) in &pairs {
            black_box(map.erase_left(left));
        }
    });
}

fn bench_bimap_insert(c: &mut Criterion) {
    c.bench_function("bench_bimap_insert_100", |b| bimap_insert(100, b));
    c.bench_function("bench_bimap_insert_1000", |b| bimap_insert(1000, b));
    c.bench_function("bench_bimap_insert_10,000", |b| bimap_insert(10_000, b));
    c.bench_function("bench_bimap_insert_100,000", |b| bimap_insert(100_000, b));
}

fn bench_bimap_insert_erase(c: &mut Criterion) {
    c.bench_function("bench_bimap_insert_erase_100", |b| {
        bimap_insert_erase(100, b)
    });
    c.bench_function("bench_bimap_insert_erase_1000", |b| {
        bimap_insert_erase(1000, b)
    });
    c.bench_function("bench_bimap_insert_erase_10,000", |b| {
        bimap_insert_erase(10_000, b)
    });
    c.bench_function("bench_bimap_insert_erase_100,000", |b| {
        bimap_insert_erase(100_000, b)
    });
}

// lookup through both sides helper fn
fn bimap_lookup(count: usize, bench: &mut Bencher) {
    let mut gen = PairGenerator::new();
    let pairs: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut map = BiMap::new();
    for (left, right) in pairs.iter().copied() {
        map.insert(left, right);
    }
    bench.iter(|| {
        for (left, right) in &pairs {
            black_box(map.get_left(left));
            black_box(map.get_right(right));
        }
    });
}

// in-order scan helper fn
fn bimap_iter(count: usize, bench: &mut Bencher) {
    let mut gen = PairGenerator::new();
    let pairs: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut map = BiMap::new();
    for (left, right) in pairs.iter().copied() {
        map.insert(left, right);
    }
    bench.iter(|| {
        black_box(map.iter().count());
    });
}

fn bench_bimap_lookup(c: &mut Criterion) {
    c.bench_function("bench_bimap_lookup_100", |b| bimap_lookup(100, b));
    c.bench_function("bench_bimap_lookup_1000", |b| bimap_lookup(1000, b));
    c.bench_function("bench_bimap_lookup_10,000", |b| bimap_lookup(10_000, b));
}

fn bench_bimap_iter(c: &mut Criterion) {
    c.bench_function("bench_bimap_iter_1000", |b| bimap_iter(1000, b));
    c.bench_function("bench_bimap_iter_10,000", |b| bimap_iter(10_000, b));
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_bimap_insert, bench_bimap_insert_erase,
}

criterion_group! {
    name = benches_query;
    config = criterion_config();
    targets = bench_bimap_lookup, bench_bimap_iter
}

criterion_main!(benches_basic_op, benches_query);

use bytepair_rs::{Symbol, SymbolStream, PairHistogram, Trainer, TrainerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate source code-like data
fn generate_source_code(size: usize) -> Vec<u8> {
    let patterns: [&[u8]; 7] = [
        b"fn main() {\n",
        b"    let x = 42;\n",
        b"    println!(\"Hello, world!\");\n",
        b"    if x > 0 {\n",
        b"        return x;\n",
        b"    }\n",
        b"}\n",
    ];

    let mut result = Vec::with_capacity(size);
    let mut i = 0;
    while result.len() < size {
        result.extend_from_slice(patterns[i % patterns.len()]);
        i += 1;
    }
    result.truncate(size);
    result
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> Vec<u8> {
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut seed = 12345u64;

    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            chars[(seed % chars.len() as u64) as usize]
        })
        .collect()
}

fn train(data: &[u8]) -> Vec<Symbol> {
    let mut trainer = Trainer::new(data, TrainerConfig::default()).unwrap();
    trainer.run(&mut Vec::<Vec<Symbol>>::new()).unwrap();
    trainer.tokens()
}

fn bench_training(c: &mut Criterion) {
    let inputs: [(&str, fn(usize) -> Vec<u8>, &[usize]); 3] = [
        ("repetitive_text", generate_repetitive_text, &[1_000, 10_000, 100_000]),
        ("source_code", generate_source_code, &[1_000, 10_000, 50_000]),
        ("low_repetition", generate_low_repetition, &[1_000, 10_000, 50_000]),
    ];

    for (name, generate, sizes) in inputs {
        let mut group = c.benchmark_group(name);
        for &size in sizes {
            let data = generate(size);
            group.bench_with_input(BenchmarkId::new("Trainer", size), &data, |b, data| {
                b.iter(|| black_box(train(black_box(data))));
            });
        }
        group.finish();
    }
}

fn bench_histogram_build(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("histogram_build");

    for size in sizes.iter() {
        let stream = SymbolStream::from_bytes(&generate_repetitive_text(*size));

        group.bench_with_input(BenchmarkId::new("PairHistogram", size), &stream, |b, stream| {
            b.iter(|| black_box(PairHistogram::build(black_box(stream))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_training, bench_histogram_build);
criterion_main!(benches);

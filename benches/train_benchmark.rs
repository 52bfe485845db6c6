use std::{fs::File, io::BufReader, path::Path};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postagger::{Dataset, HmmModel};

fn train(ds: &Dataset) {
    let model = HmmModel::train(ds);
    assert_eq!(model.num_tags(), 8);
}

fn train_benchmark(c: &mut Criterion) {
    let tags = Path::new("tests/data/simple-train-tags.txt");
    let words = Path::new("tests/data/simple-train-sentences.txt");
    let mut ds = Dataset::from_paths(tags, words).expect("failed to read corpus");
    // enlarge the corpus so counting dominates
    let seqs = ds.seqs.clone();
    for _ in 0..1000 {
        ds.seqs.extend(seqs.iter().cloned());
    }
    c.bench_function("train", |b| b.iter(|| train(black_box(&ds))));

    c.bench_function("read", |b| {
        b.iter(|| {
            let t = BufReader::new(File::open(tags).expect("failed to open file"));
            let w = BufReader::new(File::open(words).expect("failed to open file"));
            Dataset::from_readers(t, w).expect("failed to read corpus")
        })
    });
}

criterion_group!(benchmarks, train_benchmark);
criterion_main!(benchmarks);

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postagger::{Dataset, HmmModel, Tagger};

fn predict<T: Tagger>(tagger: &T, dataset: &Dataset) {
    let mut n = 0;
    for seq in dataset {
        let pred = tagger.tag(&seq.words).expect("failed to tag");
        n += seq.tags.iter().zip(&pred).filter(|(a, b)| a != b).count();
    }
    black_box(n);
}

fn predict_benchmark(c: &mut Criterion) {
    let model = HmmModel::from_paths("tests/data/simple-train-tags.txt", "tests/data/simple-train-sentences.txt")
        .expect("failed to train model");
    let tagger = model.tagger();
    let dataset = Dataset::from_paths("tests/data/simple-test-tags.txt", "tests/data/simple-test-sentences.txt")
        .expect("failed to read test data");

    c.bench_function("predict", |b| b.iter(|| predict(black_box(&tagger), black_box(&dataset))));

    let long: Vec<&str> = "the big dog saw my cat .".split(' ').cycle().take(700).collect();
    c.bench_function("predict_long", |b| b.iter(|| tagger.viterbi(black_box(&long)).expect("failed to tag")));
}

criterion_group! {
    name = benchmarks;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = predict_benchmark
}

criterion_main!(benchmarks);

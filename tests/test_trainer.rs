use postagger::{Error, HmmModel, IngestionError, State};

#[test]
fn normalized_tables() {
    let model = HmmModel::from_paths("tests/data/simple-train-tags.txt", "tests/data/simple-train-sentences.txt")
        .expect("failed to train model");
    assert_eq!(model.num_tags(), 8);
    for (src, row) in model.transitions().rows() {
        let sum: f64 = row.values().map(|p| p.exp()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "{src}: {sum}");
        assert!(row.values().all(|p| *p <= 0.0));
    }
    for (tag, row) in model.emissions().rows() {
        let sum: f64 = row.values().map(|p| p.exp()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "{tag}: {sum}");
    }
    assert!(model.transitions().row(&State::Start).is_some());
    assert!(model.transitions().row(&State::from(".")).is_none());
    let p = model.transition_log_prob(&State::Start, "DET").unwrap();
    assert!((p - (6.0_f64 / 10.0).ln()).abs() < 1e-12);
    assert_eq!(model.emission_log_prob("DET", "THE"), model.emission_log_prob("DET", "the"));
}

#[test]
fn mismatched_corpora() {
    let ret = HmmModel::from_readers("N V\nN\n".as_bytes(), "dog runs\n".as_bytes());
    match ret {
        Err(Error::Ingestion(IngestionError::LineCountMismatch { tags: 2, words: 1 })) => {}
        other => panic!("unexpected: {:?}", other),
    }
    let ret = HmmModel::from_readers("N V\n".as_bytes(), "dog\n".as_bytes());
    match ret {
        Err(Error::Ingestion(IngestionError::TokenCountMismatch { line: 1, tags: 2, words: 1 })) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn missing_corpus() {
    let ret = HmmModel::from_paths("tests/data/missing-tags.txt", "tests/data/simple-train-sentences.txt");
    assert!(matches!(ret, Err(Error::Ingestion(IngestionError::Io(_)))));
}

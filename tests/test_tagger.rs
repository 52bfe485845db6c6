use postagger::{evaluate, Accuracy, Dataset, HmmModel, Params, Tagger};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

fn model() -> HmmModel {
    init_logger();
    HmmModel::from_paths("tests/data/simple-train-tags.txt", "tests/data/simple-train-sentences.txt")
        .expect("failed to train model")
}

#[test]
fn tag_sentences() {
    let model = model();
    let tagger = model.tagger();
    assert_eq!(tagger.tag_sentence("trains are fast .").unwrap(), ["N", "V", "ADV", "."]);
    assert_eq!(
        tagger.tag_sentence("my dog bark is beautiful .").unwrap(),
        ["PRO", "N", "V", "DET", "N", "."]
    );
    let path = tagger.viterbi(&["trains", "are", "fast", "."]).unwrap();
    assert!((path.score - -10.106428396532817).abs() < 1e-9, "{}", path.score);
}

#[test]
fn unseen_word() {
    let model = model();
    let tags = model.tagger().tag_sentence("The zebra runs fast .").unwrap();
    assert_eq!(tags, ["DET", "N", "V", "ADV", "."]);
}

#[test]
fn length_is_preserved() {
    let model = model();
    let tagger = model.tagger();
    let f = std::fs::File::open("tests/data/simple-test-sentences.txt").expect("failed to open file");
    let sentences = Dataset::read_sentences(std::io::BufReader::new(f)).unwrap();
    assert_eq!(sentences.len(), 4);
    for words in &sentences {
        assert_eq!(tagger.tag(words).unwrap().len(), words.len());
    }
}

#[test]
fn test_data() {
    let model = model();
    let ds = Dataset::from_paths("tests/data/simple-test-tags.txt", "tests/data/simple-test-sentences.txt")
        .expect("failed to read test data");
    let evaluation = evaluate(&model.tagger(), &ds).unwrap();
    let accuracy = evaluation.accuracy();
    assert_eq!((accuracy.correct, accuracy.wrong), (20, 1));
    assert!((accuracy.percent_correct - 95.23809523809524).abs() < 1e-9);
    assert_eq!(evaluation.sequence_accuracy(), 0.75);
    println!("{}", evaluation);
}

#[test]
fn training_data() {
    let model = model();
    let ds = Dataset::from_paths("tests/data/simple-train-tags.txt", "tests/data/simple-train-sentences.txt").unwrap();
    let evaluation = evaluate(&model.tagger(), &ds).unwrap();
    assert_eq!(evaluation.accuracy(), Accuracy { correct: 52, wrong: 1, percent_correct: 100.0 * 52.0 / 53.0 });
}

#[test]
fn penalty_from_config() {
    let model = model();
    let params = Params::from_reader(r#"{"unseen_penalty": -100.0}"#.as_bytes()).unwrap();
    let a = model.tagger_with(params).tag_sentence("Cats chase the dog .").unwrap();
    let b = model.tagger().tag_sentence("Cats chase the dog .").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, ["N", "V", "DET", "N", "."]);
}

#[test]
fn empty_sentence() {
    let model = model();
    assert!(model.tagger().tag_sentence("").unwrap().is_empty());
}

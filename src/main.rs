use std::{
    io::{stdin, stdout, BufRead, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use clap::{Parser, Subcommand};
use postagger::{evaluate, Dataset, HmmModel, Params, Tagger};

/// Train an HMM part-of-speech tagger on parallel tag/word files (one sentence
/// per line) and use it to tag or evaluate sentences
#[derive(Debug, Parser)]
#[command(version)]
#[command(propagate_version = true)]
struct Argv {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// training tags, one sentence per line
    #[arg(long, required = true, value_name = "FILE")]
    train_tags: PathBuf,
    /// training sentences, aligned with --train-tags
    #[arg(long, required = true, value_name = "FILE")]
    train_words: PathBuf,
    /// read parameters from a JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// override a parameter (NAME=VALUE), e.g. -p unseen_penalty=-50
    #[arg(short)]
    parameters: Vec<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// tag the given sentences
    Tag {
        #[arg(required = true, value_name = "SENTENCE")]
        sentences: Vec<String>,
    },
    /// report the accuracy of the model on labelled data
    Test {
        #[arg(long, value_name = "FILE")]
        words: PathBuf,
        #[arg(long, value_name = "FILE")]
        tags: PathBuf,
        /// print the accuracy summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// read sentences from STDIN and tag them until EOF
    Interactive,
    /// print the effective parameters as JSON
    Params,
}

fn print_tags<T: Tagger>(tagger: &T, sentence: &str) {
    match tagger.tag_sentence(sentence) {
        Ok(tags) => println!("{}", tags.join(" ")),
        Err(e) => eprintln!("{sentence}: {e}"),
    }
}

fn train(tags: &Path, words: &Path) -> HmmModel {
    let begin = Instant::now();
    let model = HmmModel::from_paths(tags, words).expect("failed to train model");
    log::info!("training took: {:?}", begin.elapsed());
    model
}

fn main() {
    let argv = Argv::parse();
    env_logger::builder()
        .filter_level(match argv.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .parse_default_env()
        .init();
    log::info!("argv: {:?}", argv);

    let mut params = match &argv.config {
        Some(path) => Params::from_path(path).expect("failed to read config"),
        None => Params::default(),
    };
    argv.parameters.iter().for_each(|s| {
        if let Some((name, value)) = s.split_once('=') {
            params.set(name, value).unwrap_or_else(|e| panic!("failed to set parameter {s}: {e}"));
        } else {
            log::warn!("ignoring parameter without '=': {s}");
        }
    });
    match argv.command {
        Command::Params => {
            println!("{}", params.to_json().expect("failed to serialize parameters"));
        }
        Command::Tag { sentences } => {
            let model = train(&argv.train_tags, &argv.train_words);
            let tagger = model.tagger_with(params);
            for sentence in &sentences {
                print_tags(&tagger, sentence);
            }
        }
        Command::Test { words, tags, json } => {
            let model = train(&argv.train_tags, &argv.train_words);
            let tagger = model.tagger_with(params);
            let ds = Dataset::from_paths(&tags, &words).expect("failed to read test data");
            let begin = Instant::now();
            let evaluation = evaluate(&tagger, &ds).expect("failed to evaluate");
            log::info!("elapsed time: {:?}", begin.elapsed());
            if json {
                println!("{}", serde_json::to_string(&evaluation.accuracy()).expect("failed to serialize accuracy"));
            } else {
                println!("{}", evaluation);
            }
        }
        Command::Interactive => {
            let model = train(&argv.train_tags, &argv.train_words);
            let tagger = model.tagger_with(params);
            let mut out = stdout();
            let mut lines = stdin().lock().lines();
            loop {
                print!("Type in test sentence: ");
                out.flush().expect("failed to flush stdout");
                let Some(line) = lines.next() else { break };
                let line = line.expect("failed to read line");
                print_tags(&tagger, &line);
            }
        }
    }
}

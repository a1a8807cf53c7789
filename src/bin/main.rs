use anagram_core::dictionary::tokenize_sentence;
use anagram_core::{AnagramEngine, EngineConfig};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Prints every sentence of dictionary words that is an anagram of the input.
#[derive(Parser, Debug)]
#[command(name = "anagram_engine")]
struct Args {
    /// JSON config file
    #[arg(long, env = "ANAGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(long, env = "ANAGRAM_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Index snapshot path, created on first run
    #[arg(long, env = "ANAGRAM_INDEX_CACHE")]
    index_cache: Option<PathBuf>,

    /// Refuse sentences with more letters than this
    #[arg(long, env = "ANAGRAM_MAX_LETTERS")]
    max_letters: Option<usize>,

    /// Emit a JSON array instead of one sentence per line
    #[arg(long)]
    json: bool,

    /// List the single-word anagrams of this word instead
    #[arg(long, conflicts_with = "sentence")]
    word: Option<String>,

    /// The sentence to rearrange
    sentence: Vec<String>,
}

impl Args {
    fn engine_config(&self) -> anagram_core::Result<EngineConfig> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        Ok(config.with_overrides(
            self.dictionary.clone(),
            self.index_cache.clone(),
            self.max_letters,
        ))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("anagram_engine: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let engine = AnagramEngine::from_cache_or_build(args.engine_config()?)?;

    let results: Vec<String> = match &args.word {
        Some(word) => engine.anagrams_of_word(word).to_vec(),
        None => {
            let sentence = tokenize_sentence(&args.sentence.join(" "));
            engine
                .sentence_anagrams(&sentence)?
                .into_iter()
                .map(|words| words.join(" "))
                .collect()
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for line in &results {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

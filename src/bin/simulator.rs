use anagram_core::dictionary::tokenize_sentence;
use anagram_core::{AnagramEngine, EngineConfig, Sentence};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_DICTIONARY: &str = "data/words.txt";

/// Interactive anagram explorer.
#[derive(Parser, Debug)]
#[command(name = "anagram_simulator")]
struct Args {
    /// JSON config file
    #[arg(long, env = "ANAGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Word list, one word per line [default: data/words.txt]
    #[arg(long, env = "ANAGRAM_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Index snapshot path, created on first run
    #[arg(long, env = "ANAGRAM_INDEX_CACHE")]
    index_cache: Option<PathBuf>,

    /// Refuse sentences with more letters than this
    #[arg(long, env = "ANAGRAM_MAX_LETTERS")]
    max_letters: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut config = config.with_overrides(args.dictionary, args.index_cache, args.max_letters);
    if config.dictionary.is_none() {
        config.dictionary = Some(PathBuf::from(DEFAULT_DICTIONARY));
    }
    let engine = AnagramEngine::from_cache_or_build(config)?;

    print_banner(&engine);

    let mut input = String::new();
    loop {
        print!("\n> ");
        stdout().flush()?;

        input.clear();
        if stdin().lock().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":w ") => {
                let word = s[3..].trim();
                let anagrams = engine.anagrams_of_word(word);
                if anagrams.is_empty() {
                    println!("{}", "No word anagrams found.".dark_grey());
                } else {
                    println!("{}", anagrams.join(", ").green());
                }
            }
            s if s.starts_with(":s ") => {
                let sentence = tokenize_sentence(&s[3..]);
                let signature = engine.occurrences(&sentence);
                println!("Signature: {}", signature.to_string().cyan());
                println!("Sub-signatures: {}", engine.combinations(&signature).len());
            }
            s => {
                let sentence = tokenize_sentence(s);
                match engine.sentence_anagrams(&sentence) {
                    Ok(found) => print_sentences(&found, engine.config().max_display),
                    Err(e) => println!("{} {}", "error:".red().bold(), e),
                }
            }
        }
    }

    Ok(())
}

fn print_banner(engine: &AnagramEngine) {
    println!("{}", "Sentence Anagram Simulator".bold());
    println!("---------------------------------------------------------------");
    println!(
        "{} words in {} signature groups.",
        engine.index().word_count(),
        engine.index().signature_count()
    );
    println!("Type a sentence to rearrange it. ':w WORD' lists word anagrams,");
    println!("':s SENTENCE' shows its signature. 'exit' to quit.");
}

fn print_sentences(found: &[Sentence], max_display: usize) {
    if found.is_empty() {
        println!("{}", "No sentence anagrams found.".dark_grey());
        return;
    }
    println!("{} sentences:", found.len().to_string().yellow());
    for (i, words) in found.iter().take(max_display).enumerate() {
        println!("  {:>3}: {}", i + 1, words.join(" "));
    }
    if found.len() > max_display {
        println!("  {}", format!("... {} more", found.len() - max_display).dark_grey());
    }
}

//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of whole grid builds on *your* machine.
//! - Loads the word list once, then builds drafts from growing prefixes of it
//!   several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Own word list:                  `cargo run --bin bench_local --release -- -w words.txt`
//!
//! NOTES
//! -----
//! - Quick and convenient, not statistically rigorous.
//! - Duplicates are dropped from the loaded list so every build is valid.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::collections::HashSet;
use std::hint::black_box;
use std::time::Instant;

use crossgrid::draft::{self, WordOrdering};
use crossgrid::word_list::WordList;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (word or word;score per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_words.txt")
    )]
    word_list: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Order in which words are offered to the placer
    #[arg(short, long, value_enum, default_value_t = WordOrdering::LongestFirst)]
    order: WordOrdering,
}

/// Prefix sizes to time; sizes beyond the list length are clamped.
const CASE_SIZES: [usize; 5] = [10, 50, 100, 500, 1_000];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Keep the first occurrence of every word.
fn unique_words(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let words = unique_words(WordList::load_from_path(&cli.word_list, cli.min_score)?.words);
    eprintln!("Loaded {} words in {:.3}s", words.len(), t_load.elapsed().as_secs_f64());

    let mut sizes: Vec<usize> = CASE_SIZES.iter().map(|&n| n.min(words.len())).collect();
    sizes.dedup();

    eprintln!("\n{:>8} | {:>10} | {:>8} | {:>8} | {:>9}", "words", "median (s)", "placed", "excluded", "grid");
    eprintln!("{:-<8}-+-{:-<10}-+-{:-<8}-+-{:-<8}-+-{:-<9}", "", "", "", "", "");

    for size in sizes {
        let case = &words[..size];
        // warm-up, not timed
        let warmup = draft::create_crossword_draft(case, cli.order, None)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        for _ in 0..cli.num_repeats {
            let t_build = Instant::now();
            let result = draft::create_crossword_draft(black_box(case), cli.order, None)?;
            times.push(t_build.elapsed().as_secs_f64());
            black_box(result.solution.len());
        }

        eprintln!(
            "{size:>8} | {:>10.4} | {:>8} | {:>8} | {:>9}",
            median(times),
            warmup.solution.len(),
            warmup.excluded.len(),
            format!("{}x{}", warmup.width, warmup.height)
        );
    }

    Ok(())
}

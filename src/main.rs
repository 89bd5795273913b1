use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use crossgrid::draft::{self, WordOrdering};
use crossgrid::errors::BuildError;
use crossgrid::shape::Dimensions;
use crossgrid::word_list::WordList;

/// Crossgrid crossword builder
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Words to place (appended after any words read from --word-list)
    words: Vec<String>,

    /// Path to a word list file (word or word;score per line)
    #[arg(short, long)]
    word_list: Option<String>,

    /// Minimum score filter for scored word-list entries
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Maximum grid width (needs --max-height)
    #[arg(long, requires = "max_height")]
    max_width: Option<u32>,

    /// Maximum grid height (needs --max-width)
    #[arg(long, requires = "max_width")]
    max_height: Option<u32>,

    /// Order in which words are offered to the placer
    #[arg(short, long, value_enum, default_value_t = WordOrdering::Alphabetical)]
    order: WordOrdering,

    /// Print the draft as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {

    // Set up logging
    let debug_enabled = std::env::var("CROSSGRID_DEBUG").is_ok();
    crossgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(build_err) = e.downcast_ref::<BuildError>() {
            eprintln!("Error: {}", build_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crossgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Collect words from the optional word list and the positional arguments.
/// 3. Order, build and pack the crossword.
/// 4. Print the grid (or JSON draft) on stdout and a summary on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut words = match &cli.word_list {
        Some(path) => WordList::load_from_path(path, cli.min_score)?.words,
        None => Vec::new(),
    };
    words.extend(cli.words.iter().map(|w| w.to_lowercase()));

    if words.is_empty() {
        return Err("no words given (pass words as arguments or use --word-list)".into());
    }

    let maximum_dimensions = Dimensions::from_limits(cli.max_width, cli.max_height);

    let t_build = Instant::now();
    let draft = draft::create_crossword_draft(&words, cli.order, maximum_dimensions)?;
    let build_secs = t_build.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        println!("{}", draft.text_view());
        for placed in &draft.solution {
            eprintln!("✓ {}", placed.word);
        }
        for word in &draft.excluded {
            eprintln!("✗ {word}");
        }
    }

    eprintln!(
        "Placed {}/{} words on a {}x{} grid in {:.3}s.",
        draft.solution.len(),
        words.len(),
        draft.width,
        draft.height,
        build_secs
    );

    Ok(())
}

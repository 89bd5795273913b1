//! Building a whole crossword from a list of candidate words.
//!
//! [`build_grid`] runs the placer over the words in the order given and
//! partitions them into placed and excluded words. [`create_crossword_draft`]
//! is the caller-facing entry point: it orders the words, builds, packs, and
//! reports every accepted word's letters in packed coordinates.
//!
//! Words are compared literally and case-sensitively. They must be distinct
//! and non-empty; both conditions are checked up front and abort the build
//! with a [`BuildError`].
//!
//! # Examples
//!
//! ```
//! use crossgrid::draft::{create_crossword_draft, WordOrdering};
//!
//! let draft = create_crossword_draft(&["nope", "dig", "dry"], WordOrdering::Alphabetical, None)?;
//! assert_eq!((draft.width, draft.height), (3, 3));
//! assert_eq!(draft.excluded, vec!["nope".to_string()]);
//! # Ok::<(), crossgrid::errors::BuildError>(())
//! ```

use std::collections::HashSet;

use log::info;

use crate::errors::BuildError;
use crate::grid::SparseGrid;
use crate::letter::Letter;
use crate::packer::PackedGrid;
use crate::placer::CrosswordGrid;
use crate::shape::Dimensions;
use crate::text_view;

/// Order in which candidate words are offered to the placer.
///
/// The placer is greedy, so the order decides which words make it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrdering {
    /// Plain string order.
    #[default]
    Alphabetical,
    /// Longer words first, ties in string order.
    LongestFirst,
    /// Exactly as supplied.
    Given,
}

impl WordOrdering {
    /// Sort `words` in place. All orderings are stable.
    pub fn apply(self, words: &mut [String]) {
        match self {
            WordOrdering::Alphabetical => words.sort(),
            WordOrdering::LongestFirst => words.sort_by(|a, b| {
                b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
            }),
            WordOrdering::Given => {}
        }
    }
}

/// A word that made it into the grid, with the letters it occupies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub letters: Vec<Letter>,
}

/// Result of [`build_grid`]: the unpacked grid plus the outcome of every word.
#[derive(Debug, Clone)]
pub struct BuiltGrid {
    pub grid: CrosswordGrid,
    /// Placed words in placement order; letters in unpacked coordinates.
    pub placed: Vec<PlacedWord>,
    /// Words that could not be placed, in the order they were tried.
    pub excluded: Vec<String>,
}

impl BuiltGrid {
    /// Pack the grid and translate every placed word along with it.
    #[must_use]
    pub fn into_draft(self) -> CrosswordDraft {
        let packed: PackedGrid = self.grid.pack();
        let dimensions = packed.dimensions();
        let solution = self
            .placed
            .into_iter()
            .map(|placed| PlacedWord {
                letters: packed.translate(&placed.letters),
                word: placed.word,
            })
            .collect();
        CrosswordDraft {
            width: dimensions.width,
            height: dimensions.height,
            solution,
            excluded: self.excluded,
        }
    }
}

/// A finished, packed crossword ready for an external puzzle model.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CrosswordDraft {
    pub width: u32,
    pub height: u32,
    pub solution: Vec<PlacedWord>,
    pub excluded: Vec<String>,
}

impl CrosswordDraft {
    /// Every letter of the solution, word by word; crossings appear once per
    /// word that uses them.
    pub fn solution_letters(&self) -> impl Iterator<Item = &Letter> {
        self.solution.iter().flat_map(|placed| placed.letters.iter())
    }

    /// Text grid of the packed solution (see [`text_view`]).
    #[must_use]
    pub fn text_view(&self) -> String {
        let mut grid = SparseGrid::new();
        for letter in self.solution_letters() {
            grid.put(letter.position, *letter);
        }
        text_view::render(&grid)
    }
}

/// Check the caller contract: no empty words, no repeated words.
///
/// # Errors
///
/// Returns [`BuildError::EmptyWord`] for the first empty word, otherwise
/// [`BuildError::DuplicateWord`] for the first word seen twice.
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<(), BuildError> {
    if let Some(index) = words.iter().position(|w| w.as_ref().is_empty()) {
        return Err(BuildError::EmptyWord { index });
    }
    let mut seen = HashSet::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        if !seen.insert(word) {
            return Err(BuildError::DuplicateWord { word: word.to_string() });
        }
    }
    Ok(())
}

/// Place `words` greedily, in the order given.
///
/// The first word is laid out unconditionally; each later word is either
/// placed or excluded for good.
///
/// # Errors
///
/// Fails before placing anything if [`validate_words`] does.
pub fn build_grid<S: AsRef<str>>(
    words: &[S],
    maximum_dimensions: Option<Dimensions>,
) -> Result<BuiltGrid, BuildError> {
    validate_words(words)?;

    let mut grid = CrosswordGrid::new(maximum_dimensions);
    let mut placed = Vec::new();
    let mut excluded = Vec::new();

    for word in words {
        let word = word.as_ref();
        match grid.add_word(word) {
            Some(letters) => placed.push(PlacedWord { word: word.to_string(), letters }),
            None => excluded.push(word.to_string()),
        }
    }

    info!(
        "Built {}x{} grid: {} placed, {} excluded",
        grid.dimensions().width,
        grid.dimensions().height,
        placed.len(),
        excluded.len()
    );

    Ok(BuiltGrid { grid, placed, excluded })
}

/// Order, build and pack a crossword.
///
/// # Errors
///
/// Returns a [`BuildError`] if the words break the caller contract.
pub fn create_crossword_draft<S: AsRef<str>>(
    words: &[S],
    ordering: WordOrdering,
    maximum_dimensions: Option<Dimensions>,
) -> Result<CrosswordDraft, BuildError> {
    validate_words(words)?;
    let mut ordered: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
    ordering.apply(&mut ordered);
    Ok(build_grid(&ordered, maximum_dimensions)?.into_draft())
}

// Reusable library API — the word-placement engine plus the draft builder.
pub mod draft;
pub mod errors;
pub mod grid;
pub mod insertion;
pub mod letter;
pub mod log;
pub mod packer;
pub mod placer;
pub mod position;
pub mod shape;
pub mod text_view;
pub mod word_list;

pub use draft::{build_grid, create_crossword_draft, CrosswordDraft, PlacedWord, WordOrdering};
pub use errors::BuildError;
pub use letter::Letter;
pub use position::{Axis, Position};
pub use shape::Dimensions;

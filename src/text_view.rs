//! Plain-text rendering of a letter grid, mostly for debugging and tests.
//!
//! Rows run top to bottom over the grid's shape. Occupied cells show their
//! character in uppercase, empty coordinates show [`BLOCK_CHARACTER`].

use crate::grid::SparseGrid;
use crate::letter::Letter;
use crate::position::Position;

pub const BLOCK_CHARACTER: char = '■';
const NEW_LINE: &str = "\n";

#[must_use]
pub fn render<T: AsRef<Letter>>(grid: &SparseGrid<T>) -> String {
    let shape = grid.shape();
    shape
        .vertical_indices()
        .map(|y| {
            shape
                .horizontal_indices()
                .flat_map(|x| match grid.get(&Position::new(x, y)) {
                    Some(item) => item.as_ref().character.to_uppercase().collect::<Vec<_>>(),
                    None => vec![BLOCK_CHARACTER],
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(NEW_LINE)
}

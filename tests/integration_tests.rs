//! Integration tests for the crossgrid placement engine.
//!
//! Most tests lay out a handful of words and compare the whole grid against
//! its text view, one row per line, `■` for empty squares.

use crossgrid::draft::{build_grid, create_crossword_draft, WordOrdering};
use crossgrid::errors::BuildError;
use crossgrid::letter::Letter;
use crossgrid::placer::CrosswordGrid;
use crossgrid::position::Position;
use crossgrid::shape::Dimensions;

/// Compare a grid against an indented, multi-line picture of it.
fn assert_grid_equals(grid: &CrosswordGrid, expected: &str) {
    let lines: Vec<&str> = expected.trim().lines().map(str::trim).collect();
    let actual = grid.text_view();
    assert_eq!(actual, lines.join("\n"), "\nactual grid:\n{actual}\n");
    let width = u32::try_from(lines[0].chars().count()).unwrap();
    let height = u32::try_from(lines.len()).unwrap();
    assert_eq!(grid.dimensions(), Dimensions::new(width, height));
}

fn grid_with(maximum_dimensions: Option<Dimensions>, words: &[&str]) -> CrosswordGrid {
    let mut grid = CrosswordGrid::new(maximum_dimensions);
    for word in words {
        assert!(grid.add_word(word).is_some(), "expected '{word}' to fit");
    }
    grid
}

#[cfg(test)]
mod placement {
    use super::*;

    #[test]
    fn test_empty_grid() {
        assert_grid_equals(&CrosswordGrid::new(None), "■");
    }

    #[test]
    fn test_one_character() {
        assert_grid_equals(&grid_with(None, &["a"]), "A");
    }

    #[test]
    fn test_two_characters() {
        assert_grid_equals(&grid_with(None, &["ab"]), "AB");
    }

    #[test]
    fn test_two_words_first_letter_in_common() {
        assert_grid_equals(
            &grid_with(None, &["dig", "dry"]),
            "
            DIG
            R■■
            Y■■
            ",
        );
    }

    #[test]
    fn test_two_words_second_letter_in_common() {
        assert_grid_equals(
            &grid_with(None, &["dig", "odd"]),
            "
            O■■
            DIG
            D■■
            ",
        );
    }

    #[test]
    fn test_two_words_last_letter_in_common() {
        assert_grid_equals(
            &grid_with(None, &["dig", "rug"]),
            "
            ■■R
            ■■U
            DIG
            ",
        );
    }

    #[test]
    fn test_two_words_cannot_fit_together() {
        let mut grid = grid_with(None, &["dig"]);
        assert!(grid.add_word("nope").is_none());
        assert_grid_equals(&grid, "DIG");
    }

    #[test]
    fn test_three_words_two_share_a_character() {
        assert_grid_equals(
            &grid_with(None, &["doggy", "ding", "trudge"]),
            "
            ■■T■■
            ■■R■■
            ■■U■■
            ■■D■■
            DOGGY
            I■E■■
            N■■■■
            G■■■■
            ",
        );
    }

    #[test]
    fn test_second_word_shares_a_character_with_third() {
        assert_grid_equals(
            &grid_with(None, &["doggy", "drag", "amend"]),
            "
            DOGGY
            R■■■■
            AMEND
            G■■■■
            ",
        );
    }

    #[test]
    fn test_multiple_words_each_sharing_a_character_with_another() {
        assert_grid_equals(
            &grid_with(None, &["dorm", "drag", "arm", "ridge", "might", "height"]),
            "
            ■■■■■A■
            ■■■DORM
            ■■■R■M■
            ■M■A■■■
            RIDGE■■
            ■G■■■■■
            ■HEIGHT
            ■T■■■■■
            ",
        );
    }

    #[test]
    fn test_last_word_avoids_mismatching_intersections() {
        assert_grid_equals(
            &grid_with(None, &["mould", "among", "new", "undo"]),
            "
            ■■■■U
            A■■■N
            MOULD
            O■■■O
            NEW■■
            G■■■■
            ",
        );
    }

    #[test]
    fn test_last_word_crosses_two_words_on_common_letters() {
        let grid = grid_with(None, &["mould", "among", "new", "unwind"]);
        assert_grid_equals(
            &grid,
            "
            A■■■■
            MOULD
            O■N■■
            NEW■■
            G■I■■
            ■■N■■
            ■■D■■
            ",
        );
        // both crossings of "unwind" are marked
        let shape = *grid.shape();
        let u = grid.at(shape.min_x + 2, shape.min_y + 1).unwrap();
        let w = grid.at(shape.min_x + 2, shape.min_y + 3).unwrap();
        assert_eq!((u.character(), w.character()), ('u', 'w'));
        assert!(u.is_intersected() && w.is_intersected());
    }

    #[test]
    fn test_last_word_would_touch_another_cannot_fit() {
        let mut grid = grid_with(None, &["efg", "bde", "jigc"]);
        assert!(grid.add_word("abc").is_none());
        assert_grid_equals(
            &grid,
            "
            B■J
            D■I
            EFG
            ■■C
            ",
        );
    }

    #[test]
    fn test_maximum_dimensions_exceeded() {
        let mut grid = grid_with(Some(Dimensions::new(5, 4)), &["abcde", "feff"]);
        assert!(grid.add_word("fiiiiiiii").is_none());
        assert_grid_equals(
            &grid,
            "
            ■■■■F
            ABCDE
            ■■■■F
            ■■■■F
            ",
        );
    }

    #[test]
    fn test_word_forced_to_choose_intersection_that_fits_dimensions() {
        assert_grid_equals(
            &grid_with(Some(Dimensions::new(5, 5)), &["fbcdh", "efghi", "hyyyy"]),
            "
            E■■■■
            FBCDH
            G■■■■
            HYYYY
            I■■■■
            ",
        );
    }

    #[test]
    fn test_case_sensitive_matching() {
        let mut grid = grid_with(None, &["Dig"]);
        assert!(grid.add_word("dry").is_none());
        assert!(grid.add_word("Dry").is_some());
    }
}

#[cfg(test)]
mod packing {
    use super::*;

    #[test]
    fn test_packed_grid_letters_and_dimensions() {
        let grid = grid_with(None, &["abc", "defa", "ghd"]);
        let packed = grid.pack();
        let letters: Vec<Letter> = packed.letters().copied().collect();
        let expected: Vec<Letter> = [
            ('a', 2, 3),
            ('b', 3, 3),
            ('c', 4, 3),
            ('d', 2, 0),
            ('e', 2, 1),
            ('f', 2, 2),
            ('g', 0, 0),
            ('h', 1, 0),
        ]
        .iter()
        .map(|&(c, x, y)| Letter::new(c, Position::new(x, y)))
        .collect();
        assert_eq!(letters, expected);
        assert_eq!(packed.dimensions(), grid.dimensions());
        assert_eq!(packed.text_view(), grid.text_view());
    }

    #[test]
    fn test_packing_a_grid_already_at_origin_changes_nothing() {
        let grid = grid_with(None, &["dig", "dry"]);
        let packed = grid.pack();
        assert_eq!(packed.offset(), Position::ORIGIN);
        let original: Vec<Letter> = grid.cells().map(|cell| *cell.letter()).collect();
        assert!(packed.letters().copied().eq(original));
    }
}

#[cfg(test)]
mod drafts {
    use super::*;

    #[test]
    fn test_single_word() {
        let draft = create_crossword_draft(&["a"], WordOrdering::Given, None).unwrap();
        assert_eq!((draft.width, draft.height), (1, 1));
        assert_eq!(draft.solution.len(), 1);
        assert_eq!(draft.solution[0].letters, vec![Letter::new('a', Position::ORIGIN)]);
        assert!(draft.excluded.is_empty());
    }

    #[test]
    fn test_dig_and_dry() {
        let draft = create_crossword_draft(&["dig", "dry"], WordOrdering::Given, None).unwrap();
        assert_eq!((draft.width, draft.height), (3, 3));
        assert_eq!(draft.solution.len(), 2);
        assert_eq!(draft.solution[1].letters[0], Letter::new('d', Position::ORIGIN));
    }

    #[test]
    fn test_dig_and_nope() {
        let draft = create_crossword_draft(&["dig", "nope"], WordOrdering::Given, None).unwrap();
        assert_eq!((draft.width, draft.height), (3, 1));
        assert_eq!(draft.excluded, vec!["nope".to_string()]);
    }

    #[test]
    fn test_touch_rule_excludes_abc() {
        let draft = create_crossword_draft(&["efg", "bde", "jigc", "abc"], WordOrdering::Given, None).unwrap();
        assert_eq!(draft.excluded, vec!["abc".to_string()]);
        assert_eq!(draft.text_view(), "B■J\nD■I\nEFG\n■■C");
    }

    #[test]
    fn test_ceiling_excludes_word_despite_character_match() {
        let draft = create_crossword_draft(
            &["abcde", "feff", "fiiiiiiii"],
            WordOrdering::Given,
            Some(Dimensions::new(5, 4)),
        )
        .unwrap();
        assert_eq!((draft.width, draft.height), (5, 4));
        assert_eq!(draft.excluded, vec!["fiiiiiiii".to_string()]);
    }

    #[test]
    fn test_ordering_changes_the_outcome() {
        let words = ["ab", "bc", "ca"];
        let given = create_crossword_draft(&words, WordOrdering::Given, None).unwrap();
        let longest = create_crossword_draft(&["zz", "ab", "bzb"], WordOrdering::LongestFirst, None).unwrap();
        assert_eq!(given.solution[0].word, "ab");
        assert_eq!(longest.solution[0].word, "bzb");
    }

    #[test]
    fn test_duplicate_words_abort_the_build() {
        let err = create_crossword_draft(&["common word", "common word"], WordOrdering::Alphabetical, None)
            .unwrap_err();
        assert_eq!(err.code(), "B001");
        assert!(err.to_string().contains("Non-unique words detected"));
    }

    #[test]
    fn test_empty_word_aborts_the_build() {
        let err = build_grid(&["dig", ""], None).unwrap_err();
        assert_eq!(err, BuildError::EmptyWord { index: 1 });
    }

    #[test]
    fn test_builds_are_deterministic() {
        let words = ["dorm", "drag", "arm", "ridge", "might", "height", "mould", "among"];
        let first = create_crossword_draft(&words, WordOrdering::LongestFirst, None).unwrap();
        for _ in 0..5 {
            let again = create_crossword_draft(&words, WordOrdering::LongestFirst, None).unwrap();
            assert_eq!(again, first);
        }
    }
}

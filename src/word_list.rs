//! `word_list` — load candidate words for a crossword from text.
//!
//! The format is one entry per line, either a bare `word` or `word;score`:
//! - blank lines and lines starting with `#` are skipped;
//! - when a score is present it must parse as an integer, and entries scoring
//!   below `min_score` are skipped; bare words are always kept;
//! - words are trimmed and lowercased.
//!
//! The list is NOT deduplicated and keeps file order. Repeated words are a
//! caller mistake the draft builder reports as
//! [`BuildError::DuplicateWord`](crate::errors::BuildError::DuplicateWord),
//! and ordering is the job of [`WordOrdering`](crate::draft::WordOrdering).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Lowercase words in file order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let word = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        // unparseable scores drop the line
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw
                    }
                    None => line,
                };
                let word = word.trim().to_lowercase();
                (!word.is_empty()).then_some(word)
            })
            .collect();

        WordList { words }
    }

    /// Read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }
}

//! Error types for building crossword grids, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - B001: `DuplicateWord` (The same word was supplied more than once)
//! - B002: `EmptyWord` (An empty string was supplied as a word)
//!
//! Both are caller contract violations: they are reported before any word is
//! placed. A word that simply does not fit is not an error; it ends up in the
//! draft's excluded list.
//!
//! # Examples
//!
//! ```
//! use crossgrid::draft::{create_crossword_draft, WordOrdering};
//! use crossgrid::errors::BuildError;
//!
//! match create_crossword_draft(&["dig", "dig"], WordOrdering::Given, None) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "B001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("duplicates are rejected"),
//! }
//! ```

/// Caller contract violations detected before placement starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Non-unique words detected: \"{word}\" appears more than once")]
    DuplicateWord { word: String },

    #[error("Empty word at position {index}")]
    EmptyWord { index: usize },
}

impl BuildError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::DuplicateWord { .. } => "B001",
            BuildError::EmptyWord { .. } => "B002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BuildError::DuplicateWord { .. } => "The same word was supplied more than once",
            BuildError::EmptyWord { .. } => "An empty string was supplied as a word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BuildError::DuplicateWord { .. } => "Words are compared as exact strings. The engine does not deduplicate its input, so the whole build is aborted instead of silently placing a subset.",
            BuildError::EmptyWord { .. } => "Every word must contain at least one character; an empty word has no letter it could cross another word with.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BuildError::DuplicateWord { .. } => Some("Remove repeated entries from the word list before building"),
            BuildError::EmptyWord { .. } => Some("Drop blank entries from the word list before building"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<BuildError> {
        vec![
            BuildError::DuplicateWord { word: "dig".to_string() },
            BuildError::EmptyWord { index: 2 },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (B0XX)");
            assert!(code.starts_with("B0"), "Error code '{code}' should start with 'B0'");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = BuildError::DuplicateWord { word: "dig".to_string() };
        let detailed = err.display_detailed();
        assert!(detailed.contains("B001"));
        assert!(detailed.contains("\"dig\""));
        assert!(detailed.contains(err.help().unwrap()));
        assert!(detailed.starts_with(&err.to_string()));
    }

    #[test]
    fn test_empty_word_message_names_index() {
        let err = BuildError::EmptyWord { index: 3 };
        assert_eq!(err.to_string(), "Empty word at position 3");
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "B999", None), "boom (B999)");
    }
}

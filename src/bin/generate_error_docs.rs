//! Generate error code documentation from the source of truth (`BuildError`).
//!
//! Codes, descriptions, details and help text are read straight from the
//! `code()`, `description()`, `details()` and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use crossgrid::errors::BuildError;

/// One of each `BuildError` variant, with representative payloads.
fn all_build_error_variants() -> Vec<BuildError> {
    vec![
        BuildError::DuplicateWord { word: "common word".to_string() },
        BuildError::EmptyWord { index: 3 },
    ]
}

fn write_error_section(out: &mut String, error: &BuildError) -> std::fmt::Result {
    writeln!(out, "### {}: {}\n", error.code(), error.description())?;
    writeln!(out, "**Details:** {}\n", error.details())?;

    if let Some(help_text) = error.help() {
        writeln!(out, "**How to fix:**")?;
        writeln!(out, "```\n{help_text}\n```\n")?;
    }

    writeln!(out, "**Example error message:**")?;
    writeln!(out, "```\n{error}\n```\n")?;

    writeln!(out, "**Detailed format:**")?;
    writeln!(out, "```\n{}\n```\n", error.display_detailed())?;

    writeln!(out, "---\n")
}

fn render_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Build Errors\n")?;
    writeln!(
        out,
        "Caller contract violations, reported before any word is placed. \
         A word that does not fit is not an error; it is listed as excluded.\n"
    )?;
    for error in all_build_error_variants() {
        write_error_section(&mut out, &error)?;
    }

    writeln!(out, "## Error Display Formats\n")?;
    writeln!(out, "### Simple Format")?;
    writeln!(out, "```\nError: <message>\n```\n")?;
    writeln!(out, "### Detailed Format (via `display_detailed()`)")?;
    writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```")?;
    Ok(out)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", render_docs()?);
    Ok(())
}

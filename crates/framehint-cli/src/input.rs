//! Input handling for texts, stdin and cell files.

use anyhow::{Context, Result};
use framehint_core::CompletionRequest;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// Invalid `--cursor` for the given cell.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor offset {cursor} is past the end of the cell ({len} bytes)")]
    OutOfRange { cursor: usize, len: usize },

    #[error("cursor offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Build requests from command-line texts, or from stdin lines if none are given.
pub fn read_texts(texts: &[String]) -> Result<Vec<CompletionRequest>> {
    if texts.is_empty() {
        read_from_stdin()
    } else {
        Ok(texts.iter().map(CompletionRequest::from_line).collect())
    }
}

fn read_from_stdin() -> Result<Vec<CompletionRequest>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| {
            line.map(CompletionRequest::from_line)
                .context("Failed to read from stdin")
        })
        .collect()
}

/// Build the request for a cursor inside a multi-line cell file.
pub fn read_cell(path: &Path, cursor: usize) -> Result<CompletionRequest> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cell file: {}", path.display()))?;

    cell_request(code, cursor).with_context(|| format!("Invalid cursor for {}", path.display()))
}

/// The shell reports the current physical line up to the cursor, plus the cell.
fn cell_request(code: String, cursor: usize) -> Result<CompletionRequest, CursorError> {
    if cursor > code.len() {
        return Err(CursorError::OutOfRange {
            cursor,
            len: code.len(),
        });
    }
    let before = code.get(..cursor).ok_or(CursorError::NotCharBoundary(cursor))?;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let line = before[line_start..].to_string();

    Ok(CompletionRequest::from_line(line).with_cell(code, cursor))
}

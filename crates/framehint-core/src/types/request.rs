//! Request types handed to the completer by the host.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Indentation that marks a continuation line inside a multi-line cell.
const CONTINUATION_INDENT: &str = "  ";

/// A completion request at the cursor.
///
/// Hosts usually report only the current physical line. When that line continues
/// a multi-line expression, the host may also hand over the whole cell so the
/// completer sees the call that was opened on an earlier line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    /// Current line up to the cursor.
    pub line: String,

    /// Full cell contents, when the host can provide them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellInput>,
}

/// Full text of a multi-line cell plus the cursor position inside it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellInput {
    pub code: String,

    /// Byte offset of the cursor in `code`.
    pub cursor_offset: usize,
}

impl CompletionRequest {
    pub fn from_line(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            cell: None,
        }
    }

    pub fn with_cell(mut self, code: impl Into<String>, cursor_offset: usize) -> Self {
        self.cell = Some(CellInput {
            code: code.into(),
            cursor_offset,
        });
        self
    }

    /// The logical text up to the cursor.
    ///
    /// Continuation lines are swapped for the cell prefix when one is available and
    /// the cursor lands on a character boundary. Otherwise the line is used as is.
    pub fn text_until_cursor(&self) -> &str {
        if !self.line.starts_with(CONTINUATION_INDENT) {
            return &self.line;
        }

        self.cell
            .as_ref()
            .and_then(|cell| cell.code.get(..cell.cursor_offset))
            .unwrap_or(self.line.as_str())
    }
}

use std::collections::HashMap;

use framehint_core::host::{Namespace, TabularObject};
use framehint_core::CompletionRequest;

/// A data frame with fixed columns.
pub struct Frame {
    columns: Vec<String>,
}

impl Frame {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TabularObject for Frame {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }
}

/// Session namespace holding named frames. Other bound names resolve to nothing.
#[derive(Default)]
pub struct TestSession {
    frames: HashMap<String, Frame>,
}

impl TestSession {
    pub fn with_frame(mut self, name: &str, columns: &[&str]) -> Self {
        self.frames.insert(name.to_string(), Frame::new(columns));
        self
    }
}

impl Namespace for TestSession {
    fn lookup(&self, name: &str) -> Option<&dyn TabularObject> {
        self.frames.get(name).map(|frame| frame as &dyn TabularObject)
    }
}

/// `df` with the columns `Name` and `FavoriteFood`.
#[allow(dead_code)]
pub fn people_session() -> TestSession {
    TestSession::default().with_frame("df", &["Name", "FavoriteFood"])
}

/// Builds a cell request from code containing a `|` cursor marker.
///
/// The request line is the current physical line up to the cursor, as a shell
/// would report it.
#[allow(dead_code)]
pub fn cell_request_at_cursor(code: &str) -> CompletionRequest {
    let cursor_offset = code.find('|').expect("code must contain cursor marker '|'");
    let clean_code = code.replace('|', "");
    let line_start = clean_code[..cursor_offset].rfind('\n').map_or(0, |idx| idx + 1);
    let line = &clean_code[line_start..cursor_offset];
    CompletionRequest::from_line(line).with_cell(clean_code.clone(), cursor_offset)
}

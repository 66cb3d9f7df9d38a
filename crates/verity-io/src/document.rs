use std::path::PathBuf;

use crate::TextSource;

/// Concatenate rendered lines, each followed by a newline, trailing whitespace trimmed
pub fn join_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text.truncate(text.trim_end().len());
    text
}

/// Reads a document from disk, one rendered line per file line
pub struct DocumentFileSource {
    path: PathBuf,
}

impl DocumentFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for DocumentFileSource {
    fn get_text(&mut self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => join_lines(contents.lines()),
            Err(e) => {
                tracing::trace!("Document {:?} unreadable: {e}", self.path);
                String::new()
            }
        }
    }
}

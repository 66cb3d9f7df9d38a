pub mod change;
pub mod clipboard;
pub mod document;
pub mod watch;
pub mod ws;

pub use change::ChangeDetector;
pub use clipboard::ClipboardSource;
pub use document::{DocumentFileSource, join_lines};
pub use watch::watch_source;

/// Anything that can hand over the current plain text of a document
pub trait TextSource: Send {
    /// Current text, empty when nothing can be read
    fn get_text(&mut self) -> String;
}

impl<F> TextSource for F
where
    F: FnMut() -> String + Send,
{
    fn get_text(&mut self) -> String {
        self()
    }
}

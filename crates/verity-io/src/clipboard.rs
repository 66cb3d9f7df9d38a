use arboard::Clipboard;

use crate::TextSource;

pub struct ClipboardSource {
    clipboard: Clipboard,
}

impl ClipboardSource {
    pub fn new() -> Result<Self, anyhow::Error> {
        Ok(Self {
            clipboard: Clipboard::new()?,
        })
    }
}

impl TextSource for ClipboardSource {
    fn get_text(&mut self) -> String {
        self.clipboard
            .get_text()
            .map(|text| crate::join_lines(text.lines()))
            .unwrap_or_default()
    }
}

/// Equality de-duplication over successive document snapshots
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_seen: String,
    min_len: usize,
}

impl ChangeDetector {
    pub fn new(min_len: usize) -> Self {
        Self {
            last_seen: String::new(),
            min_len,
        }
    }

    /// Returns the text when it is long enough and differs from the last emitted one
    pub fn observe(&mut self, text: String) -> Option<String> {
        if text.chars().count() <= self.min_len || text == self.last_seen {
            return None;
        }

        self.last_seen.clone_from(&text);
        Some(text)
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }
}

//! The display buffer: what the revealer has shown so far.

use super::script::{LineCategory, RevealEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// A line present from the moment of activation.
    Seed(String),
    /// A line appended by a timer.
    Revealed {
        text: String,
        category: LineCategory,
    },
}

impl DisplayLine {
    pub fn text(&self) -> &str {
        match self {
            DisplayLine::Seed(text) | DisplayLine::Revealed { text, .. } => text,
        }
    }

    /// Category of a revealed line; seed lines have none.
    pub fn category(&self) -> Option<LineCategory> {
        match self {
            DisplayLine::Seed(_) => None,
            DisplayLine::Revealed { category, .. } => Some(*category),
        }
    }
}

/// Append-only list of display lines. Only `Revealer` mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    lines: Vec<DisplayLine>,
    revealed: usize,
}

impl DisplayBuffer {
    pub fn seeded(seed: &[String]) -> Self {
        Self {
            lines: seed.iter().cloned().map(DisplayLine::Seed).collect(),
            revealed: 0,
        }
    }

    pub(crate) fn push_revealed(&mut self, entry: &RevealEntry) {
        self.lines.push(DisplayLine::Revealed {
            text: entry.text.clone(),
            category: entry.category,
        });
        self.revealed += 1;
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines appended since activation (seed lines excluded).
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Plain text of every line, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(DisplayLine::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_buffer() {
        let buffer = DisplayBuffer::seeded(&["seed".to_string()]);
        assert_eq!(buffer.texts(), vec!["seed"]);
        assert_eq!(buffer.revealed_count(), 0);
        assert_eq!(buffer.lines()[0].category(), None);
    }

    #[test]
    fn test_push_revealed_keeps_category() {
        let mut buffer = DisplayBuffer::default();
        buffer.push_revealed(&RevealEntry::new(
            "ok",
            std::time::Duration::ZERO,
            LineCategory::Success,
        ));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.revealed_count(), 1);
        assert_eq!(buffer.lines()[0].category(), Some(LineCategory::Success));
    }
}

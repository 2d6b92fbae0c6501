//! Reveal scripts: the fixed list of lines a revealer plays back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a revealed line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCategory {
    #[default]
    Plain,
    Error,
    Success,
    Command,
}

/// One scheduled line: shown `delay` after activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealEntry {
    pub text: String,
    pub delay: Duration,
    pub category: LineCategory,
}

impl RevealEntry {
    pub fn new(text: impl Into<String>, delay: Duration, category: LineCategory) -> Self {
        Self {
            text: text.into(),
            delay,
            category,
        }
    }

    pub fn plain(text: impl Into<String>, delay_ms: u64) -> Self {
        Self::new(text, Duration::from_millis(delay_ms), LineCategory::Plain)
    }
}

/// Seed lines plus the ordered entries revealed after activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealScript {
    seed: Vec<String>,
    entries: Vec<RevealEntry>,
}

impl RevealScript {
    pub fn new(seed: Vec<String>, entries: Vec<RevealEntry>) -> Self {
        Self { seed, entries }
    }

    pub fn seed(&self) -> &[String] {
        &self.seed
    }

    pub fn entries(&self) -> &[RevealEntry] {
        &self.entries
    }

    /// Offset of the last reveal (zero for an empty script).
    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .map(|entry| entry.delay)
            .max()
            .unwrap_or_default()
    }

    /// The terminal session played next to the hero section.
    pub fn terminal_session() -> Self {
        use LineCategory::{Command, Error, Plain, Success};

        let entries = [
            ("splunk-forwarder    x12 nodes", 500, Plain),
            ("fluentd-k8s         x8 pods", 700, Plain),
            ("vector-edge         x23 hosts", 900, Plain),
            ("custom-etl.py       x6 crons", 1100, Plain),
            ("filebeat            x15 hosts", 1300, Plain),
            ("logstash            x9 containers", 1500, Plain),
            ("", 1700, Plain),
            ("# Total: 115 agents, 4 teams maintaining", 1900, Error),
            ("", 2300, Plain),
            ("# Replace with Expanso Edge:", 2600, Plain),
            (
                "$ curl -fsSL https://get.expanso.io/edge/install.sh | bash",
                3000,
                Command,
            ),
            ("Installing expanso-edge v1.2.0...", 3400, Plain),
            ("expanso-edge installed", 3800, Success),
            ("$ expanso-edge bootstrap --token $TOKEN", 4200, Command),
            ("Node registered. Ready for pipelines.", 4600, Success),
        ]
        .into_iter()
        .map(|(text, ms, category)| RevealEntry::new(text, Duration::from_millis(ms), category))
        .collect();

        Self::new(
            vec![
                "# Current data agents on this host:".to_string(),
                String::new(),
            ],
            entries,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_session_shape() {
        let script = RevealScript::terminal_session();
        assert_eq!(script.seed().len(), 2);
        assert_eq!(script.entries().len(), 15);
        assert_eq!(script.total_duration(), Duration::from_millis(4600));
        assert!(
            script
                .entries()
                .windows(2)
                .all(|pair| pair[0].delay < pair[1].delay)
        );
    }

    #[test]
    fn test_empty_script_duration() {
        assert_eq!(RevealScript::default().total_duration(), Duration::ZERO);
    }
}

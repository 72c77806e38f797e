//! Scenario decks: an entry list plus its delays, stored as TOML or JSON.
//!
//! ```toml
//! step_delay_ms = 2000
//! wrap_delay_ms = 5000
//!
//! [[scenario]]
//! label = "16:00:00"
//! command = [{ text = "helm " }, { tone = "primary", text = "install" }]
//! message = "Installation Succeeded."
//! ```
//!
//! Delays are kept as raw signed integers so a bad value is reported as
//! [`RevealError::InvalidConfiguration`] rather than a parse error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{Result, RevealError};
use crate::revealer::Revealer;
use crate::sequence::SequenceRevealer;
use crate::timing::{DEFAULT_STEP_DELAY, DEFAULT_WRAP_DELAY, Timing};

const WHY_DECK: &str = include_str!("../decks/why.toml");
const HOW_DECK: &str = include_str!("../decks/how.toml");

/// Names accepted by [`Deck::builtin`].
pub const BUILTIN_DECKS: &[&str] = &["why", "how"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_step_ms")]
    pub step_delay_ms: i64,
    #[serde(default = "default_wrap_ms")]
    pub wrap_delay_ms: i64,
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Entry>,
}

fn default_step_ms() -> i64 {
    DEFAULT_STEP_DELAY.as_millis() as i64
}

fn default_wrap_ms() -> i64 {
    DEFAULT_WRAP_DELAY.as_millis() as i64
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            title: None,
            step_delay_ms: default_step_ms(),
            wrap_delay_ms: default_wrap_ms(),
            scenarios: Vec::new(),
        }
    }
}

impl Deck {
    /// Load a deck file; the format follows the extension (`.toml` / `.json`).
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| RevealError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match extension.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(RevealError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// One of the decks shipped with the landing page (see [`BUILTIN_DECKS`]).
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "why" => Self::from_toml_str(WHY_DECK),
            "how" => Self::from_toml_str(HOW_DECK),
            other => Err(RevealError::UnknownDeck(other.to_string())),
        }
    }

    pub fn timing(&self) -> Result<Timing> {
        Timing::from_millis(self.step_delay_ms, self.wrap_delay_ms)
    }

    /// `EmptySequence` when there is nothing to reveal.
    pub fn ensure_playable(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(RevealError::EmptySequence);
        }
        Ok(())
    }

    /// Idle state machine over this deck's entries.
    pub fn revealer(&self) -> Result<Revealer> {
        Ok(Revealer::new(self.scenarios.clone(), self.timing()?))
    }

    /// Validated, ready-to-start sequence over this deck's entries.
    pub fn sequence(&self) -> Result<SequenceRevealer> {
        SequenceRevealer::from_millis(self.scenarios.clone(), self.step_delay_ms, self.wrap_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Tone;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn builtin_why_deck() {
        let deck = Deck::builtin("why").expect("why deck parses");
        assert_eq!(deck.scenarios.len(), 4);
        assert_eq!(deck.step_delay_ms, 2000);
        assert_eq!(deck.wrap_delay_ms, 5000);
        assert_eq!(deck.scenarios[0].label.as_deref(), Some("16:00:00"));
        assert_eq!(deck.scenarios[0].prompt(), "16:00:00 > helm install");
        assert_eq!(deck.scenarios[3].message.segments()[0].tone, Tone::Accent);
    }

    #[test]
    fn builtin_how_deck() {
        let deck = Deck::builtin("how").expect("how deck parses");
        assert_eq!(deck.scenarios.len(), 3);
        assert_eq!(deck.step_delay_ms, 4000);
        assert!(deck.scenarios.iter().all(|s| s.label.is_none()));
        let diff = deck.scenarios[2].message.to_plain_text();
        assert!(diff.starts_with("[INFO] Checking drift for ConfigMap..."));
        assert!(diff.contains("+ \"base.url\": \"http://anpan.xyz\""));
    }

    #[test]
    fn unknown_builtin() {
        assert!(matches!(
            Deck::builtin("pricing"),
            Err(RevealError::UnknownDeck(name)) if name == "pricing"
        ));
    }

    #[test]
    fn delays_default_when_missing() {
        let deck = Deck::from_toml_str(
            r#"
[[scenario]]
command = "ls"
message = "ok"
"#,
        )
        .unwrap();
        assert_eq!(deck.timing().unwrap().step(), Duration::from_millis(2000));
        assert_eq!(deck.timing().unwrap().wrap(), Duration::from_millis(5000));
    }

    #[test]
    fn negative_delay_is_a_configuration_error() {
        let deck = Deck::from_toml_str("step_delay_ms = -1\n").unwrap();
        assert!(matches!(
            deck.timing(),
            Err(RevealError::InvalidConfiguration {
                field: "step_delay_ms",
                value: -1
            })
        ));
        assert!(deck.sequence().is_err());
    }

    #[test]
    fn empty_deck_is_not_playable() {
        let deck = Deck::default();
        assert!(matches!(deck.ensure_playable(), Err(RevealError::EmptySequence)));
        assert!(Deck::builtin("how").unwrap().ensure_playable().is_ok());
    }

    #[test]
    fn load_json_and_toml_files() {
        let temp = TempDir::new().expect("temp dir");

        let json_path = temp.path().join("deck.json");
        let mut file = std::fs::File::create(&json_path).expect("create json");
        writeln!(
            file,
            r#"{{"step_delay_ms": 1000, "wrap_delay_ms": 3000, "scenario": [{{"command": "a", "message": "b"}}]}}"#
        )
        .expect("write json");
        let deck = Deck::load(&json_path).expect("load json");
        assert_eq!(deck.scenarios.len(), 1);
        assert_eq!(deck.step_delay_ms, 1000);

        let toml_path = temp.path().join("deck.TOML");
        std::fs::write(&toml_path, "wrap_delay_ms = 7000\n").expect("write toml");
        let deck = Deck::load(&toml_path).expect("load toml");
        assert_eq!(deck.wrap_delay_ms, 7000);
        assert!(deck.scenarios.is_empty());
    }

    #[test]
    fn load_rejects_unknown_extension_and_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let yaml = temp.path().join("deck.yaml");
        std::fs::write(&yaml, "scenario: []").expect("write yaml");
        assert!(matches!(Deck::load(&yaml), Err(RevealError::UnsupportedFormat(ext)) if ext == "yaml"));

        let missing = temp.path().join("missing.toml");
        assert!(matches!(Deck::load(&missing), Err(RevealError::Io { .. })));
    }
}

//! Scenario entries and the rich text they carry.
//!
//! An [`Entry`] is one line of a scenario: an optional label (a timestamp or a
//! prompt prefix), the command that was "typed", and the message describing
//! what happened. The revealer never looks inside `command` or `message`; the
//! default content type [`Markup`] is what decks and the landing page use.

use serde::{Deserialize, Serialize};

/// Highlight style of a [`Segment`].
///
/// Mirrors the landing page palette: primary (brand accent), secondary,
/// accent (warnings, manual actions) and dull (log output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Primary,
    Secondary,
    Accent,
    Dull,
}

/// A run of text sharing one [`Tone`]. `\n` inside `text` is a line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default, skip_serializing_if = "is_plain")]
    pub tone: Tone,
    pub text: String,
}

fn is_plain(tone: &Tone) -> bool {
    *tone == Tone::Plain
}

impl Segment {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }
}

/// Ordered list of styled segments.
///
/// Deserializes from either a bare string (one plain segment) or a list of
/// segments, so deck files can stay terse for unstyled text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MarkupRepr", into = "Vec<Segment>")]
pub struct Markup {
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkupRepr {
    Text(String),
    Segments(Vec<Segment>),
}

impl From<MarkupRepr> for Markup {
    fn from(repr: MarkupRepr) -> Self {
        match repr {
            MarkupRepr::Text(text) => Markup::plain(text),
            MarkupRepr::Segments(segments) => Markup { segments },
        }
    }
}

impl From<Markup> for Vec<Segment> {
    fn from(markup: Markup) -> Self {
        markup.segments
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Markup::plain(text)
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Markup::plain(text)
    }
}

impl From<Vec<Segment>> for Markup {
    fn from(segments: Vec<Segment>) -> Self {
        Markup { segments }
    }
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(Tone::Plain, text)
    }

    /// Append a segment (builder style).
    ///
    /// ```rust
    /// use scenariobox::{Markup, Tone};
    ///
    /// let cmd = Markup::new().with(Tone::Plain, "pip install ").with(Tone::Primary, "helm-inspect");
    /// assert_eq!(cmd.to_plain_text(), "pip install helm-inspect");
    /// ```
    pub fn with(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.segments.push(Segment::new(tone, text));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    /// Concatenated text with styling dropped.
    pub fn to_plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One item of a revealed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T = Markup> {
    /// Short prefix such as `16:00:00`; rendered before the prompt marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub command: T,
    pub message: T,
}

impl Entry {
    pub fn new(command: impl Into<Markup>, message: impl Into<Markup>) -> Self {
        Self {
            label: None,
            command: command.into(),
            message: message.into(),
        }
    }

    /// Prompt line as plain text: `16:00:00 > helm install` or `> helm install`.
    pub fn prompt(&self) -> String {
        let command = self.command.to_plain_text();
        match &self.label {
            Some(label) => format!("{label} > {command}"),
            None => format!("> {command}"),
        }
    }
}

impl<T> Entry<T> {
    /// Build an entry around arbitrary renderable content.
    pub fn of(command: T, message: T) -> Self {
        Self {
            label: None,
            command,
            message,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_with_and_without_label() {
        let plain = Entry::new("helm install", "ok");
        assert_eq!(plain.prompt(), "> helm install");

        let timed = Entry::new("helm install", "ok").with_label("16:00:00");
        assert_eq!(timed.prompt(), "16:00:00 > helm install");
    }

    #[test]
    fn markup_accepts_bare_string() {
        let entry: Entry = serde_json::from_str(r#"{"command": "ls", "message": "done"}"#).unwrap();
        assert_eq!(entry.command, Markup::plain("ls"));
        assert_eq!(entry.label, None);
    }

    #[test]
    fn markup_accepts_segment_list() {
        let json = r#"{
            "label": "16:40:00",
            "command": [{"text": "kubectl "}, {"tone": "primary", "text": "edit"}],
            "message": [{"tone": "dull", "text": "patched"}]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.command.segments().len(), 2);
        assert_eq!(entry.command.segments()[1].tone, Tone::Primary);
        assert_eq!(entry.command.to_plain_text(), "kubectl edit");
        assert_eq!(entry.message.segments()[0].tone, Tone::Dull);
    }

    #[test]
    fn plain_tone_is_omitted_when_serialized() {
        let markup = Markup::new().with(Tone::Plain, "a").with(Tone::Accent, "b");
        let json = serde_json::to_string(&markup).unwrap();
        assert_eq!(json, r#"[{"text":"a"},{"tone":"accent","text":"b"}]"#);
    }

    #[test]
    fn empty_markup() {
        assert!(Markup::new().is_empty());
        assert!(Markup::plain("").is_empty());
        assert!(!Markup::plain("x").is_empty());
    }

    #[test]
    fn generic_entries_carry_any_content() {
        let entry = Entry::of(1u8, 2u8).with_label("t");
        assert_eq!(entry.command, 1);
        assert_eq!(entry.label.as_deref(), Some("t"));
    }
}

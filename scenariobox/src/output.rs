//! Terminal rendering for the preview CLI.
//!
//! Maps [`Tone`] onto `console` styles and prints entries the way the landing
//! page shows them: prompt line first, message underneath.

use std::time::Duration;

use console::{Style, Term, style};

use crate::entry::{Entry, Markup, Tone};
use crate::revealer::RevealKind;
use crate::timeline::Frame;

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::new(),
        Tone::Primary => Style::new().cyan().bold(),
        Tone::Secondary => Style::new().magenta(),
        Tone::Accent => Style::new().yellow().bold(),
        Tone::Dull => Style::new().dim(),
    }
}

/// Markup with ANSI styling applied per segment.
pub fn styled(markup: &Markup) -> String {
    styled_lines(markup).join("\n")
}

/// Styled markup split on line breaks; every line carries its own escapes.
fn styled_lines(markup: &Markup) -> Vec<String> {
    let mut lines = vec![String::new()];
    for segment in markup.segments() {
        let look = tone_style(segment.tone);
        for (i, piece) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            if !piece.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push_str(&look.apply_to(piece).to_string());
                }
            }
        }
    }
    lines
}

/// Prompt line plus indented message, ready to print.
pub fn render_entry(entry: &Entry) -> String {
    let marker = style(">").green().bold();
    let prompt = match &entry.label {
        Some(label) => format!("{} {marker} {}", style(label).dim(), styled(&entry.command)),
        None => format!("{marker} {}", styled(&entry.command)),
    };
    let message: Vec<String> = styled_lines(&entry.message)
        .into_iter()
        .map(|line| format!("  {line}"))
        .collect();
    format!("{prompt}\n{}", message.join("\n"))
}

/// Separator printed when a pass wraps back to the first entry.
pub fn wrap_rule(cycle: u64) -> String {
    style(format!("── loop {cycle} ──")).dim().to_string()
}

/// Start a new pass: clear the terminal (when stdout is one) and print the
/// loop rule, so only the current pass stays on screen.
pub fn begin_pass(cycle: u64) {
    let term = Term::stdout();
    if term.is_term() {
        let _ = term.clear_screen();
    } else {
        println!();
    }
    println!("{}\n", wrap_rule(cycle));
}

/// One timeline row: `      5s  #0   wrap   1/3`.
pub fn render_frame(frame: &Frame, len: usize) -> String {
    let kind = match frame.kind {
        RevealKind::Start => style("start").green(),
        RevealKind::Step => style("step ").cyan(),
        RevealKind::Wrap => style("wrap ").yellow(),
    };
    format!(
        "{:>8}  #{:<3} {}  {}/{}",
        format_duration(Duration::from_millis(frame.at_ms)),
        frame.index,
        kind,
        frame.revealed,
        len
    )
}

/// Print an info message (blue)
pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}

/// Format duration in human-readable form
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}

//! `scenariobox` command line: preview decks in the terminal.
//!
//! ```bash
//! scenariobox play why                 # built-in deck, real time, Ctrl+C to stop
//! scenariobox play decks/how.toml --cycles 2
//! scenariobox timeline how --json      # deterministic schedule, no waiting
//! scenariobox builtin
//! ```

use std::ops::ControlFlow;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::deck::{BUILTIN_DECKS, Deck};
use crate::error::RevealError;
use crate::output;
use crate::playback::play;
use crate::revealer::RevealKind;
use crate::timeline::timeline;

#[derive(Parser, Debug)]
#[command(name = "scenariobox")]
#[command(about = "Preview timed scenario decks for the HelmInspect landing page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a deck in real time
    Play(PlayArgs),
    /// Print the reveal schedule of a deck without waiting for it
    Timeline(TimelineArgs),
    /// List the built-in decks
    Builtin,
}

#[derive(Args, Debug)]
pub struct DeckArgs {
    /// Deck file (.toml / .json) or built-in deck name
    #[arg(default_value = "why")]
    pub deck: String,

    /// Override the delay between two reveals
    #[arg(long, allow_negative_numbers = true)]
    pub step_ms: Option<i64>,

    /// Override the pause before the cycle restarts
    #[arg(long, allow_negative_numbers = true)]
    pub wrap_ms: Option<i64>,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Stop after this many full cycles (default: run until Ctrl+C)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,
}

#[derive(Args, Debug)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// How far to project, in milliseconds (default: two full cycles)
    #[arg(long)]
    pub horizon_ms: Option<u64>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl DeckArgs {
    /// Resolve the deck (file first, then built-in name) and apply overrides.
    pub fn resolve(&self) -> Result<Deck> {
        let path = Path::new(&self.deck);
        let mut deck = if path.is_file() {
            Deck::load(path).with_context(|| format!("Failed to load deck {}", path.display()))?
        } else {
            Deck::builtin(&self.deck).with_context(|| {
                format!(
                    "'{}' is neither a deck file nor a built-in deck ({})",
                    self.deck,
                    BUILTIN_DECKS.join(", ")
                )
            })?
        };
        if let Some(step) = self.step_ms {
            deck.step_delay_ms = step;
        }
        if let Some(wrap) = self.wrap_ms {
            deck.wrap_delay_ms = wrap;
        }
        Ok(deck)
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Timeline(args) => run_timeline(args),
        Command::Builtin => run_builtin(),
    }
}

async fn run_play(args: PlayArgs) -> Result<()> {
    let deck = args.deck.resolve()?;
    let mut revealer = deck.revealer().context("Invalid deck timing")?;
    if let Err(RevealError::EmptySequence) = deck.ensure_playable() {
        output::warning("Deck has no scenarios, nothing to play.");
        return Ok(());
    }

    let timing = revealer.timing();
    info!(
        entries = revealer.len(),
        step = ?timing.step(),
        wrap = ?timing.wrap(),
        "playing deck {}",
        args.deck.deck
    );
    if let Some(title) = &deck.title {
        output::info(title);
    }

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("ctrl-c received");
            let _ = stop_tx.send(true);
        }
    });

    let cycles = args.cycles;
    let mut completed = 0u64;
    let summary = play(&mut revealer, stop_rx, |revealer, event| {
        if event.kind == RevealKind::Wrap {
            completed += 1;
            if cycles.is_some_and(|limit| completed >= limit) {
                return ControlFlow::Break(());
            }
            output::begin_pass(completed);
        }
        if let Some(entry) = revealer.entries().get(event.index) {
            println!("{}", output::render_entry(entry));
        }
        ControlFlow::Continue(())
    })
    .await;

    debug!(events = summary.events, wraps = summary.wraps, "play finished");
    Ok(())
}

fn run_timeline(args: TimelineArgs) -> Result<()> {
    let deck = args.deck.resolve()?;
    let timing = deck.timing().context("Invalid deck timing")?;
    let len = deck.scenarios.len();
    let horizon = args
        .horizon_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| timing.period(len).saturating_mul(2));

    let frames = timeline(len, timing, horizon);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }

    if frames.is_empty() {
        output::warning("Deck has no scenarios, the timeline is empty.");
        return Ok(());
    }
    output::info(&format!(
        "{len} entries, step {}, wrap {}, period {}",
        output::format_duration(timing.step()),
        output::format_duration(timing.wrap()),
        output::format_duration(timing.period(len)),
    ));
    for frame in &frames {
        println!("{}", output::render_frame(frame, len));
    }
    Ok(())
}

fn run_builtin() -> Result<()> {
    for name in BUILTIN_DECKS {
        let deck = Deck::builtin(name)?;
        println!(
            "{:<5} {} ({} entries, step {}ms, wrap {}ms)",
            name,
            deck.title.as_deref().unwrap_or(""),
            deck.scenarios.len(),
            deck.step_delay_ms,
            deck.wrap_delay_ms
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_with_overrides() {
        let cli = Cli::try_parse_from([
            "scenariobox",
            "play",
            "how",
            "--step-ms",
            "1500",
            "--cycles",
            "2",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.deck.deck, "how");
        assert_eq!(args.deck.step_ms, Some(1500));
        assert_eq!(args.cycles, Some(2));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn zero_cycles_is_rejected() {
        let err = Cli::try_parse_from(["scenariobox", "play", "--cycles", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Cli::try_parse_from(["scenariobox", "play", "--cycles", "1"]).is_ok());
    }

    #[test]
    fn deck_defaults_to_why() {
        let cli = Cli::try_parse_from(["scenariobox", "timeline", "--json"]).unwrap();
        let Command::Timeline(args) = cli.command else {
            panic!("expected timeline");
        };
        assert_eq!(args.deck.deck, "why");
        assert!(args.json);
        let deck = args.deck.resolve().unwrap();
        assert_eq!(deck.scenarios.len(), 4);
    }

    #[test]
    fn overrides_are_applied_then_validated() {
        let args = DeckArgs {
            deck: "how".into(),
            step_ms: Some(-10),
            wrap_ms: None,
        };
        let deck = args.resolve().unwrap();
        assert_eq!(deck.step_delay_ms, -10);
        assert!(deck.timing().is_err());
    }

    #[test]
    fn unknown_deck_is_reported() {
        let args = DeckArgs {
            deck: "no-such-deck".into(),
            step_ms: None,
            wrap_ms: None,
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("no-such-deck"));
    }
}

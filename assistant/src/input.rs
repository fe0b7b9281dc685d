//! Pick sources: the human/opponent collaborator boundary.
//!
//! The orchestrator asks a [`PickSource`] "who was picked" and gets back a
//! player name. Validation happens in the session; a source only has to keep
//! producing names until one is accepted.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use draft_core::{DraftError, Player};

/// Context handed to a source when prompting for a pick.
#[derive(Debug)]
pub struct TurnPrompt<'a> {
    /// 1-based overall pick number.
    pub pick_number: u32,
    /// 1-based round.
    pub round: u32,
    /// Whether this is the assisted seat's pick.
    pub our_turn: bool,
    /// Recommended pick on our turns, when one was produced.
    pub recommendation: Option<&'a Player>,
}

/// Supplier of pick names for both our turns and opponent turns.
pub trait PickSource {
    /// Produce the next candidate name for this turn.
    fn next_pick(&mut self, prompt: &TurnPrompt<'_>) -> Result<String>;

    /// Called when a candidate was rejected; the source will be prompted
    /// again for the same turn.
    fn rejected(&mut self, name: &str, error: &DraftError);
}

/// Interactive source reading names from stdin.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl PickSource for StdinSource {
    fn next_pick(&mut self, prompt: &TurnPrompt<'_>) -> Result<String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if prompt.our_turn {
            writeln!(out, "\nRound {}, pick {}: our turn.", prompt.round, prompt.pick_number)?;
            if let Some(player) = prompt.recommendation {
                writeln!(
                    out,
                    "Recommendation: {} ({}, {}, rank {}, {:.1} proj pts)",
                    player.name, player.team, player.position, player.rank, player.projected_points
                )?;
            }
            write!(out, "Select a player to draft: ")?;
        } else {
            writeln!(out, "\nRound {}, pick {}.", prompt.round, prompt.pick_number)?;
            write!(out, "What did your opponent draft? ")?;
        }
        out.flush()?;

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("failed to read pick from stdin")?;
            if read == 0 {
                return Err(anyhow!("stdin closed before the draft finished"));
            }
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }

    fn rejected(&mut self, _name: &str, error: &DraftError) {
        println!("{error}. Please select again.");
    }
}

/// Non-interactive source replaying a fixed list of names.
///
/// Backs the `--script` replay mode and the session tests. A rejected name is
/// simply dropped; the next scripted name is offered for the same turn.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    picks: VecDeque<String>,
    rejections: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(picks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            picks: picks.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
        }
    }

    /// Load one name per non-empty line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read script {}", path.as_ref().display()))?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        ))
    }

    /// Names that were rejected so far, in order.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }
}

impl PickSource for ScriptedSource {
    fn next_pick(&mut self, prompt: &TurnPrompt<'_>) -> Result<String> {
        self.picks.pop_front().ok_or_else(|| {
            anyhow!(
                "script ran out of picks at round {}, pick {}",
                prompt.round,
                prompt.pick_number
            )
        })
    }

    fn rejected(&mut self, name: &str, _error: &DraftError) {
        self.rejections.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> TurnPrompt<'static> {
        TurnPrompt {
            pick_number: 1,
            round: 1,
            our_turn: false,
            recommendation: None,
        }
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new(["Allen", "Barkley"]);
        assert_eq!(source.next_pick(&prompt()).unwrap(), "Allen");
        assert_eq!(source.next_pick(&prompt()).unwrap(), "Barkley");
    }

    #[test]
    fn scripted_source_errors_when_exhausted() {
        let mut source = ScriptedSource::new(Vec::<String>::new());
        let err = source.next_pick(&prompt()).unwrap_err();
        assert!(err.to_string().contains("ran out of picks"));
    }

    #[test]
    fn scripted_source_records_rejections() {
        let mut source = ScriptedSource::new(["Allen"]);
        source.rejected("Nobody", &DraftError::PlayerNotFound("Nobody".into()));
        assert_eq!(source.rejections(), ["Nobody"]);
    }
}

//! Tilt session: the API the front end drives.
//!
//! `TiltSession` owns the score, the phrase selector and the RNG. Each
//! recorded game updates the score first and then picks a phrase, both
//! drawing from the same random stream in call order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::band::MoodBand;
use crate::config::{DEFAULT_PLAYER_NAME, TiltConfig};
use crate::error::{TiltError, TiltResult};
use crate::outcome::Outcome;
use crate::phrase::PhraseSelector;
use crate::score::TiltScore;

/// Score and band after an event, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TiltSnapshot {
    /// Current tilt score.
    pub score: i32,
    /// Band the score falls in.
    pub band: &'static MoodBand,
    /// Whether the band calls for emphasis.
    pub extreme: bool,
    /// Fraction of the scale filled, 0.0 to 1.0.
    pub progress: f64,
}

impl TiltSnapshot {
    /// Capture the state of a score.
    pub fn of(score: &TiltScore) -> Self {
        let band = score.band();
        Self {
            score: score.value(),
            band,
            extreme: band.is_extreme(),
            progress: score.progress(),
        }
    }
}

impl std::fmt::Display for TiltSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tilt {} | {}", self.score, self.band)
    }
}

/// A line command understood by [`TiltSession::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Record a game result.
    Record(Outcome),
    /// Show the current score and band.
    Status,
    /// Forget recently shown phrases.
    ResetHistory,
    /// List commands.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parse a line of input. Blank input yields `None`.
    pub fn parse(input: &str) -> TiltResult<Option<Self>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if let Some(outcome) = Outcome::parse(trimmed) {
            return Ok(Some(Self::Record(outcome)));
        }
        match trimmed.to_lowercase().as_str() {
            "status" | "s" => Ok(Some(Self::Status)),
            "reset-history" | "reset" => Ok(Some(Self::ResetHistory)),
            "help" | "h" | "?" => Ok(Some(Self::Help)),
            "quit" | "q" | "exit" => Ok(Some(Self::Quit)),
            _ => Err(TiltError::UnknownCommand(trimmed.to_string())),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A game was recorded.
    Event {
        /// The recorded outcome.
        outcome: Outcome,
        /// State after the update.
        snapshot: TiltSnapshot,
        /// Phrase picked for the outcome.
        message: String,
    },
    /// Current state, nothing changed.
    Status(TiltSnapshot),
    /// Phrase histories were cleared.
    HistoryCleared,
    /// Command reference.
    Help,
    /// The session should end.
    Quit,
}

const HELP_TEXT: &str = "\
Commands:
  win, w            Record a win (tilt drops by 1-5)
  lose, l           Record a loss (tilt rises by 2-10)
  status, s         Show the current tilt
  reset-history     Allow recently shown phrases again
  help              Show this help
  quit, q           Leave";

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event {
                snapshot, message, ..
            } => write!(f, "{snapshot}\n{message}"),
            Self::Status(snapshot) => write!(f, "{snapshot}"),
            Self::HistoryCleared => write!(f, "Phrase history cleared."),
            Self::Help => write!(f, "{HELP_TEXT}"),
            Self::Quit => write!(f, "Goodbye!"),
        }
    }
}

/// A single player's tilt tracking session.
pub struct TiltSession {
    score: TiltScore,
    phrases: PhraseSelector,
    player_name: String,
    load_warnings: Vec<TiltError>,
    rng: StdRng,
}

impl TiltSession {
    /// Start a session, loading phrases from the configured sources.
    ///
    /// Unreadable file sources do not fail the session; the built-in phrases are
    /// used and the errors are kept in [`TiltSession::load_warnings`].
    pub fn initialize(config: TiltConfig) -> Self {
        let (phrases, warnings) = PhraseSelector::load(
            &config.win_source,
            &config.lose_source,
            config.history_capacity,
        );
        let mut session = Self::with_phrases(config, phrases);
        session.load_warnings = warnings;
        session
    }

    /// Start a session with an already built phrase selector.
    pub fn with_phrases(config: TiltConfig, phrases: PhraseSelector) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let player_name = match config.player_name.trim() {
            "" => DEFAULT_PLAYER_NAME.to_string(),
            name => name.to_string(),
        };

        Self {
            score: TiltScore::new(config.start_score),
            phrases,
            player_name,
            load_warnings: Vec::new(),
            rng,
        }
    }

    /// Get the score.
    pub fn score(&self) -> &TiltScore {
        &self.score
    }

    /// Get the current band.
    pub fn band(&self) -> &'static MoodBand {
        self.score.band()
    }

    /// Current score and band.
    pub fn snapshot(&self) -> TiltSnapshot {
        TiltSnapshot::of(&self.score)
    }

    /// Get the player name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Get the phrase selector.
    pub fn phrases(&self) -> &PhraseSelector {
        &self.phrases
    }

    /// Phrase sources that failed to load.
    pub fn load_warnings(&self) -> &[TiltError] {
        &self.load_warnings
    }

    /// Record a win and return the new state.
    pub fn record_win(&mut self) -> TiltSnapshot {
        self.record(Outcome::Win)
    }

    /// Record a loss and return the new state.
    pub fn record_lose(&mut self) -> TiltSnapshot {
        self.record(Outcome::Lose)
    }

    /// Apply an outcome to the score and return the new state.
    pub fn record(&mut self, outcome: Outcome) -> TiltSnapshot {
        self.score.apply(outcome, &mut self.rng);
        self.snapshot()
    }

    /// Pick the next phrase for an outcome.
    pub fn current_message(&mut self, outcome: Outcome) -> String {
        self.phrases.next(outcome, &self.player_name, &mut self.rng)
    }

    /// Forget recently shown phrases.
    pub fn clear_history(&mut self) {
        self.phrases.clear_history();
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Record(outcome) => {
                let snapshot = self.record(outcome);
                let message = self.current_message(outcome);
                Response::Event {
                    outcome,
                    snapshot,
                    message,
                }
            }
            Command::Status => Response::Status(self.snapshot()),
            Command::ResetHistory => {
                self.clear_history();
                Response::HistoryCleared
            }
            Command::Help => Response::Help,
            Command::Quit => Response::Quit,
        }
    }

    /// Process a line of user input and return a plain-text response.
    pub fn process(&mut self, input: &str) -> TiltResult<String> {
        match Command::parse(input)? {
            Some(command) => Ok(self.execute(command).to_string()),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::BandKind;
    use crate::phrase::{PhrasePool, PhraseSource};
    use std::path::PathBuf;

    fn session(start: i32) -> TiltSession {
        let config = TiltConfig::default()
            .with_seed(42)
            .with_start_score(start)
            .with_player_name("Alex");
        TiltSession::with_phrases(config, PhraseSelector::default())
    }

    #[test]
    fn initialize_clamps_start_score() {
        let mut config = TiltConfig::default().with_seed(1);
        config.start_score = 500;
        let s = TiltSession::with_phrases(config, PhraseSelector::default());
        assert_eq!(s.score().value(), 200);
    }

    #[test]
    fn blank_name_defaults() {
        let mut config = TiltConfig::default().with_seed(1);
        config.player_name = "  ".to_string();
        let s = TiltSession::with_phrases(config, PhraseSelector::default());
        assert_eq!(s.player_name(), "Player");
    }

    #[test]
    fn record_win_lowers_score() {
        let mut s = session(0);
        let snap = s.record_win();
        assert!((-5..=-1).contains(&snap.score));
        assert_eq!(snap.band.kind, BandKind::Normal);
        assert!(!snap.extreme);
    }

    #[test]
    fn record_lose_raises_score() {
        let mut s = session(0);
        let snap = s.record_lose();
        assert!((2..=10).contains(&snap.score));
        assert_eq!(snap.band.kind, BandKind::LightTilt);
    }

    #[test]
    fn many_losses_reach_apocalypse() {
        let mut s = session(150);
        for _ in 0..30 {
            s.record_lose();
        }
        let snap = s.snapshot();
        assert_eq!(snap.score, 200);
        assert_eq!(snap.band.kind, BandKind::Apocalypse);
        assert!(snap.extreme);
        assert!((snap.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn message_uses_player_name() {
        let config = TiltConfig::default().with_seed(3).with_player_name("Alex");
        let phrases = PhraseSelector::new(
            PhrasePool::new(["Good game, {username}!"]),
            PhrasePool::new(["Chin up"]),
            5,
        );
        let mut s = TiltSession::with_phrases(config, phrases);
        assert_eq!(s.current_message(Outcome::Win), "Good game, Alex!");
        assert_eq!(s.current_message(Outcome::Lose), "Chin up");
    }

    #[test]
    fn same_seed_same_session() {
        let run = || {
            let mut s = session(0);
            let mut out = Vec::new();
            for i in 0..12 {
                let outcome = if i % 2 == 0 { Outcome::Lose } else { Outcome::Win };
                out.push(s.process(&outcome.to_string()).unwrap());
            }
            out
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn initialize_with_missing_sources_uses_defaults() {
        let config = TiltConfig::default()
            .with_seed(1)
            .with_win_source(PathBuf::from("/nonexistent/win.txt"))
            .with_lose_source(PathBuf::from("/nonexistent/lose.txt"));
        let mut s = TiltSession::initialize(config);
        assert_eq!(s.load_warnings().len(), 2);
        assert_eq!(s.phrases().win_count(), 2);
        assert_eq!(s.phrases().lose_count(), 2);
        let msg = s.current_message(Outcome::Win);
        assert!(msg.contains("Player"));
    }

    #[test]
    fn initialize_with_inline_sources() {
        let config = TiltConfig::default()
            .with_seed(4)
            .with_player_name("Alex")
            .with_win_source(PhraseSource::inline("Nice, {username}\n"))
            .with_lose_source(PhraseSource::inline("Ouch, {username}\n"));
        let mut s = TiltSession::initialize(config);
        assert!(s.load_warnings().is_empty());
        assert_eq!(s.current_message(Outcome::Win), "Nice, Alex");
        assert_eq!(s.current_message(Outcome::Lose), "Ouch, Alex");
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(
            Command::parse("W").unwrap(),
            Some(Command::Record(Outcome::Win))
        );
        assert_eq!(
            Command::parse("lose").unwrap(),
            Some(Command::Record(Outcome::Lose))
        );
        assert_eq!(Command::parse("status").unwrap(), Some(Command::Status));
        assert_eq!(
            Command::parse("reset-history").unwrap(),
            Some(Command::ResetHistory)
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
        assert!(matches!(
            Command::parse("dance"),
            Err(TiltError::UnknownCommand(c)) if c == "dance"
        ));
    }

    #[test]
    fn process_event_output() {
        let mut s = session(0);
        let out = s.process("lose").unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("Tilt "));
        assert!(lines.next().unwrap().contains("Alex"));
    }

    #[test]
    fn process_status_does_not_change_score() {
        let mut s = session(-60);
        assert_eq!(s.process("status").unwrap(), "Tilt -60 | BALANCE ⚖");
        assert_eq!(s.score().value(), -60);
    }

    #[test]
    fn process_reset_history() {
        let mut s = session(0);
        s.process("win").unwrap();
        assert_eq!(s.phrases().history(Outcome::Win).len(), 1);
        assert_eq!(s.process("reset").unwrap(), "Phrase history cleared.");
        assert!(s.phrases().history(Outcome::Win).is_empty());
    }

    #[test]
    fn process_blank_and_unknown() {
        let mut s = session(0);
        assert_eq!(s.process("   ").unwrap(), "");
        assert!(s.process("jump").is_err());
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("reset-history"));
    }

    #[test]
    fn snapshot_serializes() {
        let s = session(120);
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["score"], 120);
        assert_eq!(json["band"]["label"], "RAGE");
        assert_eq!(json["extreme"], true);
    }
}

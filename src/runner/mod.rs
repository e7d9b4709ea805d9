//! Game runner: plays a game to the end between bots and humans
//!
//! The runner owns the turn loop. Each turn it asks the seat of the player to
//! move for an action, applies it through the problem's `transition`, and
//! advances the session's start state, until the game is terminal.

pub mod agent;
pub mod session;
pub mod ui;

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub use agent::{Agent, RandomAgent, SearchAgent};
pub use session::Session;
pub use ui::{GameUi, TerminalUi, TextGame};

use crate::{AdversarialSearchProblem, Error, Evaluation, GameState, Player, Result};

/// Who controls a player
pub enum Seat<P: AdversarialSearchProblem> {
    Bot(Box<dyn Agent<P>>),
    /// Moves are read from the game UI
    Human,
}

impl<P: AdversarialSearchProblem> Seat<P> {
    pub fn bot(agent: impl Agent<P> + 'static) -> Self {
        Seat::Bot(Box::new(agent))
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }

    pub fn name(&self) -> &str {
        match self {
            Seat::Bot(agent) => agent.name(),
            Seat::Human => "human",
        }
    }
}

/// Play the session's game to the end and return its terminal evaluation.
///
/// `seats[i]` controls player `i`. When a bot answers with no action or an
/// action that is not available, the first available action is played
/// instead. With a UI, the position is rendered at the start and after
/// every move.
///
/// # Errors
///
/// Returns [`Error::MissingUi`] if a seat is [`Seat::Human`] and no UI is
/// given, and propagates agent, UI and evaluation errors.
pub fn run_game<P: AdversarialSearchProblem>(
    session: &mut Session<P>,
    seats: &mut [Seat<P>; 2],
    mut ui: Option<&mut dyn GameUi<P>>,
) -> Result<Evaluation> {
    if ui.is_none() && seats.iter().any(Seat::is_human) {
        return Err(Error::MissingUi);
    }

    if let Some(ui) = ui.as_deref_mut() {
        ui.render(session.problem(), session.start_state())?;
    }

    while !session.is_over() {
        let state = session.start_state().clone();
        let player = state.player_to_move();

        let action = match &mut seats[player.index()] {
            Seat::Bot(agent) => {
                let decision = agent.select_action(session.problem(), &state)?;
                legal_or_fallback(session.problem(), &state, decision, agent.name())?
            }
            Seat::Human => ui
                .as_deref_mut()
                .ok_or(Error::MissingUi)?
                .read_action(session.problem(), &state)?,
        };

        info!("{player} plays {action:?}");
        session.advance(action);

        if let Some(ui) = ui.as_deref_mut() {
            ui.render(session.problem(), session.start_state())?;
        }
    }

    let outcome = session.outcome()?;
    info!(
        "game over after {} moves: P1 score {}, P2 score {}",
        session.history().len(),
        outcome.value(Player::One),
        outcome.value(Player::Two)
    );
    Ok(outcome)
}

fn legal_or_fallback<P: AdversarialSearchProblem>(
    problem: &P,
    state: &P::State,
    decision: Option<P::Action>,
    agent: &str,
) -> Result<P::Action> {
    let mut available = problem.available_actions(state);
    match decision {
        Some(action) if available.contains(&action) => Ok(action),
        other => {
            if available.is_empty() {
                return Err(Error::NoActionsAvailable {
                    state: format!("{state:?}"),
                });
            }
            let fallback = available.swap_remove(0);
            warn!("{agent} returned invalid action {other:?}; playing {fallback:?} instead");
            Ok(fallback)
        }
    }
}

/// Win/draw tally over a series of games
///
/// Holds counts only; connect-four scores are infinite and have no JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: u64,
    pub p1_wins: u64,
    pub p2_wins: u64,
    pub draws: u64,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: Evaluation) {
        self.games += 1;
        match outcome.leader() {
            Some(Player::One) => self.p1_wins += 1,
            Some(Player::Two) => self.p2_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Save summary to a JSON file
    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load<Q: AsRef<Path>>(path: Q) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

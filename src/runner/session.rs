//! Per-game session state

use crate::{AdversarialSearchProblem, Evaluation, Result};

/// A game in progress: the problem, the current start state and the actions
/// played so far
///
/// The session owns the start-state slot. Searches read it through
/// [`start_state`](Self::start_state) and never change it; the runner moves
/// it forward with [`advance`](Self::advance) once per decision.
#[derive(Debug, Clone)]
pub struct Session<P: AdversarialSearchProblem> {
    problem: P,
    state: P::State,
    history: Vec<P::Action>,
}

impl<P: AdversarialSearchProblem> Session<P> {
    /// Start a session from the problem's initial state
    pub fn new(problem: P) -> Self {
        let state = problem.initial_state();
        Self::with_state(problem, state)
    }

    /// Start a session from an arbitrary position
    pub fn with_state(problem: P, state: P::State) -> Self {
        Session {
            problem,
            state,
            history: Vec::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn start_state(&self) -> &P::State {
        &self.state
    }

    /// Replace the start state, e.g. to resume from a given position
    pub fn set_start_state(&mut self, state: P::State) {
        self.state = state;
    }

    /// Actions applied through [`advance`](Self::advance), oldest first
    pub fn history(&self) -> &[P::Action] {
        &self.history
    }

    /// Apply `action` to the start state and make the result the new start
    /// state.
    ///
    /// # Panics
    ///
    /// Panics if the game is over or `action` is not available, as
    /// [`AdversarialSearchProblem::transition`] does.
    pub fn advance(&mut self, action: P::Action) -> &P::State {
        self.state = self.problem.transition(&self.state, &action);
        self.history.push(action);
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.problem.is_terminal(&self.state)
    }

    /// Terminal values of the current state
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`](crate::Error::NotTerminal) while the
    /// game is still running.
    pub fn outcome(&self) -> Result<Evaluation> {
        self.problem.evaluate_terminal(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Player,
        games::tictactoe::{Position, TicTacToe},
    };

    #[test]
    fn test_advance_moves_start_state() {
        let mut session = Session::new(TicTacToe::default());
        assert_eq!(session.start_state().to_move, Player::One);

        session.advance(Position::new(1, 1));
        session.advance(Position::new(0, 0));

        assert_eq!(session.history(), &[Position::new(1, 1), Position::new(0, 0)]);
        assert_eq!(session.start_state().to_move, Player::One);
        assert!(!session.is_over());
        assert!(session.outcome().is_err());
    }

    #[test]
    fn test_set_start_state() {
        let game = TicTacToe::default();
        let mut session = Session::new(game.clone());
        let won = crate::games::tictactoe::TicTacToeState::from_string("XXX OO. ...").unwrap();
        session.set_start_state(won);
        assert!(session.is_over());
        assert_eq!(session.outcome().unwrap().leader(), Some(Player::One));
        assert!(session.history().is_empty());
    }
}

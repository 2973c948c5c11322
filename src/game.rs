//! The abstract two-player game interface the search engine runs over.
//!
//! Any alternating-move game with two marks can implement [`Game`]. The
//! search in [`crate::minimax`] and the players in [`crate::player`] only
//! see this trait, never a concrete board.

use std::fmt::Debug;

use crate::board::Mark;
use crate::error::{GameError, Result};

pub trait Game {
    /// An immutable snapshot of the game.
    type State: Clone;

    /// A single move.
    type Move: Copy + PartialEq + Debug;

    /// The fixed starting position.
    fn initial_state(&self) -> Self::State;

    /// The mark of the player who acts next.
    fn to_move(&self, state: &Self::State) -> Mark;

    /// Legal moves in a stable, reproducible order.
    ///
    /// Empty exactly when no move can be made. Search tie-breaking follows
    /// this order, so equal states must always yield the same sequence.
    fn actions(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply `mv` and return the successor state.
    ///
    /// A move that is not in `actions(state)` has no effect: the returned
    /// state equals the input. Use [`Game::try_result`] to have that reported.
    fn result(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// Like [`Game::result`], but an illegal move is an error.
    fn try_result(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State> {
        if self.actions(state).contains(&mv) {
            Ok(self.result(state, mv))
        } else {
            Err(GameError::IllegalMove(format!("{mv:?}")))
        }
    }

    /// The value of `state` for `player`: +1 win, -1 loss, 0 otherwise.
    fn utility(&self, state: &Self::State, player: Mark) -> i32;

    /// True once the game is decided or no moves remain.
    fn terminal_test(&self, state: &Self::State) -> bool;

    /// Render `state` for a human.
    fn display(&self, state: &Self::State) -> String;
}

//! The player interface shared by human, search, and random players.

use crate::error::Result;
use crate::game::Game;

/// Something that picks a move for whoever is to act in `state`.
///
/// The match loop in [`crate::arena`] only talks to players through this
/// trait, so any mix of human, search, and random players can sit at the
/// table.
pub trait Player<G: Game> {
    /// Short name used in logs and announcements.
    fn name(&self) -> &str;

    /// Choose a move for `game.to_move(state)`.
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move>;
}

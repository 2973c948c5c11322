//! Uniform-random baseline player.
//!
//! Each player owns its generator, so a seeded player replays the same game
//! against a deterministic opponent.

use tracing::trace;

use crate::error::{GameError, Result};
use crate::game::Game;
use crate::player::Player;

/// Picks uniformly among the legal moves.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    /// A player seeded from the system entropy source.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A reproducible player.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<G: Game> Player<G> for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    /// # Errors
    /// `GameError::NoLegalMoves` if `state` offers nothing to play.
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        let actions = game.actions(state);
        if actions.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let mv = actions[self.rng.usize(..actions.len())];
        trace!(?mv, candidates = actions.len(), "random move");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinrow::KInARow;

    #[test]
    fn test_move_is_legal() {
        let game = KInARow::new(3, 3, 3).unwrap();
        let state = game.result(&game.initial_state(), (2, 2));
        let mut player = RandomPlayer::with_seed(7);
        for _ in 0..50 {
            let mv = player.choose_move(&game, &state).unwrap();
            assert!(state.moves.contains(&mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let game = KInARow::new(4, 4, 3).unwrap();
        let state = game.initial_state();
        let mut a = RandomPlayer::with_seed(123);
        let mut b = RandomPlayer::with_seed(123);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&game, &state).unwrap(),
                b.choose_move(&game, &state).unwrap()
            );
        }
    }

    #[test]
    fn test_covers_every_move() {
        let game = KInARow::new(2, 2, 2).unwrap();
        let state = game.initial_state();
        let mut player = RandomPlayer::with_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(player.choose_move(&game, &state).unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let game = KInARow::new(3, 3, 3).unwrap();
        let mut state = game.initial_state();
        state.moves.clear();
        let mut player = RandomPlayer::with_seed(0);
        assert!(matches!(
            player.choose_move(&game, &state),
            Err(GameError::NoLegalMoves)
        ));
    }
}

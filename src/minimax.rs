//! Minimax search with alpha-beta pruning.
//!
//! This module implements exhaustive adversarial search:
//! - Two mutually recursive procedures, [`Search::max_value`] and
//!   [`Search::min_value`], each carrying its own alpha/beta window
//! - No depth limit and no static evaluation: every path ends at a terminal
//!   state, scored by [`Game::utility`] for the player who started the search
//! - No transposition table: a position reached by two move orders is
//!   searched twice
//!
//! At the root every candidate move is scored with a fresh `(-inf, +inf)`
//! window, and the first move reaching the best score wins the tie.
//!
//! The unpruned variant, [`minimax_search`], visits the whole tree and is
//! kept as the reference the pruned search must agree with.

use tracing::debug;

use crate::board::Mark;
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::player::Player;

/// Stand-in for -infinity. No utility comes close.
const NEG_INF: i32 = i32::MIN;

/// Stand-in for +infinity.
const POS_INF: i32 = i32::MAX;

/// The outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision<M> {
    /// Chosen move
    pub best: M,
    /// Guaranteed utility of `best` for the player to move
    pub value: i32,
    /// Number of states visited, the root's children included
    pub nodes: u64,
}

/// Recursion state for one root search.
struct Search<'a, G: Game> {
    game: &'a G,
    /// The player the whole search maximizes for
    player: Mark,
    nodes: u64,
}

impl<'a, G: Game> Search<'a, G> {
    fn new(game: &'a G, player: Mark) -> Self {
        Self {
            game,
            player,
            nodes: 0,
        }
    }

    fn max_value(&mut self, state: &G::State, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        let game = self.game;
        if game.terminal_test(state) {
            return game.utility(state, self.player);
        }
        let mut v = NEG_INF;
        for action in game.actions(state) {
            v = v.max(self.min_value(&game.result(state, action), alpha, beta));
            if v >= beta {
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value(&mut self, state: &G::State, alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        let game = self.game;
        if game.terminal_test(state) {
            return game.utility(state, self.player);
        }
        let mut v = POS_INF;
        for action in game.actions(state) {
            v = v.min(self.max_value(&game.result(state, action), alpha, beta));
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }

    fn plain_max(&mut self, state: &G::State) -> i32 {
        self.nodes += 1;
        let game = self.game;
        if game.terminal_test(state) {
            return game.utility(state, self.player);
        }
        game.actions(state)
            .into_iter()
            .map(|action| self.plain_min(&game.result(state, action)))
            .fold(NEG_INF, i32::max)
    }

    fn plain_min(&mut self, state: &G::State) -> i32 {
        self.nodes += 1;
        let game = self.game;
        if game.terminal_test(state) {
            return game.utility(state, self.player);
        }
        game.actions(state)
            .into_iter()
            .map(|action| self.plain_max(&game.result(state, action)))
            .fold(POS_INF, i32::min)
    }
}

/// Score each root move with `score` and keep the first best one.
fn decide<G, F>(game: &G, state: &G::State, mut score: F) -> Result<Decision<G::Move>>
where
    G: Game,
    F: FnMut(&mut Search<'_, G>, &G::State) -> i32,
{
    if game.terminal_test(state) {
        return Err(GameError::TerminalState);
    }
    let mut search = Search::new(game, game.to_move(state));
    let mut best: Option<(G::Move, i32)> = None;

    for action in game.actions(state) {
        let value = score(&mut search, &game.result(state, action));
        if best.is_none_or(|(_, b)| value > b) {
            best = Some((action, value));
        }
    }

    let (best, value) = best.ok_or(GameError::NoLegalMoves)?;
    Ok(Decision {
        best,
        value,
        nodes: search.nodes,
    })
}

/// Choose a move for the player to act using alpha-beta pruning.
///
/// # Errors
/// - `GameError::TerminalState` if `state` is already decided
/// - `GameError::NoLegalMoves` if a non-terminal state offers no moves
pub fn alphabeta_search<G: Game>(game: &G, state: &G::State) -> Result<Decision<G::Move>> {
    let decision = decide(game, state, |search, child| {
        search.min_value(child, NEG_INF, POS_INF)
    })?;
    debug!(
        best = ?decision.best,
        value = decision.value,
        nodes = decision.nodes,
        "alpha-beta decision"
    );
    Ok(decision)
}

/// Choose a move by searching the full tree without pruning.
///
/// Always returns the same value as [`alphabeta_search`], at a higher node count.
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Result<Decision<G::Move>> {
    let decision = decide(game, state, |search, child| search.plain_min(child))?;
    debug!(
        best = ?decision.best,
        value = decision.value,
        nodes = decision.nodes,
        "minimax decision"
    );
    Ok(decision)
}

/// A player that plays alpha-beta moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaPlayer;

impl<G: Game> Player<G> for AlphaBetaPlayer {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        alphabeta_search(game, state).map(|d| d.best)
    }
}

/// A player that plays unpruned minimax moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxPlayer;

impl<G: Game> Player<G> for MinimaxPlayer {
    fn name(&self) -> &str {
        "minimax (unpruned)"
    }

    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        minimax_search(game, state).map(|d| d.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinrow::KInARow;

    fn play(game: &KInARow, moves: &[(usize, usize)]) -> <KInARow as Game>::State {
        moves
            .iter()
            .fold(game.initial_state(), |s, &mv| game.result(&s, mv))
    }

    #[test]
    fn test_takes_immediate_win() {
        let game = KInARow::new(3, 3, 3).unwrap();
        // X: (1,1) (1,2); O: (2,1) (2,2); X to move
        let state = play(&game, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let d = alphabeta_search(&game, &state).unwrap();
        assert_eq!(d.best, (1, 3));
        assert_eq!(d.value, 1);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let game = KInARow::new(3, 3, 3).unwrap();
        // X threatens (1,3); O must block
        let state = play(&game, &[(1, 1), (2, 2), (1, 2)]);
        let d = alphabeta_search(&game, &state).unwrap();
        assert_eq!(d.best, (1, 3));
    }

    #[test]
    fn test_terminal_state_is_an_error() {
        let game = KInARow::new(3, 3, 3).unwrap();
        let state = play(&game, &[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
        assert!(matches!(
            alphabeta_search(&game, &state),
            Err(GameError::TerminalState)
        ));
        assert!(matches!(
            minimax_search(&game, &state),
            Err(GameError::TerminalState)
        ));
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let game = KInARow::new(3, 3, 3).unwrap();
        let d = alphabeta_search(&game, &game.initial_state()).unwrap();
        assert_eq!(d.value, 0);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let game = KInARow::new(3, 3, 3).unwrap();
        let state = play(&game, &[(2, 2)]);
        let pruned = alphabeta_search(&game, &state).unwrap();
        let full = minimax_search(&game, &state).unwrap();
        assert_eq!(pruned.value, full.value);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn test_tie_break_is_first_in_order() {
        // 1x3 board, k=3: nobody can win once O has a mark, every move draws
        let game = KInARow::new(1, 3, 3).unwrap();
        let state = play(&game, &[(1, 2)]);
        let d = alphabeta_search(&game, &state).unwrap();
        assert_eq!(d.value, 0);
        assert_eq!(d.best, (1, 1));
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Player::<KInARow>::name(&AlphaBetaPlayer), "minimax");
        assert_eq!(Player::<KInARow>::name(&MinimaxPlayer), "minimax (unpruned)");
    }
}

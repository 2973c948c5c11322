//! The generalized m,n,k game: k marks in a row on an h x v board.
//!
//! This module provides the concrete [`Game`] used by the binary:
//! - [`GameState`], an immutable snapshot with a cached utility
//! - move application that never mutates its input
//! - the win check, scanning the four lines through the last move
//!
//! `X` always moves first, and utilities are stored relative to `X`.

use crate::board::{Board, Cell, Mark};
use crate::constants::{DIRECTIONS, DRAW, LOSS, WIN};
use crate::error::{GameError, Result};
use crate::game::Game;

/// A k-in-a-row position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Mark of the player to act next
    pub to_move: Mark,
    /// +1 if X has won, -1 if O has won, 0 otherwise. Set by the move that
    /// produced this state and never revised.
    pub utility: i32,
    /// Placed marks
    pub board: Board,
    /// Remaining legal cells, in generation order
    pub moves: Vec<Cell>,
}

/// The k-in-a-row rules for a fixed board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KInARow {
    pub h: usize,
    pub v: usize,
    pub k: usize,
}

impl KInARow {
    /// Rules for an `h` x `v` board where `k` in a row wins.
    ///
    /// # Errors
    /// `GameError::InvalidDimensions` if any of `h`, `v`, `k` is zero.
    pub fn new(h: usize, v: usize, k: usize) -> Result<Self> {
        if h == 0 || v == 0 || k == 0 {
            return Err(GameError::InvalidDimensions { h, v, k });
        }
        Ok(Self { h, v, k })
    }

    /// Utility of having placed `player` at `mv` on `board`.
    ///
    /// Returns [`WIN`] if X completed a line, [`LOSS`] if O did, [`DRAW`] otherwise.
    pub fn compute_utility(&self, board: &Board, mv: Cell, player: Mark) -> i32 {
        if DIRECTIONS
            .iter()
            .any(|&delta| self.k_in_row(board, mv, player, delta))
        {
            if player == Mark::X { WIN } else { LOSS }
        } else {
            DRAW
        }
    }

    /// True if the line through `mv` along `delta` holds at least k of `player`.
    fn k_in_row(&self, board: &Board, mv: Cell, player: Mark, delta: (isize, isize)) -> bool {
        if board.get(mv) != Some(player) {
            return false;
        }
        let (dr, dc) = delta;
        let forward = run_length(board, mv, player, (dr, dc));
        let backward = run_length(board, mv, player, (-dr, -dc));
        // both scans include mv itself
        forward + backward - 1 >= self.k
    }
}

/// Count consecutive `player` cells starting at `cell` and stepping by `delta`.
fn run_length(board: &Board, cell: Cell, player: Mark, delta: (isize, isize)) -> usize {
    let mut n = 0;
    let mut cur = Some(cell);
    while let Some(c) = cur {
        if board.get(c) != Some(player) {
            break;
        }
        n += 1;
        cur = board.step(c, delta);
    }
    n
}

impl Game for KInARow {
    type State = GameState;
    type Move = Cell;

    fn initial_state(&self) -> GameState {
        let board = Board::new(self.h, self.v);
        let moves = board.cells().collect();
        GameState {
            to_move: Mark::X,
            utility: DRAW,
            board,
            moves,
        }
    }

    fn to_move(&self, state: &GameState) -> Mark {
        state.to_move
    }

    fn actions(&self, state: &GameState) -> Vec<Cell> {
        state.moves.clone()
    }

    fn result(&self, state: &GameState, mv: Cell) -> GameState {
        if !state.moves.contains(&mv) {
            return state.clone();
        }
        let board = state.board.with_mark(mv, state.to_move);
        let moves = state.moves.iter().copied().filter(|&m| m != mv).collect();
        let utility = self.compute_utility(&board, mv, state.to_move);
        GameState {
            to_move: state.to_move.opponent(),
            utility,
            board,
            moves,
        }
    }

    fn utility(&self, state: &GameState, player: Mark) -> i32 {
        if player == Mark::X { state.utility } else { -state.utility }
    }

    fn terminal_test(&self, state: &GameState) -> bool {
        state.utility != DRAW || state.moves.is_empty()
    }

    fn display(&self, state: &GameState) -> String {
        state.board.to_string()
    }
}

/// Parse a `"<row>,<col>"` string into a cell.
///
/// Whitespace around either number is ignored. Returns `None` for anything
/// else; whether the cell is on the board is left to the caller.
pub fn parse_cell(s: &str) -> Option<Cell> {
    let (row, col) = s.trim().split_once(',')?;
    let row = row.trim().parse::<usize>().ok()?;
    let col = col.trim().parse::<usize>().ok()?;
    Some((row, col))
}

/// Format a cell the way [`parse_cell`] reads it.
pub fn str_cell((row, col): Cell) -> String {
    format!("{row},{col}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tic_tac_toe() -> KInARow {
        KInARow::new(3, 3, 3).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            KInARow::new(0, 3, 3),
            Err(GameError::InvalidDimensions { h: 0, v: 3, k: 3 })
        ));
        assert!(KInARow::new(3, 3, 0).is_err());
        assert!(KInARow::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_initial_state() {
        let game = KInARow::new(2, 3, 2).unwrap();
        let state = game.initial_state();
        assert_eq!(state.to_move, Mark::X);
        assert_eq!(state.utility, 0);
        assert_eq!(state.board.occupied(), 0);
        assert_eq!(state.moves, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_result_places_mark_and_flips_mover() {
        let game = tic_tac_toe();
        let s0 = game.initial_state();
        let s1 = game.result(&s0, (2, 2));
        assert_eq!(s1.board.get((2, 2)), Some(Mark::X));
        assert_eq!(s1.to_move, Mark::O);
        assert!(!s1.moves.contains(&(2, 2)));
        assert_eq!(s1.moves.len(), 8);
        // parent untouched
        assert_eq!(s0.moves.len(), 9);
        assert_eq!(s0.board.get((2, 2)), None);
    }

    #[test]
    fn test_illegal_move_is_a_no_op() {
        let game = tic_tac_toe();
        let s1 = game.result(&game.initial_state(), (1, 1));
        assert_eq!(game.result(&s1, (1, 1)), s1);
        assert_eq!(game.result(&s1, (4, 4)), s1);
    }

    #[test]
    fn test_try_result_reports_illegal_move() {
        let game = tic_tac_toe();
        let s1 = game.result(&game.initial_state(), (1, 1));
        let err = game.try_result(&s1, (1, 1)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove(_)));
        assert!(game.try_result(&s1, (1, 2)).is_ok());
    }

    #[test]
    fn test_compute_utility_row() {
        let game = tic_tac_toe();
        let board = Board::new(3, 3)
            .with_mark((1, 1), Mark::X)
            .with_mark((1, 2), Mark::X)
            .with_mark((1, 3), Mark::X);
        assert_eq!(game.compute_utility(&board, (1, 3), Mark::X), 1);
        assert_eq!(game.compute_utility(&board, (1, 2), Mark::X), 1);
    }

    #[test]
    fn test_compute_utility_column_and_diagonals() {
        let game = tic_tac_toe();
        let column = Board::new(3, 3)
            .with_mark((1, 2), Mark::O)
            .with_mark((2, 2), Mark::O)
            .with_mark((3, 2), Mark::O);
        assert_eq!(game.compute_utility(&column, (2, 2), Mark::O), -1);

        let diagonal = Board::new(3, 3)
            .with_mark((1, 1), Mark::X)
            .with_mark((2, 2), Mark::X)
            .with_mark((3, 3), Mark::X);
        assert_eq!(game.compute_utility(&diagonal, (1, 1), Mark::X), 1);

        let anti = Board::new(3, 3)
            .with_mark((1, 3), Mark::O)
            .with_mark((2, 2), Mark::O)
            .with_mark((3, 1), Mark::O);
        assert_eq!(game.compute_utility(&anti, (3, 1), Mark::O), -1);
    }

    #[test]
    fn test_compute_utility_short_line_is_draw() {
        let game = KInARow::new(4, 4, 4).unwrap();
        let board = Board::new(4, 4)
            .with_mark((1, 1), Mark::X)
            .with_mark((1, 2), Mark::X)
            .with_mark((1, 3), Mark::X);
        assert_eq!(game.compute_utility(&board, (1, 2), Mark::X), 0);
    }

    #[test]
    fn test_compute_utility_ignores_opponent_marks() {
        let game = tic_tac_toe();
        let board = Board::new(3, 3)
            .with_mark((1, 1), Mark::X)
            .with_mark((1, 2), Mark::O)
            .with_mark((1, 3), Mark::X);
        assert_eq!(game.compute_utility(&board, (1, 3), Mark::X), 0);
    }

    #[test]
    fn test_utility_is_frozen_after_win() {
        let game = tic_tac_toe();
        let mut state = game.initial_state();
        for mv in [(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)] {
            state = game.result(&state, mv);
        }
        assert_eq!(state.utility, 1);
        assert!(game.terminal_test(&state));
        // the successor is scored by its own move only
        let after = game.result(&state, (3, 3));
        assert_eq!(after.utility, 0);
        assert_eq!(state.utility, 1);
    }

    #[test]
    fn test_utility_perspective() {
        let game = tic_tac_toe();
        let mut state = game.initial_state();
        state.utility = -1;
        assert_eq!(game.utility(&state, Mark::X), -1);
        assert_eq!(game.utility(&state, Mark::O), 1);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("2,3"), Some((2, 3)));
        assert_eq!(parse_cell(" 1 , 2 \n"), Some((1, 2)));
        assert_eq!(parse_cell("2;3"), None);
        assert_eq!(parse_cell("a,b"), None);
        assert_eq!(parse_cell("-1,2"), None);
        assert_eq!(parse_cell(""), None);
        assert_eq!(str_cell((3, 1)), "3,1");
    }
}

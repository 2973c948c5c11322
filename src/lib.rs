//! Kinrow-Rust: exhaustive alpha-beta search for k-in-a-row games.
//!
//! This crate plays the generalized m,n,k game (tic-tac-toe being 3,3,3)
//! with a minimax searcher that always reaches terminal positions, a
//! uniform-random baseline, and a harness that tallies repeated games.
//!
//! ## Modules
//!
//! - [`constants`] - Default dimensions, trial parameters, log labels
//! - [`board`] - Marks, cells, and immutable board snapshots
//! - [`game`] - The abstract two-player [`game::Game`] interface
//! - [`kinrow`] - The k-in-a-row rules and win detection
//! - [`minimax`] - Alpha-beta and plain minimax search
//! - [`random`] - Uniform-random baseline player
//! - [`player`] - The [`player::Player`] interface
//! - [`arena`] - Match loop and parallel trial tallies
//! - [`manual`] - Human seat and game-mode menu
//! - [`record`] - Plain-text run log
//!
//! ## Example
//!
//! ```
//! use kinrow_rust::game::Game;
//! use kinrow_rust::kinrow::KInARow;
//! use kinrow_rust::minimax::alphabeta_search;
//!
//! let game = KInARow::new(3, 3, 3).unwrap();
//! let state = game.result(&game.initial_state(), (1, 1));
//!
//! let decision = alphabeta_search(&game, &state).unwrap();
//! println!("O plays {:?}, value {}", decision.best, decision.value);
//! ```

pub mod arena;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod kinrow;
pub mod manual;
pub mod minimax;
pub mod player;
pub mod random;
pub mod record;

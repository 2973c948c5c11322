//! Playing matches and tallying repeated trials.
//!
//! [`play_game`] alternates two players until the game ends. [`run_trials`]
//! plays many independent search-vs-random games on a rayon pool; each game
//! owns its own state and seeded random player, and the per-game tallies are
//! summed at the end.

use std::fmt;
use std::ops::Add;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::Mark;
use crate::error::Result;
use crate::game::Game;
use crate::minimax::AlphaBetaPlayer;
use crate::player::Player;
use crate::random::RandomPlayer;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    XWins,
    OWins,
    Tie,
}

impl Outcome {
    /// Classify a utility taken from X's perspective.
    pub fn from_utility(utility: i32) -> Self {
        match utility {
            u if u > 0 => Outcome::XWins,
            u if u < 0 => Outcome::OWins,
            _ => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "'X' won!"),
            Outcome::OWins => write!(f, "'O' won!"),
            Outcome::Tie => write!(f, "Tie!"),
        }
    }
}

/// Win/loss/tie counts.
///
/// Displays as `{'X': 3, 'O': 0, 'Tie': 97}`, the form the run log stores.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x: u32,
    pub o: u32,
    pub tie: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x += 1,
            Outcome::OWins => self.o += 1,
            Outcome::Tie => self.tie += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.x + self.o + self.tie
    }
}

impl From<Outcome> for Tally {
    fn from(outcome: Outcome) -> Self {
        let mut tally = Tally::default();
        tally.record(outcome);
        tally
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            x: self.x + rhs.x,
            o: self.o + rhs.o,
            tie: self.tie + rhs.tie,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Add::add)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'X': {}, 'O': {}, 'Tie': {}}}", self.x, self.o, self.tie)
    }
}

/// A completed game.
#[derive(Clone, Debug)]
pub struct Finished<S> {
    pub outcome: Outcome,
    /// The terminal state
    pub state: S,
    /// Moves played
    pub plies: usize,
}

/// Play one game from the initial state, `first` moving first.
///
/// After every move the state is checked for termination; the outcome is
/// read from X's side. An error from either player ends the game and is
/// returned as is, and so does a move outside `actions`
/// (`GameError::IllegalMove`).
pub fn play_game<G: Game>(
    game: &G,
    first: &mut dyn Player<G>,
    second: &mut dyn Player<G>,
) -> Result<Finished<G::State>> {
    let mut state = game.initial_state();
    let mut plies = 0;

    while !game.terminal_test(&state) {
        let player: &mut dyn Player<G> = if plies % 2 == 0 {
            &mut *first
        } else {
            &mut *second
        };
        let mv = player.choose_move(game, &state)?;
        debug!(player = player.name(), ?mv, ply = plies, "move");
        state = game.try_result(&state, mv)?;
        plies += 1;
    }

    let outcome = Outcome::from_utility(game.utility(&state, Mark::X));
    Ok(Finished {
        outcome,
        state,
        plies,
    })
}

/// Which side the random player takes in a trial batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrialOrder {
    RandomFirst,
    MinimaxFirst,
}

/// Play a single search-vs-random game.
pub fn play_trial<G: Game>(game: &G, order: TrialOrder, seed: u64) -> Result<Outcome> {
    let mut random = RandomPlayer::with_seed(seed);
    let mut search = AlphaBetaPlayer;
    let finished = match order {
        TrialOrder::RandomFirst => play_game(game, &mut random, &mut search)?,
        TrialOrder::MinimaxFirst => play_game(game, &mut search, &mut random)?,
    };
    debug!(?order, seed, outcome = ?finished.outcome, plies = finished.plies, "trial finished");
    Ok(finished.outcome)
}

/// Play `games` independent trials across `replicas` worker threads.
///
/// Game `i` seeds its random player with `seed + i`, so a batch is
/// reproducible whatever the thread count.
///
/// # Errors
/// Fails if the thread pool cannot be built or any game fails.
pub fn run_trials<G: Game + Sync>(
    game: &G,
    games: usize,
    order: TrialOrder,
    seed: u64,
    replicas: usize,
) -> Result<Tally> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(replicas.max(1))
        .build()?;

    let outcomes = pool.install(|| {
        (0..games)
            .into_par_iter()
            .map(|i| play_trial(game, order, seed.wrapping_add(i as u64)).map(Tally::from))
            .collect::<Result<Vec<Tally>>>()
    })?;
    let tally: Tally = outcomes.into_iter().sum();

    info!(?order, games, replicas, %tally, "trials complete");
    Ok(tally)
}

/// Tally search-vs-random games, each player getting both seats.
pub fn run_both_orders<G: Game + Sync>(
    game: &G,
    games: usize,
    seed: u64,
    replicas: usize,
) -> Result<(Tally, Tally)> {
    let random_first = run_trials(game, games, TrialOrder::RandomFirst, seed, replicas)?;
    let minimax_first = run_trials(game, games, TrialOrder::MinimaxFirst, seed, replicas)?;
    Ok((random_first, minimax_first))
}

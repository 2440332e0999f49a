//! Injectable random draw deciding whether an image may become a large tile

use crate::io::configuration::BIG_TILE_ODDS;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

/// Source of the 1-in-N draw used by the tile sequencer
pub trait ShapeDice {
    /// Roll once; `true` means the large-tile draw succeeded
    fn roll_big(&mut self) -> bool;
}

/// Seeded dice for reproducible stochastic walls
pub struct SeededDice {
    rng: StdRng,
    odds: u32,
}

impl SeededDice {
    /// Create deterministic dice with the default 1-in-3 odds
    pub fn new(seed: u64) -> Self {
        Self::with_odds(seed, BIG_TILE_ODDS)
    }

    /// Create deterministic dice winning with probability `1 / odds`
    ///
    /// Odds of zero are treated as one (always win).
    pub fn with_odds(seed: u64, odds: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            odds: odds.max(1),
        }
    }
}

impl ShapeDice for SeededDice {
    fn roll_big(&mut self) -> bool {
        self.rng.random_range(0..self.odds) == 0
    }
}

/// Dice that always return the same outcome
#[derive(Clone, Copy, Debug)]
pub struct FixedDice(pub bool);

impl ShapeDice for FixedDice {
    fn roll_big(&mut self) -> bool {
        self.0
    }
}

/// Dice replaying a fixed script of outcomes, then a fallback outcome
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<bool>,
    fallback: bool,
    rolls: usize,
}

impl ScriptedDice {
    /// Replay `script` in order; once exhausted every roll returns `fallback`
    pub fn new(script: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            rolls: 0,
        }
    }

    /// Number of rolls made so far
    pub const fn rolls(&self) -> usize {
        self.rolls
    }
}

impl ShapeDice for ScriptedDice {
    fn roll_big(&mut self) -> bool {
        self.rolls += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

impl<D: ShapeDice + ?Sized> ShapeDice for Box<D> {
    fn roll_big(&mut self) -> bool {
        (**self).roll_big()
    }
}

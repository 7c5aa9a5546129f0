//! Invasion game
//!
//! An attacker stands in front of a row of doors and shows a symbol announcing
//! which way it is about to move. The defender (the learner) blocks the
//! attack by moving the same way. Each episode is a single decision.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    ports::{Environment, Transition},
};

/// Symbol shown by the attacker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(usize);

impl Symbol {
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "<-"),
            1 => write!(f, "->"),
            n => write!(f, "symbol-{n}"),
        }
    }
}

/// Invasion game with `num_symbols` symbols and as many actions.
///
/// Reward is 1.0 for a blocked attack and 0.0 otherwise. With
/// [`InvasionGame::with_reversal`] the meaning of every symbol flips after a
/// given number of trials, so a learner has to unlearn its first policy.
#[derive(Debug, Clone)]
pub struct InvasionGame {
    num_symbols: usize,
    reverse_at: Option<usize>,
    trials: usize,
    current: Symbol,
    rng: StdRng,
}

impl InvasionGame {
    /// Create a game with `num_symbols` symbols (at least 2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `num_symbols < 2`.
    pub fn new(num_symbols: usize) -> Result<Self> {
        if num_symbols < 2 {
            return Err(Error::InvalidParameter {
                name: "num_symbols",
                reason: format!("invasion game needs at least 2 symbols, got {num_symbols}"),
            });
        }
        Ok(Self {
            num_symbols,
            reverse_at: None,
            trials: 0,
            current: Symbol(0),
            rng: StdRng::from_rng(&mut rand::rng()),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Flip the meaning of every symbol once `trial` trials have been played.
    pub fn with_reversal(mut self, trial: usize) -> Self {
        self.reverse_at = Some(trial);
        self
    }

    /// Trials (steps) played so far
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse_at.is_some_and(|at| self.trials >= at)
    }

    /// Action that blocks the attacker showing `symbol`
    pub fn blocking_action(&self, symbol: Symbol) -> usize {
        if self.is_reversed() {
            self.num_symbols - 1 - symbol.0
        } else {
            symbol.0
        }
    }

    fn draw_symbol(&mut self) -> Symbol {
        self.current = Symbol(self.rng.random_range(0..self.num_symbols));
        self.current
    }
}

impl Environment for InvasionGame {
    type Observation = Symbol;

    fn num_actions(&self) -> usize {
        self.num_symbols
    }

    fn reset(&mut self) -> Symbol {
        self.draw_symbol()
    }

    fn step(&mut self, action: usize) -> Result<Transition<Symbol>> {
        if action >= self.num_symbols {
            return Err(Error::InvalidAction {
                action,
                num_actions: self.num_symbols,
            });
        }

        let reward = if action == self.blocking_action(self.current) {
            1.0
        } else {
            0.0
        };

        let was_reversed = self.is_reversed();
        self.trials += 1;
        if !was_reversed && self.is_reversed() {
            debug!(trial = self.trials, "invasion game symbols reversed");
        }

        Ok(Transition {
            observation: self.draw_symbol(),
            reward,
            done: true,
        })
    }

    fn name(&self) -> &str {
        "invasion-game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_symbols() {
        assert!(matches!(
            InvasionGame::new(1),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn blocking_rewards_one() {
        let mut game = InvasionGame::new(2).unwrap().with_seed(4);
        let mut symbol = game.reset();
        for _ in 0..20 {
            let transition = game.step(symbol.value()).unwrap();
            assert_eq!(transition.reward, 1.0);
            assert!(transition.done);
            symbol = transition.observation;
        }
    }

    #[test]
    fn missing_rewards_zero() {
        let mut game = InvasionGame::new(3).unwrap().with_seed(4);
        let mut symbol = game.reset();
        for _ in 0..20 {
            let wrong = (symbol.value() + 1) % 3;
            let transition = game.step(wrong).unwrap();
            assert_eq!(transition.reward, 0.0);
            symbol = transition.observation;
        }
    }

    #[test]
    fn reversal_flips_blocking_action() {
        let mut game = InvasionGame::new(2).unwrap().with_seed(8).with_reversal(3);
        game.reset();
        assert_eq!(game.blocking_action(Symbol(0)), 0);
        for _ in 0..3 {
            game.step(0).unwrap();
        }
        assert!(game.is_reversed());
        assert_eq!(game.trials(), 3);
        assert_eq!(game.blocking_action(Symbol(0)), 1);
        assert_eq!(game.blocking_action(Symbol(1)), 0);
    }

    #[test]
    fn out_of_range_action_rejected() {
        let mut game = InvasionGame::new(2).unwrap();
        game.reset();
        assert!(matches!(
            game.step(2),
            Err(Error::InvalidAction {
                action: 2,
                num_actions: 2
            })
        ));
    }

    #[test]
    fn symbols_display_as_arrows() {
        assert_eq!(Symbol(0).to_string(), "<-");
        assert_eq!(Symbol(1).to_string(), "->");
        assert_eq!(Symbol(4).to_string(), "symbol-4");
    }
}

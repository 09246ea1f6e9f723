use std::fmt::{self, Debug, Formatter};

use common::{
    console::Console,
    error::GameError,
    model::{game::Move, messages::PlayerScore},
};

use crate::strategy::{Interactive, RandomMove, Strategy};

/// A named contestant with a running score. How it picks moves is up to its strategy.
pub struct Player {
    name: String,
    score: u32,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Player {
            name: name.into(),
            score: 0,
            strategy,
        }
    }

    pub fn interactive(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(Interactive::default()))
    }

    pub fn random(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(RandomMove::from_entropy()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn snapshot(&self) -> PlayerScore {
        PlayerScore {
            name: self.name.clone(),
            score: self.score,
        }
    }

    /// Asks the strategy for this round's throw. Never touches the score.
    pub fn make_move(&mut self, console: &mut dyn Console) -> Result<Move, GameError> {
        self.strategy.make_move(console)
    }
}

impl Debug for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .finish()
    }
}

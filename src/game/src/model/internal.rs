use common::{
    error::GameError,
    model::{game::Move, messages::PlayerScore},
};

pub const DEFAULT_ROUNDS: u32 = 3;
pub const COMPUTER_NAME: &str = "Computer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfiguration {
    pub rounds: u32,
    /// Skips the name prompt when set.
    pub player_name: Option<String>,
    pub computer_name: String,
}

impl GameConfiguration {
    pub fn new(rounds: u32) -> Result<Self, GameError> {
        if rounds == 0 {
            return Err(GameError::InvalidConfiguration(
                "a match needs at least one round".to_owned(),
            ));
        }
        Ok(GameConfiguration {
            rounds,
            player_name: None,
            computer_name: COMPUTER_NAME.to_owned(),
        })
    }

    pub fn with_player_name(mut self, player_name: Option<String>) -> Self {
        self.player_name = player_name;
        self
    }

    /// A score above this ends the match early.
    pub fn majority_threshold(&self) -> u32 {
        self.rounds / 2
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        GameConfiguration {
            rounds: DEFAULT_ROUNDS,
            player_name: None,
            computer_name: COMPUTER_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub moves: (Move, Move),
    /// `None` on a tie.
    pub winner: Option<Side>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub rounds_played: u32,
    pub player_one: PlayerScore,
    pub player_two: PlayerScore,
    /// `None` on a draw.
    pub winner: Option<Side>,
}

impl MatchSummary {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| match side {
            Side::PlayerOne => self.player_one.name.as_str(),
            Side::PlayerTwo => self.player_two.name.as_str(),
        })
    }
}

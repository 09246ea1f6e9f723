use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::game::Move;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Id(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

impl fmt::Display for PlayerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

// Console messages, in the order a match produces them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GameEvent {
    Welcome,
    NamePrompt,
    MatchStarted {
        player_one: String,
        player_two: String,
        rounds: u32,
    },
    RoundStarted {
        round: u32,
    },
    MovePrompt,
    InvalidChoice {
        input: String,
    },
    MoveChosen {
        player: String,
        value: Move,
    },
    RoundResult {
        winner: Option<String>,
    },
    Score {
        player_one: PlayerScore,
        player_two: PlayerScore,
    },
    MatchResult {
        player_one: PlayerScore,
        player_two: PlayerScore,
        winner: Option<String>,
    },
    RematchPrompt,
    Farewell,
}

impl GameEvent {
    /// Prompts are written without a trailing newline so input follows on the same line.
    pub fn is_prompt(&self) -> bool {
        matches!(
            self,
            GameEvent::NamePrompt | GameEvent::MovePrompt | GameEvent::RematchPrompt
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Welcome => write!(f, "Welcome to Rock Paper Scissors!"),
            GameEvent::NamePrompt => write!(f, "Enter your name: "),
            GameEvent::MatchStarted {
                player_one,
                player_two,
                rounds,
            } => writeln!(
                f,
                "Starting Rock Paper Scissors Game!\n{} vs {}\nBest of {} rounds",
                player_one, player_two, rounds
            ),
            GameEvent::RoundStarted { round } => write!(f, "=== Round {} ===", round),
            GameEvent::MovePrompt => {
                let menu = Move::ALL
                    .iter()
                    .map(|m| format!("{}. {}", m.code(), m))
                    .join("\n");
                write!(
                    f,
                    "\nChoose your move:\n{}\nEnter your choice (1-{}): ",
                    menu,
                    Move::ALL.len()
                )
            }
            GameEvent::InvalidChoice { .. } => write!(f, "Invalid choice! Please try again."),
            GameEvent::MoveChosen { player, value } => write!(f, "{} chose: {}", player, value),
            GameEvent::RoundResult {
                winner: Some(winner),
            } => write!(f, "{} wins this round!", winner),
            GameEvent::RoundResult { winner: None } => write!(f, "It's a tie!"),
            GameEvent::Score {
                player_one,
                player_two,
            } => writeln!(f, "Current Score: {} - {}", player_one, player_two),
            GameEvent::MatchResult {
                player_one,
                player_two,
                winner,
            } => {
                writeln!(
                    f,
                    "\n=== GAME OVER ===\nFinal Score: {} - {}",
                    player_one, player_two
                )?;
                match winner {
                    Some(winner) => write!(f, "{} wins the game!", winner),
                    None => write!(f, "The game is a draw!"),
                }
            }
            GameEvent::RematchPrompt => write!(f, "\nWould you like to play again? (y/n): "),
            GameEvent::Farewell => write!(f, "Thanks for playing!"),
        }
    }
}

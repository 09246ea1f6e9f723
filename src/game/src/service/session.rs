use agent::player::Player;
use common::{
    console::Console,
    error::GameError,
    model::{
        game::{Move, Outcome},
        messages::{GameEvent, Id},
    },
};
use tracing::{debug, info, warn};

use crate::model::internal::{GameConfiguration, MatchSummary, RoundResult, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    RoundInProgress { round: u32 },
    RoundResolved { round: u32 },
    MatchOver,
    AwaitingRematchDecision,
    Ended,
}

struct GameState {
    phase: GamePhase,
    rounds_played: u32,
    last_round: Option<RoundResult>,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            phase: GamePhase::NotStarted,
            rounds_played: 0,
            last_round: None,
        }
    }
}

/// One match between two players, replayable on request.
pub struct GameSession {
    id: Id,
    configuration: GameConfiguration,
    players: (Player, Player),
    state: GameState,
}

impl GameSession {
    pub fn new(configuration: GameConfiguration, player_one: Player, player_two: Player) -> Self {
        GameSession {
            id: Id::new(),
            configuration,
            players: (player_one, player_two),
            state: GameState::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played
    }

    pub fn last_round(&self) -> Option<&RoundResult> {
        self.state.last_round.as_ref()
    }

    pub fn players(&self) -> (&Player, &Player) {
        (&self.players.0, &self.players.1)
    }

    /// Advances the match by one transition. Does nothing once the match is over.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        let next = match self.state.phase {
            GamePhase::NotStarted => {
                info!(
                    "Starting match: {} vs {}, best of {}",
                    self.players.0.name(),
                    self.players.1.name(),
                    self.configuration.rounds
                );
                console.emit(GameEvent::MatchStarted {
                    player_one: self.players.0.name().to_owned(),
                    player_two: self.players.1.name().to_owned(),
                    rounds: self.configuration.rounds,
                })?;
                GamePhase::RoundInProgress { round: 1 }
            }
            GamePhase::RoundInProgress { round } => {
                let result = self.play_round(round, console)?;
                self.state.last_round = Some(result);
                GamePhase::RoundResolved { round }
            }
            GamePhase::RoundResolved { round } => {
                if self.has_majority() || round >= self.configuration.rounds {
                    let summary = self.summary();
                    info!(
                        "Match over after {} rounds, winner: {:?}",
                        summary.rounds_played,
                        summary.winner_name()
                    );
                    console.emit(GameEvent::MatchResult {
                        player_one: summary.player_one.clone(),
                        player_two: summary.player_two.clone(),
                        winner: summary.winner_name().map(str::to_owned),
                    })?;
                    GamePhase::MatchOver
                } else {
                    GamePhase::RoundInProgress { round: round + 1 }
                }
            }
            phase @ (GamePhase::MatchOver
            | GamePhase::AwaitingRematchDecision
            | GamePhase::Ended) => {
                warn!("Ignoring step in phase {:?}", phase);
                phase
            }
        };
        self.state.phase = next;
        Ok(())
    }

    /// Plays rounds until the match is decided.
    pub fn play_match(&mut self, console: &mut dyn Console) -> Result<MatchSummary, GameError> {
        while matches!(
            self.state.phase,
            GamePhase::NotStarted
                | GamePhase::RoundInProgress { .. }
                | GamePhase::RoundResolved { .. }
        ) {
            self.step(console)?;
        }
        Ok(self.summary())
    }

    /// Asks whether to play again. Resets both scores on yes, says goodbye otherwise.
    pub fn ask_rematch(&mut self, console: &mut dyn Console) -> Result<bool, GameError> {
        if self.state.phase != GamePhase::MatchOver {
            warn!("Rematch requested in phase {:?}", self.state.phase);
            return Ok(false);
        }
        self.state.phase = GamePhase::AwaitingRematchDecision;
        let answer = console.ask(GameEvent::RematchPrompt)?;
        let play_again = answer.as_deref().is_some_and(is_affirmative);
        info!("Rematch answer {:?}, playing again: {}", answer, play_again);

        if play_again {
            self.reset();
        } else {
            console.emit(GameEvent::Farewell)?;
            self.state.phase = GamePhase::Ended;
        }
        Ok(play_again)
    }

    pub fn reset(&mut self) {
        self.players.0.reset_score();
        self.players.1.reset_score();
        self.state = GameState::new();
    }

    pub fn summary(&self) -> MatchSummary {
        let (one, two) = (self.players.0.score(), self.players.1.score());
        let winner = match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Side::PlayerOne),
            std::cmp::Ordering::Less => Some(Side::PlayerTwo),
            std::cmp::Ordering::Equal => None,
        };
        MatchSummary {
            rounds_played: self.state.rounds_played,
            player_one: self.players.0.snapshot(),
            player_two: self.players.1.snapshot(),
            winner,
        }
    }

    fn play_round(
        &mut self,
        round: u32,
        console: &mut dyn Console,
    ) -> Result<RoundResult, GameError> {
        console.emit(GameEvent::RoundStarted { round })?;
        let move_1 = self.players.0.make_move(console)?;
        let move_2 = self.players.1.make_move(console)?;
        for (player, value) in [(&self.players.0, move_1), (&self.players.1, move_2)] {
            console.emit(GameEvent::MoveChosen {
                player: player.name().to_owned(),
                value,
            })?;
        }

        let winner = Self::get_winner(move_1, move_2);
        let winner_name = match winner {
            Some(Side::PlayerOne) => {
                self.players.0.increment_score();
                Some(self.players.0.name().to_owned())
            }
            Some(Side::PlayerTwo) => {
                self.players.1.increment_score();
                Some(self.players.1.name().to_owned())
            }
            None => None,
        };
        self.state.rounds_played += 1;
        debug!(
            "Round {}: {} vs {}, winner {:?}, score {}-{}",
            round,
            move_1,
            move_2,
            winner_name,
            self.players.0.score(),
            self.players.1.score()
        );

        console.emit(GameEvent::RoundResult {
            winner: winner_name,
        })?;
        console.emit(GameEvent::Score {
            player_one: self.players.0.snapshot(),
            player_two: self.players.1.snapshot(),
        })?;
        Ok(RoundResult {
            round,
            moves: (move_1, move_2),
            winner,
        })
    }

    fn has_majority(&self) -> bool {
        let threshold = self.configuration.majority_threshold();
        self.players.0.score() > threshold || self.players.1.score() > threshold
    }

    fn get_winner(move_1: Move, move_2: Move) -> Option<Side> {
        match move_1.outcome_against(&move_2) {
            Outcome::Win => Some(Side::PlayerOne),
            Outcome::Loss => Some(Side::PlayerTwo),
            Outcome::Draw => None,
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

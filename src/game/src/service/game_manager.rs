use common::{console::Console, error::GameError};
use tracing::{debug, info, info_span};

use crate::model::internal::MatchSummary;
use crate::service::session::GameSession;

/// Runs matches back to back for as long as the human wants a rematch.
pub struct GameManager {
    session: GameSession,
}

impl GameManager {
    pub fn new(session: GameSession) -> Self {
        GameManager { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the summary of every completed match.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Vec<MatchSummary>, GameError> {
        let span = info_span!("session", id = %self.session.id());
        let _guard = span.enter();

        let mut summaries = Vec::new();
        loop {
            match self.session.play_match(console) {
                Ok(summary) => {
                    if let Some(round) = self.session.last_round() {
                        debug!("Match decided in round {}: {:?}", round.round, round);
                    }
                    summaries.push(summary);
                }
                Err(GameError::InputClosed) => {
                    info!("Input closed during match {}", summaries.len() + 1);
                    break;
                }
                Err(error) => return Err(error),
            }
            if !self.session.ask_rematch(console)? {
                break;
            }
        }
        let (one, two) = self.session.players();
        info!(
            "Session finished after {} matches, final scores {} {} - {} {}",
            summaries.len(),
            one.name(),
            one.score(),
            two.name(),
            two.score()
        );
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use agent::{
        player::Player,
        strategy::{Fixed, Scripted},
    };
    use common::{
        model::{game::Move, messages::GameEvent},
        test::ScriptedConsole,
    };

    use super::*;
    use crate::{
        model::internal::{GameConfiguration, Side},
        service::session::GamePhase,
    };

    fn manager(computer: Vec<Move>) -> GameManager {
        GameManager::new(GameSession::new(
            GameConfiguration::default(),
            Player::interactive("Ada"),
            Player::new("Computer", Box::new(Scripted::new(computer))),
        ))
    }

    #[test]
    fn plays_until_rematch_is_declined() {
        let mut manager = manager(vec![Move::Scissors]);
        let mut console = ScriptedConsole::new(["1", "1", "y", "2", "2", "Y", "1", "1", "no"]);
        let summaries = manager.run(&mut console).unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].winner, Some(Side::PlayerOne));
        assert_eq!(summaries[1].winner, Some(Side::PlayerTwo));
        for summary in &summaries {
            assert_eq!(summary.rounds_played, 2);
            assert_eq!(summary.player_one.score + summary.player_two.score, 2);
        }
        assert_eq!(manager.session().phase(), GamePhase::Ended);
        assert_eq!(console.remaining_input(), 0);
        assert_eq!(
            console
                .events()
                .filter(|event| matches!(event, GameEvent::MatchStarted { .. }))
                .count(),
            3
        );
    }

    #[test]
    fn every_rematch_starts_from_zero() {
        let mut manager = manager(vec![Move::Scissors]);
        let mut console = ScriptedConsole::new(["1", "1", "yes", "1", "1", "n"]);
        manager.run(&mut console).unwrap();

        let scores: Vec<(u32, u32)> = console
            .events()
            .filter_map(|event| match event {
                GameEvent::Score {
                    player_one,
                    player_two,
                } => Some((player_one.score, player_two.score)),
                _ => None,
            })
            .collect();
        assert_eq!(scores, vec![(1, 0), (2, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn closed_input_ends_quietly() {
        let mut manager = GameManager::new(GameSession::new(
            GameConfiguration::default(),
            Player::interactive("Ada"),
            Player::new("Computer", Box::new(Fixed(Move::Rock))),
        ));
        let mut console = ScriptedConsole::new(["1"]);
        let summaries = manager.run(&mut console).unwrap();

        assert!(summaries.is_empty());
        assert_eq!(manager.session().rounds_played(), 1);
        assert!(!console.events().any(|event| *event == GameEvent::Farewell));
    }
}

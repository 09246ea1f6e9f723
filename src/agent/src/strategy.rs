use std::collections::VecDeque;

use common::{
    console::Console,
    error::GameError,
    model::{game::Move, messages::GameEvent},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, warn};

/// How a player picks its throw for the current round.
pub trait Strategy {
    fn make_move(&mut self, console: &mut dyn Console) -> Result<Move, GameError>;
}

// Human at the console
#[derive(Debug, Default)]
pub struct Interactive {}

impl Strategy for Interactive {
    fn make_move(&mut self, console: &mut dyn Console) -> Result<Move, GameError> {
        loop {
            let line = console
                .ask(GameEvent::MovePrompt)?
                .ok_or(GameError::InputClosed)?;
            match line.parse::<Move>() {
                Ok(value) => return Ok(value),
                Err(error) => {
                    warn!("Rejected move selection: {}", error);
                    console.emit(GameEvent::InvalidChoice { input: line })?;
                }
            }
        }
    }
}

// Random
pub struct RandomMove<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMove<R> {
    pub fn new(rng: R) -> Self {
        RandomMove { rng }
    }
}

impl RandomMove<StdRng> {
    /// Seeded once from the operating system, then reused for every draw.
    pub fn from_entropy() -> Self {
        RandomMove::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Strategy for RandomMove<R> {
    fn make_move(&mut self, _: &mut dyn Console) -> Result<Move, GameError> {
        let value = Move::ALL[self.rng.gen_range(0..Move::ALL.len())];
        debug!("Drew {}", value);
        Ok(value)
    }
}

// Trivial strategies
#[derive(Debug, Clone)]
pub struct Fixed(pub Move);

impl Strategy for Fixed {
    fn make_move(&mut self, _: &mut dyn Console) -> Result<Move, GameError> {
        Ok(self.0)
    }
}

/// Replays a fixed sequence of throws, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct Scripted {
    moves: VecDeque<Move>,
}

impl Scripted {
    /// # Panics
    ///
    /// Panics if `moves` is empty.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: VecDeque<Move> = moves.into_iter().collect();
        assert!(!moves.is_empty(), "Scripted strategy needs at least one move");
        Scripted { moves }
    }
}

impl Strategy for Scripted {
    fn make_move(&mut self, _: &mut dyn Console) -> Result<Move, GameError> {
        let value = self.moves[0];
        self.moves.rotate_left(1);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use common::test::{Event, ScriptedConsole};

    use super::*;

    #[test]
    fn interactive_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["5", "paper", "2"]);
        let value = Interactive::default().make_move(&mut console).unwrap();

        assert_eq!(value, Move::Paper);
        let invalid: Vec<&GameEvent> = console
            .events()
            .filter(|event| matches!(event, GameEvent::InvalidChoice { .. }))
            .collect();
        assert_eq!(
            invalid,
            vec![
                &GameEvent::InvalidChoice {
                    input: "5".to_owned()
                },
                &GameEvent::InvalidChoice {
                    input: "paper".to_owned()
                },
            ]
        );
        assert_eq!(
            console
                .events()
                .filter(|event| **event == GameEvent::MovePrompt)
                .count(),
            3
        );
    }

    #[test]
    fn interactive_reports_closed_input() {
        let mut console = ScriptedConsole::new(["9"]);
        let result = Interactive::default().make_move(&mut console);

        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(
            console.transcript().last(),
            Some(&Event::Receive {
                event: GameEvent::MovePrompt
            })
        );
    }

    #[test]
    fn random_move_is_roughly_uniform() {
        let draws: u32 = 30_000;
        let mut strategy = RandomMove::new(StdRng::seed_from_u64(7));
        let mut console = ScriptedConsole::default();
        let mut counts: HashMap<Move, u32> = HashMap::new();
        for _ in 0..draws {
            *counts
                .entry(strategy.make_move(&mut console).unwrap())
                .or_default() += 1;
        }

        for value in Move::ALL {
            let frequency = f64::from(counts[&value]) / f64::from(draws);
            assert!(
                (frequency - 1.0 / 3.0).abs() < 0.02,
                "{} drawn with frequency {}",
                value,
                frequency
            );
        }
        // Random draws never touch the console
        assert!(console.transcript().is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one move")]
    fn scripted_needs_a_move() {
        Scripted::new(Vec::new());
    }

    #[test]
    fn scripted_cycles_through_moves() {
        let mut strategy = Scripted::new([Move::Scissors, Move::Paper]);
        let mut console = ScriptedConsole::default();
        let drawn: Vec<Move> = (0..3)
            .map(|_| strategy.make_move(&mut console).unwrap())
            .collect();
        assert_eq!(drawn, vec![Move::Scissors, Move::Paper, Move::Scissors]);
        assert_eq!(
            Fixed(Move::Rock).make_move(&mut console).unwrap(),
            Move::Rock
        );
    }
}

use agent::{player::Player, strategy::Strategy};
use common::{console::Console, error::GameError, model::messages::GameEvent};
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use super::model::internal::{GameConfiguration, MatchSummary};
use super::service::game_manager::GameManager;
use super::service::session::GameSession;

/// Greets the player, sets up both sides and plays until they stop.
pub fn run(
    configuration: GameConfiguration,
    console: &mut dyn Console,
    computer_strategy: Box<dyn Strategy>,
) -> Result<Vec<MatchSummary>, GameError> {
    console.emit(GameEvent::Welcome)?;
    let name = match configuration.player_name.clone() {
        Some(name) => name,
        None => match console.ask(GameEvent::NamePrompt)? {
            Some(line) => line,
            None => {
                info!("Input closed before a name was entered");
                return Ok(Vec::new());
            }
        },
    };

    let human = Player::interactive(name);
    let computer = Player::new(configuration.computer_name.clone(), computer_strategy);
    let mut manager = GameManager::new(GameSession::new(configuration, human, computer));
    let summaries = manager.run(console)?;
    debug!(
        "Session {} closed in phase {:?}",
        manager.session().id(),
        manager.session().phase()
    );
    Ok(summaries)
}

/// Logs go to stderr so they never mix with the game on stdout.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    // Ignore error if already set
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use agent::strategy::Fixed;
    use common::{model::game::Move, test::ScriptedConsole};

    use super::*;

    #[test]
    fn configured_name_skips_the_prompt() {
        let configuration = GameConfiguration::default().with_player_name(Some("Ada".to_owned()));
        let mut console = ScriptedConsole::new(["2", "2", "n"]);
        let summaries = run(configuration, &mut console, Box::new(Fixed(Move::Rock))).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].winner_name(), Some("Ada"));
        assert!(!console.events().any(|event| *event == GameEvent::NamePrompt));
    }

    #[test]
    fn prompted_name_is_kept_as_entered() {
        let mut console = ScriptedConsole::new(["  Ada \t", "3", "3", "n"]);
        let summaries = run(
            GameConfiguration::default(),
            &mut console,
            Box::new(Fixed(Move::Paper)),
        )
        .unwrap();

        assert_eq!(summaries[0].player_one.name, "  Ada \t");
        assert_eq!(summaries[0].player_two.name, "Computer");
    }

    #[test]
    fn no_input_at_all_ends_after_welcome() {
        let mut console = ScriptedConsole::default();
        let summaries = run(
            GameConfiguration::default(),
            &mut console,
            Box::new(Fixed(Move::Paper)),
        )
        .unwrap();

        assert!(summaries.is_empty());
        assert_eq!(
            console.events().collect::<Vec<_>>(),
            vec![&GameEvent::Welcome, &GameEvent::NamePrompt]
        );
    }
}

use agent::strategy::RandomMove;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use common::console::TerminalConsole;
use game::entrypoint::{init_logging, run};
use game::model::internal::{GameConfiguration, DEFAULT_ROUNDS};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "rock-paper-scissors",
    version,
    about = "Play Rock Paper Scissors against the computer"
)]
struct Cli {
    /// Your name. Asked for at startup when omitted.
    #[arg(long)]
    name: Option<String>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = play() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn play() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let configuration = GameConfiguration::new(DEFAULT_ROUNDS)?.with_player_name(cli.name);
    let mut console = TerminalConsole::stdio();
    let summaries = run(
        configuration,
        &mut console,
        Box::new(RandomMove::from_entropy()),
    )
    .context("Game aborted")?;
    info!("Played {} matches", summaries.len());
    Ok(())
}

//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_potd::{
    cli::{Commands, GetCmd, NbaPotd},
    commands::{
        matches::handle_matches, player_of_the_day::handle_player_of_the_day,
        season::handle_season, Interrupts,
    },
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "nba_potd=debug" } else { "nba_potd=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Run the CLI.
///
/// The first Ctrl-C abandons outstanding box-score fetches and the command
/// reports what it collected; a second Ctrl-C aborts the command outright.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaPotd::parse();
    init_logging(app.verbose());

    let interrupts = Interrupts::new();
    interrupts.listen_for_ctrl_c();
    let first_press = {
        let interrupts = interrupts.clone();
        async move { interrupts.reached(1).await }
    };

    let run = async {
        match app.command {
            Commands::Get { cmd } => match cmd {
                GetCmd::PlayerOfTheDay { options } => {
                    handle_player_of_the_day(options.into(), first_press)
                        .await
                        .context("failed to find the player of the day")?
                }

                GetCmd::Matches { options } => handle_matches(options.into(), first_press)
                    .await
                    .context("failed to list matches")?,

                GetCmd::Season { date } => handle_season(date),
            },
        }
        anyhow::Ok(())
    };

    tokio::select! {
        result = run => result,
        _ = interrupts.reached(2) => anyhow::bail!("interrupted"),
    }
}

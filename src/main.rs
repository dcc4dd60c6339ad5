//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ipl_fantasy::{
    cli::{Commands, FantasyCli},
    commands::{
        common::CommandContext,
        contests::{handle_create_contest, handle_enroll, handle_leaderboard, handle_list_contests},
        import::handle_import,
        schedule::handle_schedule,
        score::handle_score,
        show_team::handle_show_team,
        squad::handle_squad,
        submit_team::handle_submit_team,
        update_points::{handle_update_points, UpdatePointsParams},
        validate::handle_validate,
    },
    Result, LOG_ENV_VAR,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(app: FantasyCli) -> Result<()> {
    let db_override = app.db.as_deref();

    match app.command {
        Commands::Score { stats, role, json } => handle_score(&stats, role, json)?,

        Commands::Validate { roster, json } => handle_validate(&roster, json)?,

        Commands::Import { file } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_import(&mut ctx.db, &file)?
        }

        Commands::SubmitTeam { file } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_submit_team(&mut ctx.db, &file)?
        }

        Commands::UpdatePoints {
            match_name,
            performances,
            status,
            verbose,
        } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_update_points(
                &mut ctx,
                UpdatePointsParams {
                    match_name: &match_name,
                    performances: &performances,
                    status,
                    verbose,
                },
            )?
        }

        Commands::CreateContest { file } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_create_contest(&mut ctx.db, &file)?
        }

        Commands::Enroll { contest, team } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_enroll(&mut ctx.db, &contest, &team)?
        }

        Commands::Schedule { from, json } => {
            let ctx = CommandContext::open(db_override)?;
            handle_schedule(&ctx.db, from.as_deref(), json)?
        }

        Commands::Contests { match_name, json } => {
            let ctx = CommandContext::open(db_override)?;
            handle_list_contests(&ctx, &match_name, json)?
        }

        Commands::Squad { team, json } => {
            let ctx = CommandContext::open(db_override)?;
            handle_squad(&ctx.db, &team, json)?
        }

        Commands::ShowTeam { team, json } => {
            let ctx = CommandContext::open(db_override)?;
            handle_show_team(&ctx.db, &team, json)?
        }

        Commands::Leaderboard { contest, json } => {
            let mut ctx = CommandContext::open(db_override)?;
            handle_leaderboard(&mut ctx.db, &contest, json)?
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run(FantasyCli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Banter CLI and REST API entry point.
//!
//! Binary name: `banter`
//!
//! Parses CLI arguments, loads config and wires the group session, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use banter_observe::tracing_setup::{
    TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = TracingOptions::new(filter_for_verbosity(cli.verbose, cli.quiet))
        .json(cli.json)
        .otel(cli.otel);
    if let Err(e) = init_tracing(&options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Commands that don't need app state
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "banter", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Personas => return cli::personas::list_personas(cli.json),
        Commands::Classify { text } => return cli::personas::classify_text(text, cli.json),
        _ => {}
    }

    let state = AppState::init(cli.command.offline()).await?;

    match cli.command {
        Commands::Assign { accounts } => {
            cli::group::assign(&state, accounts, cli.json)?;
        }

        Commands::Reply {
            accounts,
            account,
            message,
            ..
        } => {
            cli::group::reply(&state, accounts, account, &message, cli.json).await?;
        }

        Commands::Simulate {
            accounts, turns, ..
        } => {
            cli::simulate::simulate(&state, accounts, turns, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Banter API listening on {}",
                console::style("💬").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let session = state.session.clone();
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            session.stop();
            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } | Commands::Personas | Commands::Classify { .. } => {
            unreachable!("handled above")
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

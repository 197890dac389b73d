//! duns CLI entry point.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duns::cli::{Cli, Commands, OutputFormat};
use duns::output::{format_output, PrettyFormat};
use duns::{AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duns=warn,duns_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env());
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::new(&config).await?;
    let service = &state.service;

    match cli.command {
        Commands::List { filter, refresh } => {
            let duns = service.list(filter.into(), refresh).await?;
            print(None, &duns, cli.format);
        }
        Commands::Get { id } => {
            let dun = service.get(&id).await?;
            print(None, &dun, cli.format);
        }
        Commands::Add { title, description } => {
            let dun = service.create(&title, &description).await?;
            print(Some("Created"), &dun, cli.format);
        }
        Commands::Edit {
            id,
            title,
            description,
        } => {
            let dun = service
                .update(&id, title.as_deref(), description.as_deref())
                .await?;
            print(Some("Updated"), &dun, cli.format);
        }
        Commands::Complete { id } => {
            let dun = service.set_completed(&id, true).await?;
            print(Some("Completed"), &dun, cli.format);
        }
        Commands::Activate { id } => {
            let dun = service.set_completed(&id, false).await?;
            print(Some("Activated"), &dun, cli.format);
        }
        Commands::ClearCompleted => {
            service.clear_completed().await?;
            println!("Cleared completed duns");
        }
        Commands::Delete { id } => {
            service.delete(&id).await?;
            println!("Deleted dun {}", id);
        }
        Commands::DeleteAll => {
            service.delete_all().await?;
            println!("Deleted all duns");
        }
        Commands::Stats { refresh } => {
            let stats = service.statistics(refresh).await?;
            print(None, &stats, cli.format);
        }
    }

    Ok(())
}

/// Prints a value, with an optional heading in pretty mode.
fn print<T: Serialize + PrettyFormat>(heading: Option<&str>, value: &T, format: OutputFormat) {
    if let (Some(heading), OutputFormat::Pretty) = (heading, format) {
        println!("{}:", heading);
    }
    println!("{}", format_output(value, format));
}

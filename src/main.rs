//! notify-hub CLI
//!
//! Routes one-off messages through the configured notification channels.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use notify_hub::budget::SpendingPlan;
use notify_hub::cli::{Cli, Commands};
use notify_hub::config::Config;
use notify_hub::notification::{DispatchError, Journal, NotificationBuilder};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    debug!(channels = ?config.channels, "Loaded configuration");

    match cli.command {
        Commands::Send {
            channel,
            message,
            dry_run,
        } => {
            let dispatcher = NotificationBuilder::from_config(&config)
                .dry_run(dry_run)
                .build();
            match dispatcher.send(&channel, &message) {
                Ok(()) => Ok(()),
                Err(DispatchError::UnknownChannel { channel }) => {
                    eprintln!(
                        "Unknown channel `{}`. Configured: {}",
                        channel,
                        config.channels.join(", ")
                    );
                    std::process::exit(1);
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Channels { json } => {
            let dispatcher = NotificationBuilder::from_config(&config).build();
            let names = dispatcher.channel_names();
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
            Ok(())
        }
        Commands::History { limit, json } => {
            let journal = Journal::new(config.journal_path());
            let records = journal.recent(limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No journaled deliveries.");
            } else {
                for record in records {
                    println!(
                        "{}  {:<6} {}",
                        record.ts.format("%Y-%m-%d %H:%M:%S"),
                        record.channel,
                        record.summary
                    );
                }
            }
            Ok(())
        }
        Commands::Budget {
            expense_type,
            income,
        } => {
            let plan = SpendingPlan::with_defaults();
            println!("{:.2}", plan.calculate(&expense_type, income));
            Ok(())
        }
    }
}

//! CLI argument definitions for the `nhub` binary

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nhub")]
#[command(about = "notify-hub - route messages through pluggable notification channels")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a message through one channel
    Send {
        /// Channel key (email, sms, push; case-insensitive)
        channel: String,
        /// Message text
        message: String,
        /// Resolve the channel but do not deliver
        #[arg(long)]
        dry_run: bool,
    },
    /// List the configured channels
    Channels {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent journaled deliveries
    History {
        /// Show the last N records
        #[arg(long, short, default_value = "10")]
        limit: usize,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a spending rule to an income figure
    Budget {
        /// Expense type (tithe, game, clothing; case-insensitive)
        expense_type: String,
        /// Income amount
        income: f64,
    },
}

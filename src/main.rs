mod commands;
mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use evently_core::{Evently, PeriodFilter, Recurrence};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Register locally and manage your personal events")]
struct Cli {
    /// Store user and events in this directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the local user (the password is always prompted)
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// 10-digit phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Create an event
    New {
        /// Event name (max 30 characters)
        name: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last date the event may occur on (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// single, daily, weekly, monthly or yearly
        #[arg(short, long)]
        recurrence: Option<Recurrence>,
    },
    /// List events starting today, this week, this month or this year
    List {
        /// today, week, month, year or all
        #[arg(short, long, default_value = "today")]
        filter: PeriodFilter,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show an event and its next occurrences
    Show {
        id: String,

        /// Number of occurrences to list (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Edit an event. Without field flags every field is prompted.
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), or "" to clear it
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        recurrence: Option<Recurrence>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the registered user
    Whoami,
    /// Show config and data paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = init_logging();

    let mut evently = Evently::load()?;
    if let Some(dir) = cli.data_dir {
        evently = evently.with_data_dir(dir);
    }
    apply_config_log_level(&log_handle, &evently.config().log_level);

    match cli.command {
        Commands::Register { name, email, phone } => {
            commands::register::run(&evently, name, email, phone).await
        }
        Commands::New {
            name,
            start,
            end,
            description,
            recurrence,
        } => {
            require_user(&evently).await?;
            let fields = commands::EventFields {
                name,
                description,
                start,
                end,
                recurrence,
            };
            commands::new::run(&evently, fields).await
        }
        Commands::List { filter, json } => {
            require_user(&evently).await?;
            commands::list::run(&evently, filter, json).await
        }
        Commands::Show { id, count, json } => {
            require_user(&evently).await?;
            commands::show::run(&evently, &id, count, json).await
        }
        Commands::Edit {
            id,
            name,
            start,
            end,
            description,
            recurrence,
        } => {
            require_user(&evently).await?;
            let fields = commands::EventFields {
                name,
                description,
                start,
                end,
                recurrence,
            };
            commands::edit::run(&evently, &id, fields).await
        }
        Commands::Delete { id, yes } => {
            require_user(&evently).await?;
            commands::delete::run(&evently, &id, yes).await
        }
        Commands::Whoami => commands::whoami::run(&evently).await,
        Commands::Config => commands::config::run(&evently),
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `warn` until the config is loaded.
fn init_logging() -> reload::Handle<EnvFilter, Registry> {
    let initial = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (filter_layer, handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    handle
}

/// Switch to the configured log level unless `RUST_LOG` was given.
fn apply_config_log_level(handle: &reload::Handle<EnvFilter, Registry>, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }

    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(_) => tracing::warn!(level = %level, "Invalid log level in config, keeping warn"),
    }
}

async fn require_user(evently: &Evently) -> Result<()> {
    if evently.users().load().await?.is_none() {
        anyhow::bail!(
            "No user registered.\n\n\
            Register first with:\n  \
            evently register"
        );
    }

    Ok(())
}

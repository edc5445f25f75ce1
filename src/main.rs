use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use linkdash::AppError;
use linkdash::cli;
use linkdash::config::{self, Config};
use linkdash::domain::filters::Period;

/// Terminal dashboard for your URL shortener.
#[derive(Parser)]
#[command(name = "linkdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store a session token
    Login {
        /// Email address (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Create an account
    Register,

    /// Forget the stored session token
    Logout,

    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show the analytics overview
    Analytics {
        /// Limit to one short code
        #[arg(short, long)]
        url: Option<String>,

        /// Derive the date range from a period ending today: day, week, month or year
        #[arg(short, long)]
        period: Option<Period>,

        /// Range start (YYYY-MM-DD); overrides --period
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Range end (YYYY-MM-DD); overrides --period
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show detailed statistics for one short code
    Stats {
        /// The short code to inspect
        code: String,
    },

    /// Account settings
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List your links
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short = 'n', long, default_value_t = 10)]
        limit: u32,
    },

    /// Shorten a URL
    Add {
        /// The URL to shorten
        url: String,
    },

    /// Update a link's target URL or short code
    Edit {
        /// Link id (see `links list`)
        id: i64,

        /// New target URL
        #[arg(short, long)]
        url: String,

        /// New custom short code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Rm {
        /// Link id to delete
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Change the account password
    ChangePassword,

    /// Permanently delete the account and all its data
    DeleteAccount {
        /// Skip confirmation prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    if let Err(err) = run(args, &config).await {
        // Expected failures render as a single dismissible line; anything
        // else keeps its full context chain.
        match err.downcast_ref::<AppError>() {
            Some(app_err) => eprintln!("{} {}", "✗".red().bold(), app_err.to_string().red()),
            None => eprintln!("{} {err:#}", "✗".red().bold()),
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Cli, config: &Config) -> Result<()> {
    match args.command {
        Commands::Login { email } => cli::auth::login(config, email).await,
        Commands::Register => cli::auth::register(config).await,
        Commands::Logout => cli::auth::logout(config),
        Commands::Links { action } => match action {
            LinkAction::List { page, limit } => cli::links::list(config, page, limit).await,
            LinkAction::Add { url } => cli::links::add(config, url).await,
            LinkAction::Edit { id, url, code } => cli::links::edit(config, id, url, code).await,
            LinkAction::Rm { id, yes } => cli::links::remove(config, id, yes).await,
        },
        Commands::Analytics {
            url,
            period,
            from,
            to,
        } => cli::analytics::overview(config, url, period, from, to).await,
        Commands::Stats { code } => cli::analytics::link_detail(config, code).await,
        Commands::Profile { action } => match action {
            ProfileAction::ChangePassword => cli::profile::change_password(config).await,
            ProfileAction::DeleteAccount { yes } => {
                cli::profile::delete_account(config, yes).await
            }
        },
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

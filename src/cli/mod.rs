pub mod api_client;
mod commands;
pub mod error;
mod logging;
mod render;
mod utils;

#[cfg(test)]
mod test_server;

use std::time::Duration;

use clap::{CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tokio::io::BufReader;

use crate::users::{SortField, SortOrder};
use commands::list::ListArgs;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Browse a paginated user directory", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: ROSTER_API_URL env or https://dummyjson.com)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = api_client::DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of users.
    ///
    /// Filters and sort apply to the records of the fetched page only; the
    /// page count always follows the server total.
    List {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Keep only users with exactly this gender
        #[arg(long)]
        gender: Option<String>,
        /// Keep only users with exactly this country
        #[arg(long)]
        country: Option<String>,
        /// Sort field (id, name, age, gender)
        #[arg(long)]
        sort: Option<SortField>,
        /// Sort order (asc or desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,
        /// Keep server order
        #[arg(long, conflicts_with = "sort")]
        unsorted: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Page through users interactively (type `help` at the prompt)
    Browse {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // reqwest is built without a bundled crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let api_client =
        api_client::ApiClient::new(cli.api_url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Some(Commands::List {
            page,
            gender,
            country,
            sort,
            order,
            unsorted,
            format,
        }) => {
            let args = ListArgs {
                page,
                gender: gender.as_deref(),
                country: country.as_deref(),
                sort,
                order,
                unsorted,
            };
            let output = commands::list::list_users(api_client, args, &format).await?;
            println!("{}", output);
        }
        Some(Commands::Browse { format }) => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            commands::browse::browse(api_client, stdin, &mut stdout, &format).await?;
        }
        None => {
            // Show help when no command provided
            Cli::command().print_help().into_diagnostic()?;
        }
    }

    Ok(())
}

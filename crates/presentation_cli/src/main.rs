//! TaxiCall CLI
//!
//! Terminal front end for calling a taxi and managing the user's profile.

#![allow(clippy::print_stdout)]

mod render;
mod session;
mod wiring;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::{NewAddress, NewProtector};
use infrastructure::{AppConfig, init_logging};

/// TaxiCall CLI
#[derive(Parser)]
#[command(name = "taxicall")]
#[command(author, version, about = "Call a taxi from the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "TAXICALL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a taxi to a destination and wait for the assignment
    ///
    /// Example: taxicall call "인천광역시 남동구 예술로 100"
    Call {
        /// Destination address
        destination: String,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive call screen
    Session,

    /// Profile ("my info") commands
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the signed-in user's profile
    Show,

    /// Register an additional address
    AddAddress {
        /// Label, e.g. "집"
        #[arg(long)]
        name: String,

        /// Road-name address
        #[arg(long)]
        road: String,

        /// Unit / floor details
        #[arg(long, default_value = "")]
        detail: String,
    },

    /// Register an additional protector
    AddProtector {
        /// Protector's name
        #[arg(long)]
        name: String,

        /// Protector's email
        #[arg(long)]
        email: String,
    },

    /// List entries registered from this client
    Entries,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration (secrets omitted)
    Show,

    /// Validate the effective configuration
    Check,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    let mut logging = config.logging.clone();
    if cli.verbose > 0 {
        logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_logging(&logging)?;

    match cli.command {
        Commands::Call { destination, json } => call(&config, destination, json).await?,

        Commands::Session => session::run(wiring::call_screen(&config)?).await?,

        Commands::Profile { command } => profile(&config, command).await?,

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("{}", toml::to_string_pretty(&config)?);
            },
            ConfigCommands::Check => match config.validate() {
                Ok(()) => println!("✅ Configuration is valid"),
                Err(problems) => {
                    for problem in &problems {
                        println!("❌ {problem}");
                    }
                    anyhow::bail!("{} configuration problem(s)", problems.len());
                },
            },
        },
    }

    Ok(())
}

/// Run one search, echoing status updates as they are published
async fn call(config: &AppConfig, destination: String, json: bool) -> anyhow::Result<()> {
    let mut screen = wiring::call_screen(config)?;
    screen.set_destination(destination);

    let mut updates = screen.service().subscribe();
    let outcome = {
        let submit = screen.submit();
        tokio::pin!(submit);
        loop {
            tokio::select! {
                outcome = &mut submit => break outcome,
                Ok(()) = updates.changed(), if !json => {
                    let state = updates.borrow_and_update().clone();
                    if let Some(line) = render::timestamped_status(&state) {
                        println!("{line}");
                    }
                },
            }
        }
    };

    let state = screen.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("\n{}", render::render_state(&state));
    }

    outcome.map(|_| ()).map_err(anyhow::Error::from)
}

async fn profile(config: &AppConfig, command: ProfileCommands) -> anyhow::Result<()> {
    let service = wiring::profile_service(config)?;

    match command {
        ProfileCommands::Show => {
            let profile = service.fetch_profile().await?;
            println!("{}", render::render_profile(&profile));
        },
        ProfileCommands::AddAddress { name, road, detail } => {
            let entries = service
                .add_address(NewAddress {
                    address_name: name,
                    road_address: road,
                    detail_address: detail,
                })
                .await?;
            println!("✅ 주소지가 추가되었습니다.\n{}", render::render_entries(&entries));
        },
        ProfileCommands::AddProtector { name, email } => {
            let entries = service
                .add_protector(NewProtector {
                    protector_name: name,
                    protector_email: email,
                })
                .await?;
            println!("✅ 보호자가 추가되었습니다.\n{}", render::render_entries(&entries));
        },
        ProfileCommands::Entries => {
            let entries = service.new_entries().await?;
            println!("{}", render::render_entries(&entries));
        },
    }

    Ok(())
}

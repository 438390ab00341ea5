//! Command-line front-end for the simroom simulator model.
//!
//! Builds [`Simulator`] values from the raw fields `simctl` reports and prints
//! how they are classified. Nothing here talks to `simctl` itself.
//!
//! # Usage
//!
//! ```bash
//! # Classify a simulator by name
//! simroom describe "iPad Air (5th generation)" --state Shutdown
//!
//! # Use an explicit hardware model
//! simroom describe "Kiosk" --model com.apple.ipad-mini-6-1 --udid 9A1F3C2E
//!
//! # Map a raw simctl status string
//! simroom state ShuttingDown
//!
//! # Sort names the way the simulator list does
//! simroom sort "iPhone 15" "Apple TV" "iPad mini"
//!
//! # JSON output
//! simroom -f json describe "Apple Watch Series 9 (45mm)"
//!
//! # Pin the default simulator
//! simroom config set-default-udid A1B2C3D4-E5F6-7890-ABCD-EF1234567890
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use simroom_core::config::{ConfigError, SimroomConfig};
use simroom_core::simulator::{DeviceType, Platform, Simulator, State};
use simroom_core::type_identifier::TypeIdentifier;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect how simulators are classified.
#[derive(Parser)]
#[command(name = "simroom")]
#[command(about = "Classify Apple simulators by platform, state and icon")]
#[command(version)]
struct Cli {
    /// Output format: text or json
    #[arg(short, long, default_value = "text", env = "SIMROOM_FORMAT")]
    format: OutputFormat,

    /// Config file to use instead of ~/.simroom/config.json
    #[arg(long, env = "SIMROOM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Build a simulator and print its derived fields
    Describe {
        /// The simulator's display name
        name: String,
        /// Device UDID (defaults to the configured UDID, else "booted")
        #[arg(short, long)]
        udid: Option<String>,
        /// Raw simctl status string, e.g. Booted
        #[arg(short, long)]
        state: Option<String>,
        /// Hardware model type identifier, e.g. com.apple.ipad-mini-6-1
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Map a raw simctl status string to a state
    State {
        /// The status string
        raw: String,
    },

    /// Print simulator names in sorted order
    Sort {
        /// Names to sort
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List platforms and their display names
    Platforms,

    /// Show or change the persistent configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the UDID used when none is given
    SetDefaultUdid {
        udid: String,
    },
    /// Remove the configured default UDID
    ClearDefaultUdid,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Output(serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Config(_) => ExitCode::from(2),
            CliError::Output(_) => ExitCode::from(1),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "config: {}", e),
            CliError::Output(e) => write!(f, "output: {}", e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

fn load_config(path: Option<&PathBuf>) -> SimroomConfig {
    match path {
        Some(path) => SimroomConfig::load_from(path),
        None => SimroomConfig::load(),
    }
}

fn save_config(config: &SimroomConfig, path: Option<&PathBuf>) -> Result<(), ConfigError> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.format == OutputFormat::Json;
    let config_path = cli.config.as_ref();

    match cli.command {
        Command::Describe { name, udid, state, model } => {
            let udid = match udid {
                Some(udid) => udid,
                None => load_config(config_path).default_udid_or_booted().to_string(),
            };
            let device_type = model.map(|model| DeviceType {
                name: name.clone(),
                identifier: String::new(),
                product_family: None,
                model_type_identifier: Some(TypeIdentifier::new(model)),
            });
            let sim = Simulator::new(
                name,
                udid,
                State::from_device_state(state.as_deref()),
                None,
                device_type,
            );
            debug!(udid = sim.udid(), platform = ?sim.platform(), "described simulator");

            if json {
                println!("{}", serde_json::to_string_pretty(&sim)?);
            } else {
                print_simulator(&sim);
            }
        }

        Command::State { raw } => {
            let state = State::from_device_state(Some(&raw));
            if json {
                println!("{}", serde_json::json!({ "raw": raw, "state": state }));
            } else {
                println!("{}", state);
            }
        }

        Command::Sort { names } => {
            let mut sims: Vec<Simulator> = names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Simulator::new(name, i.to_string(), State::Unknown, None, None))
                .collect();
            sims.sort();

            if json {
                let names: Vec<&str> = sims.iter().map(|s| s.name()).collect();
                println!("{}", serde_json::to_string(&names)?);
            } else {
                for sim in &sims {
                    println!("{}", sim.name());
                }
            }
        }

        Command::Platforms => {
            if json {
                let list: Vec<serde_json::Value> = Platform::ALL
                    .iter()
                    .map(|p| serde_json::json!({ "platform": p, "display_name": p.display_name() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for platform in Platform::ALL {
                    println!("{}", platform.display_name());
                }
            }
        }

        Command::Config { action } => {
            let mut config = load_config(config_path);
            match action {
                ConfigAction::Show => {}
                ConfigAction::SetDefaultUdid { udid } => {
                    config.default_udid = Some(udid);
                    save_config(&config, config_path)?;
                }
                ConfigAction::ClearDefaultUdid => {
                    config.default_udid = None;
                    save_config(&config, config_path)?;
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("default_udid: {}", config.default_udid.as_deref().unwrap_or("(none)"));
            }
        }
    }

    Ok(())
}

fn print_simulator(sim: &Simulator) {
    println!("name:            {}", sim.name());
    println!("udid:            {}", sim.udid());
    println!("state:           {}", sim.state());
    println!("platform:        {}", sim.platform());
    println!("type identifier: {}", sim.type_identifier());
    println!("icon:            {}", sim.image().symbol_name());
}

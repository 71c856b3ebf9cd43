mod api;
mod config;
mod consts;
mod content;
mod environment;
mod error_classifier;
mod events;
mod greeting;
mod loader;
mod logging;
mod quiz;
mod rewards;
mod ui;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::sync::Arc;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the academy dashboard
    Start,
    /// Store an API token for authenticated sessions.
    Login {
        /// API token issued for your subscription account.
        #[arg(long, value_name = "TOKEN")]
        token: String,
    },
    /// Clear the session configuration and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let academy_environment_str = std::env::var("ACADEMY_ENVIRONMENT").unwrap_or_default();
    let environment = academy_environment_str
        .parse::<Environment>()
        .unwrap_or_default();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start => start(environment, &config_path).await,
        Command::Login { token } => {
            if token.trim().is_empty() {
                return Err(Box::from("Token must not be empty."));
            }
            let config = Config::new(token);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Login token saved to {}", config_path.display());
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing session configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the academy TUI application.
///
/// # Arguments
/// * `env` - The environment to connect to.
/// * `config_path` - Location of the session configuration file.
async fn start(env: Environment, config_path: &Path) -> Result<(), Box<dyn Error>> {
    // An existing session token is used when available; the API serves
    // public module listings without one.
    let api_token = Config::load_from_file(config_path)
        .ok()
        .map(|config| config.api_token);
    let client = ApiClient::new(env.clone(), api_token)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(Arc::new(client), env);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

//! Terminal control panel for a local voice-conversation lab

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use voicelab_panel::{App, Client, Config, tui};

/// Terminal control panel for a local voice-conversation lab
#[derive(Parser)]
#[command(name = "voicelab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the lab server base URL from the config file
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the model catalog and print it
    Models,
}

fn main() -> Result<()> {
    let log_path = voicelab_panel::paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f /tmp/voicelab.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_dir = log_path.parent().map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(log_dir, "voicelab.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            Config::default()
        }
    };

    if let Some(url) = cli.server_url {
        config.server_url = url;
    }

    let client = Client::new(&config.server_url, config.request_timeout());

    match cli.command {
        Some(Commands::Models) => cmd_models(&client),
        None => {
            let app = App::new(config);
            tui::run(app, client)
        }
    }
}

fn cmd_models(client: &Client) -> Result<()> {
    let models = client.fetch_models()?;

    if models.is_empty() {
        println!("No models available.");
        return Ok(());
    }

    for model in models {
        println!("{}\t{}", model.id, model.display_name);
    }
    Ok(())
}

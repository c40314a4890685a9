use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use discogs_cli::cli::{
    handle_backup_command, handle_backup_show_command, handle_config_command,
    handle_export_command, handle_restore_command, handle_show_command, BackupArgs,
    BackupShowArgs, ConfigArgs, ExportArgs, RestoreArgs, ShowArgs,
};
use discogs_cli::config::{CliPaths, Settings};
use discogs_cli::display::error_line;

#[derive(Parser)]
#[command(
    name = "discogs",
    version,
    about = "Back up, inspect and restore a Discogs collection",
    long_about = "Fetches a Discogs collection, prints it as a table, saves it \
                  to a JSON backup and adds missing releases back from a backup."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Maximum number of pages fetched per collection
    #[arg(long, global = true)]
    max_pages: Option<u32>,

    /// API root URL
    #[arg(long, global = true, env = "DISCOGS_API_URL", hide = true)]
    api_url: Option<String>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "DISCOGS_CLI_CONFIG_DIR", hide = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the live collection as a table
    Show(ShowArgs),

    /// Print a backup file as a table
    #[command(name = "backup_show", alias = "backup-show")]
    BackupShow(BackupShowArgs),

    /// Add releases from a backup that are missing from the live collection
    Restore(RestoreArgs),

    /// Save a user's collection to a JSON file
    Backup(BackupArgs),

    /// Export a backup file as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&format!("ERROR: {:#}", err)));
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = CliPaths::resolve(cli.config_dir)?;
    let settings = Settings::load_or_default(&paths)
        .context("Failed to load settings")?
        .with_overrides(cli.api_url, cli.max_pages);

    match cli.command {
        Commands::Show(args) => handle_show_command(&settings, args)?,
        Commands::BackupShow(args) => handle_backup_show_command(args)?,
        Commands::Restore(args) => handle_restore_command(&settings, args)?,
        Commands::Backup(args) => handle_backup_command(&settings, args)?,
        Commands::Export(args) => handle_export_command(args)?,
        Commands::Config(args) => handle_config_command(&paths, &settings, args)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "discogs_cli=warn",
        1 => "discogs_cli=info",
        _ => "discogs_cli=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

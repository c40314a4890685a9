//! `backup` command

use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use crate::api::DiscogsClient;
use crate::backup::{default_file_name, write_backup};
use crate::config::Settings;
use crate::display::success_line;
use crate::error::DiscogsResult;
use crate::services::CollectionService;

/// Arguments of `backup`
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// User whose collection is saved
    #[arg(short = 'u', long)]
    pub user_name: String,

    /// Destination file [default: discogs_<user>-<YYYY-MM-DD>.json]
    #[arg(short = 'f', long)]
    pub file_name: Option<PathBuf>,

    /// Personal access token, needed for private collections
    #[arg(short = 't', long, env = "BOT_TOKEN", hide_env_values = true)]
    pub user_token: Option<String>,
}

/// Fetch a user's whole collection and save it
///
/// Nothing is written unless every page was fetched.
pub fn handle_backup_command(settings: &Settings, args: BackupArgs) -> DiscogsResult<()> {
    let token = args.user_token.or_else(|| settings.user_token.clone());
    let client = DiscogsClient::new(settings, token)?;

    let document =
        CollectionService::new(&client, settings.max_pages).fetch_collection(&args.user_name)?;

    let path = args
        .file_name
        .unwrap_or_else(|| default_file_name(args.user_name.trim(), Local::now().date_naive()));
    write_backup(&document, &path)?;

    println!(
        "{}",
        success_line(&format!("Backup successfully saved to {}", path.display()))
    );
    Ok(())
}

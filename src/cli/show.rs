//! Table commands: `show` and `backup_show`

use clap::Args;
use std::path::PathBuf;

use crate::api::DiscogsClient;
use crate::backup::load_backup;
use crate::config::Settings;
use crate::display::format_release_table;
use crate::error::DiscogsResult;
use crate::services::CollectionService;

/// Arguments of `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Personal access token
    #[arg(short = 'u', long, env = "BOT_TOKEN", hide_env_values = true)]
    pub user_token: Option<String>,
}

/// Arguments of `backup_show`
#[derive(Args, Debug)]
pub struct BackupShowArgs {
    /// Backup file to display
    #[arg(short = 'f', long)]
    pub file_name: PathBuf,
}

/// Print the token owner's live collection
pub fn handle_show_command(settings: &Settings, args: ShowArgs) -> DiscogsResult<()> {
    let token = settings.resolve_token(args.user_token)?;
    let client = DiscogsClient::new(settings, Some(token))?;

    let (_, collection) =
        CollectionService::new(&client, settings.max_pages).fetch_own_collection()?;

    println!("{}", format_release_table(&collection.releases));
    Ok(())
}

/// Print a backup file
pub fn handle_backup_show_command(args: BackupShowArgs) -> DiscogsResult<()> {
    let backup = load_backup(&args.file_name)?;
    println!("{}", format_release_table(&backup.releases));
    Ok(())
}

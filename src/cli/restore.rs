//! `restore` command

use clap::Args;
use std::path::PathBuf;

use crate::api::DiscogsClient;
use crate::backup::load_backup;
use crate::config::Settings;
use crate::display::{already_in_collection, warning_line};
use crate::error::DiscogsResult;
use crate::services::{RestoreOptions, RestoreOutcome, RestoreService};

/// Arguments of `restore`
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Personal access token of the collection to restore into
    #[arg(short = 'u', long, env = "BOT_TOKEN", hide_env_values = true)]
    pub user_token: Option<String>,

    /// Backup file to restore from
    #[arg(short = 'f', long)]
    pub file_name: PathBuf,

    /// Keep adding releases after a failed add instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Only list the releases that would be added
    #[arg(long)]
    pub dry_run: bool,
}

/// Add every backup release missing from the live collection
pub fn handle_restore_command(settings: &Settings, args: RestoreArgs) -> DiscogsResult<()> {
    // Read the backup before touching the network
    let backup = load_backup(&args.file_name)?;

    let token = settings.resolve_token(args.user_token)?;
    let client = DiscogsClient::new(settings, Some(token))?;

    let options = RestoreOptions {
        keep_going: args.keep_going,
        dry_run: args.dry_run,
    };
    let service = RestoreService::new(&client, settings.max_pages, options);

    let report = service.restore(&backup, print_outcome)?;

    println!("{}", report.summary());
    Ok(())
}

fn print_outcome(outcome: &RestoreOutcome) {
    match outcome {
        RestoreOutcome::AlreadyPresent { title, .. } => {
            println!("{}", warning_line(&already_in_collection(title)));
        }
        RestoreOutcome::Added { id, title } => {
            println!("Added \"{}\" (release {})", title, id);
        }
        RestoreOutcome::WouldAdd { id, title } => {
            println!("Would add \"{}\" (release {})", title, id);
        }
        RestoreOutcome::Failed { id, title, error } => {
            eprintln!(
                "{}",
                warning_line(&format!("Failed to add \"{}\" (release {}): {}", title, id, error))
            );
        }
    }
}

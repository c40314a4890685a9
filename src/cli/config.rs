//! `config` command

use clap::Args;

use crate::config::{CliPaths, Settings};
use crate::error::DiscogsResult;

/// Arguments of `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a settings file with the current values if none exists yet
    #[arg(long)]
    pub init: bool,
}

/// Show the resolved configuration
pub fn handle_config_command(
    paths: &CliPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> DiscogsResult<()> {
    if args.init {
        if paths.settings_file().exists() {
            println!("Settings file already exists: {}", paths.settings_file().display());
        } else {
            settings.save(paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        println!();
    }

    println!("discogs-cli Configuration");
    println!("=========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  API URL:    {}", settings.api_base_url);
    println!("  User agent: {}", settings.user_agent);
    println!("  Max pages:  {}", settings.max_pages);
    println!("  User token: {}", settings.masked_token());

    Ok(())
}

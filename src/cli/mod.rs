//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod config;
pub mod export;
pub mod restore;
pub mod show;

pub use backup::{handle_backup_command, BackupArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use restore::{handle_restore_command, RestoreArgs};
pub use show::{handle_backup_show_command, handle_show_command, BackupShowArgs, ShowArgs};

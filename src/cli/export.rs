//! `export` command

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::backup::load_backup;
use crate::error::{DiscogsError, DiscogsResult};
use crate::export::{export_releases_csv, export_releases_json, export_releases_yaml};
use crate::models::ReleaseRecord;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One line per release
    Csv,
    /// Pretty-printed JSON with export metadata
    Json,
    /// Human-readable YAML
    Yaml,
}

/// Arguments of `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Backup file to export
    #[arg(short = 'f', long)]
    pub file_name: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Re-emit a backup's releases in another format
pub fn handle_export_command(args: ExportArgs) -> DiscogsResult<()> {
    let backup = load_backup(&args.file_name)?;

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                DiscogsError::Export(format!("Failed to create file {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(args.format, &backup.releases, &mut writer)?;
            writer
                .flush()
                .map_err(|e| DiscogsError::Export(e.to_string()))?;
            println!(
                "Exported {} release(s) to: {}",
                backup.len(),
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(args.format, &backup.releases, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    format: ExportFormat,
    releases: &[ReleaseRecord],
    writer: &mut W,
) -> DiscogsResult<()> {
    match format {
        ExportFormat::Csv => export_releases_csv(releases, writer),
        ExportFormat::Json => export_releases_json(releases, writer),
        ExportFormat::Yaml => export_releases_yaml(releases, writer),
    }
}

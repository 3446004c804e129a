//! Command-line interface exporting XC share data to KML.
#![forbid(unsafe_code)]

use std::io::BufWriter;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use xctransfer_core::{
    Document, ExportSummary, Pipeline, PipelineError, SqliteHuntStore, write_document,
};

mod error;

pub use error::CliError;

const ARG_INPUT: &str = "input";
const ARG_OUTPUT: &str = "output";

/// Run the CLI with the current process arguments.
pub fn run() -> Result<ExportOutcome, CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    run_export(cli)
}

/// Export the database named by `cli` into the next numbered KML file.
///
/// The whole document is built before the output file is created, so a
/// database failure never leaves a file behind.
pub fn run_export(cli: Cli) -> Result<ExportOutcome, CliError> {
    let config = ExportConfig::try_from(cli)?;
    config.validate_sources()?;

    let path = xctransfer_fs::next_output_path(&config.output_dir).map_err(|source| {
        CliError::ScanOutputDirectory {
            path: config.output_dir.clone(),
            source,
        }
    })?;
    info!("Input: {}", config.input);
    info!("Output: {path}");

    info!("Make KML...");
    let pipeline = Pipeline::new(SqliteHuntStore::open(config.input.as_std_path())?);
    let document = pipeline.build_document()?;
    let summary = write_export(&document, &path)?;

    info!("KML file saved in: {path}");
    Ok(ExportOutcome { path, summary })
}

fn write_export(document: &Document, path: &Utf8Path) -> Result<ExportSummary, CliError> {
    let file = xctransfer_fs::create_new_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_document(document, &mut writer).map_err(|err| match err {
        PipelineError::Store(source) => CliError::Store(source),
        PipelineError::Write(source) => CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "xctransfer",
    about = "Export geohunt routes, waypoints and findpoints from a ShareData file to KML",
    version
)]
pub struct Cli {
    /// Input ShareData file (usually under `%APPDATA%\XChange2\Share\ShareData`).
    #[arg(short = 'i', long = ARG_INPUT, value_name = "path")]
    pub input: Option<Utf8PathBuf>,
    /// Output directory for the numbered KML file.
    #[arg(short = 'o', long = ARG_OUTPUT, value_name = "dir")]
    pub output: Option<Utf8PathBuf>,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Path of the written KML file.
    pub path: Utf8PathBuf,
    /// Placemark counts of the written document.
    pub summary: ExportSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExportConfig {
    input: Utf8PathBuf,
    output_dir: Utf8PathBuf,
}

impl ExportConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match xctransfer_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<Cli> for ExportConfig {
    type Error = CliError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let input = cli.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            short: 'i',
            what: "the input ShareData file",
        })?;
        let output_dir = cli.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            short: 'o',
            what: "the output directory",
        })?;
        Ok(Self { input, output_dir })
    }
}

#[cfg(test)]
mod tests;

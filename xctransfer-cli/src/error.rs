//! Error types emitted by the xctransfer CLI.

use camino::Utf8PathBuf;
use thiserror::Error;
use xctransfer_core::{KmlWriteError, StoreError};

/// Errors emitted by the xctransfer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// A required flag was not supplied.
    #[error("please specify {what} with option -{short} (--{field})")]
    MissingArgument {
        field: &'static str,
        short: char,
        what: &'static str,
    },
    /// The input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Listing the output directory to number the export failed.
    #[error("failed to scan output directory {path:?}: {source}")]
    ScanOutputDirectory {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the share-data database failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Creating the output file failed.
    #[error("failed to create KML file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the output file failed.
    #[error("failed to write KML file {path:?}: {source}")]
    WriteOutput {
        path: Utf8PathBuf,
        #[source]
        source: KmlWriteError,
    },
}

impl CliError {
    /// Whether the error is a usage mistake rather than a runtime failure.
    ///
    /// Usage mistakes are reported but the process still exits successfully.
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }
}

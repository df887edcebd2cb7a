//! Error types emitted by the Park Picks CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use parkpicks_scorer::{RecommendError, RuleWeightsError};
use thiserror::Error;

/// Errors emitted by the Park Picks CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The number of picks to print was zero.
    #[error("--{field} must be at least 1")]
    ZeroPicks {
        /// Name of the offending option.
        field: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening the recommendation request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The request carried unusable rule weights.
    #[error("invalid rule weights: {0}")]
    InvalidWeights(#[from] RuleWeightsError),
    /// Loading or ranking rides failed.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

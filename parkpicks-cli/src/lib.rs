//! Command-line interface for the Park Picks recommender.
//!
//! `recommend` scores a park's open rides against a visitor profile and
//! prints the top picks as JSON. `lands` lists a park's lands for building a
//! location picker, and `audit` reports one-way adjacency edges in the
//! built-in topology.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod catalogue;
mod error;
mod recommend;

pub use error::CliError;
pub use recommend::RecommendRequest;

use catalogue::{LandsArgs, run_audit, run_lands};
use recommend::{RecommendArgs, run_recommend};

const ARG_RECOMMEND_REQUEST: &str = "request";
const ARG_RECOMMEND_FEED_DIR: &str = "feed-dir";
const ARG_RECOMMEND_TOP: &str = "top";
const ENV_RECOMMEND_REQUEST: &str = "PARKPICKS_CMDS_RECOMMEND_REQUEST_PATH";
const ENV_RECOMMEND_FEED_DIR: &str = "PARKPICKS_CMDS_RECOMMEND_FEED_DIR";

/// Run the Park Picks CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, or the command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend(args, writer),
        Command::Lands(args) => run_lands(&args, writer),
        Command::Audit => run_audit(writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "parkpicks",
    about = "Personalised theme-park ride recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a park's open rides for a visitor.
    Recommend(RecommendArgs),
    /// List the lands of a park in map order.
    Lands(LandsArgs),
    /// Report one-way adjacency edges in the built-in topology.
    Audit,
}

fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

//! `lands` and `audit` commands: read-only views of the built-in catalogue.

use std::io::Write;

use clap::Parser;
use parkpicks_core::Park;
use parkpicks_data::park_topology;
use serde::Serialize;

use crate::{CliError, write_json};

/// CLI arguments for the `lands` subcommand.
#[derive(Debug, Clone, Parser)]
pub(crate) struct LandsArgs {
    /// Park name or slug, for example "Disneyland" or "magic-kingdom".
    #[arg(value_name = "park")]
    pub(crate) park: Park,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AuditFinding {
    park: Park,
    from: String,
    to: String,
}

pub(crate) fn run_lands(args: &LandsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let topology = park_topology(args.park);
    let lands: Vec<&str> = topology.lands().collect();
    write_json(writer, &lands)
}

pub(crate) fn run_audit(writer: &mut dyn Write) -> Result<(), CliError> {
    let findings: Vec<AuditFinding> = parkpicks_data::builtin_topology()
        .asymmetries()
        .into_iter()
        .map(|(park, asymmetry)| AuditFinding {
            park,
            from: asymmetry.from,
            to: asymmetry.to,
        })
        .collect();
    write_json(writer, &findings)
}

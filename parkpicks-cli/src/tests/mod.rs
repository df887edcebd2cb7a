//! Shared test harness modules for the Park Picks CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod catalogue_unit;
mod helpers;

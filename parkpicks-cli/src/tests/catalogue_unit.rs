//! Unit tests for the `lands` and `audit` commands.

use super::*;
use rstest::rstest;

fn run_command(argv: &[&str]) -> serde_json::Value {
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let mut buffer = Vec::new();
    dispatch(cli.command, &mut buffer).expect("command should succeed");
    serde_json::from_slice(&buffer).expect("JSON output")
}

#[rstest]
#[case("magic-kingdom", "Main Street, U.S.A.", 6)]
#[case("Epcot", "American Adventure Pavilion", 8)]
#[case("disney california adventure", "Buena Vista Street", 8)]
fn lands_are_listed_in_map_order(
    #[case] park: &str,
    #[case] first: &str,
    #[case] count: usize,
) {
    let output = run_command(&["parkpicks", "lands", park]);
    let lands = output.as_array().expect("land array");
    assert_eq!(lands.len(), count);
    assert_eq!(lands.first().and_then(serde_json::Value::as_str), Some(first));
}

#[rstest]
fn unknown_parks_are_rejected_by_clap() {
    let err = Cli::try_parse_from(["parkpicks", "lands", "Legoland"])
        .expect_err("unknown park should fail to parse");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn audit_reports_one_way_edges() {
    let output = run_command(&["parkpicks", "audit"]);
    assert_eq!(
        output,
        serde_json::json!([{
            "park": "Disneyland",
            "from": "Star Wars: Galaxy's Edge",
            "to": "Fantasyland",
        }])
    );
}

//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use parkpicks_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match parkpicks_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("parkpicks: {err}");
            std::process::exit(1);
        }
    }
}

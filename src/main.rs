use rawk::context::Environment;
use rawk::core;
use rawk::status::ExitStatus;
use tracing_subscriber::EnvFilter;

/// Filter directive for internal logging, e.g. `RAWK_LOG=rawk=debug`
const LOG_ENV: &str = "RAWK_LOG";

/// Entry point - sets up logging and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}

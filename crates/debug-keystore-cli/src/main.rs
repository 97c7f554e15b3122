mod cli;

use clap::Parser;
use color_eyre::{Report, Result};
use debug_keystore_core::{materialize, EnvSource, MaterializeError, Materialized, ProcessEnv};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Entry point: one materialization per process, non-zero exit on any failure.
fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let _cli = cli::Cli::parse();
    run(&ProcessEnv)?;
    Ok(())
}

fn init_tracing() {
    // Respect user-provided filters; stay quiet by default and keep stdout clean.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run<E: EnvSource>(env: &E) -> Result<Materialized> {
    materialize(env).map_err(|err| {
        let step = step_context(&err);
        Report::new(err).wrap_err(step)
    })
}

/// Names the step a failure came from, for the top line of the error report.
fn step_context(err: &MaterializeError) -> &'static str {
    match err {
        MaterializeError::MissingInput { .. } => "reading environment failed",
        MaterializeError::Decode { .. } => "decoding DEBUG_KEYSTORE failed",
        MaterializeError::Io { .. } => "writing debug keystore failed",
    }
}

//! This example resolves [`InvocationOptions`] from a configuration file, the environment and the
//! command line, then prints the resulting invocation
//!
//! ```text
//! cargo run --example inspect -- --file demos/inspect/options.toml --ack-timeout 2 --unit min
//! INVOCATION_EXPECT_RESULT=false cargo run --example inspect
//! ```
use std::path::PathBuf;

use clap::Parser;
use invocation::{
    configuration::DefaultConfigurationProvider, InvocationOptions,
    InvocationOptionsConfiguration, TimeUnit,
};
use tracing::info;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser, Clone)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Configuration file to read the options from
    #[clap(long)]
    file: Option<PathBuf>,

    /// Ack timeout, expressed in `unit`
    #[clap(long)]
    ack_timeout: Option<u64>,

    /// Result timeout, expressed in `unit`
    #[clap(long)]
    result_timeout: Option<u64>,

    /// Unit of the timeouts given on the command line
    #[clap(long, default_value = "s")]
    unit: TimeUnit,

    /// Do not wait for an acknowledgment
    #[clap(long)]
    no_ack: bool,

    /// Do not wait for the result
    #[clap(long)]
    no_result: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("INVOCATION_LOG"))
        .init();

    let opts = Opts::parse();

    let mut provider = DefaultConfigurationProvider::<InvocationOptionsConfiguration>::default();
    if let Some(file) = &opts.file {
        provider = provider.with_file(file);
    }

    let mut options = InvocationOptions::configure_with(&mut provider)?;
    if let Some(timeout) = opts.ack_timeout {
        options = options.expect_ack_within_unit(timeout, opts.unit);
    }
    if let Some(timeout) = opts.result_timeout {
        options = options.expect_result_within_unit(timeout, opts.unit);
    }
    if opts.no_ack {
        options = options.no_ack();
    }
    if opts.no_result {
        options = options.no_result();
    }
    options.validate()?;

    info!("{options} ({:?})", options.mode());
    println!("ack expected:    {}", options.is_ack_expected());
    println!("ack timeout:     {:?} ms", options.ack_timeout_millis());
    println!("result expected: {}", options.is_result_expected());
    println!("result timeout:  {:?} ms", options.result_timeout_millis());

    Ok(())
}

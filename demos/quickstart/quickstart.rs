//! This example demonstrates the different kinds of remote invocations that can be described with
//! [`InvocationOptions`] and the phases a dispatcher goes through for each of them
use invocation::{InvocationOptions, TimeUnit};
use tracing::info;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("INVOCATION_LOG"))
        .init();

    let examples = [
        // 1 second ack timeout and 30 seconds execution timeout
        ("defaults", InvocationOptions::defaults()),
        // no ack but 30 seconds execution timeout
        ("no ack", InvocationOptions::defaults().no_ack()),
        // 1 second ack timeout then forget the result
        ("no result", InvocationOptions::defaults().no_result()),
        // 1 minute ack timeout then forget about the result
        (
            "slow ack",
            InvocationOptions::defaults()
                .expect_ack_within_unit(1, TimeUnit::Minutes)
                .no_result(),
        ),
        // no ack and forget about the result
        (
            "fire and forget",
            InvocationOptions::defaults().no_ack().no_result(),
        ),
    ];

    for (name, options) in examples {
        options.validate()?;

        info!("{name}: {options} ({:?})", options.mode());
        for phase in options.phases() {
            info!("    wait up to {:?} for {}", phase.timeout, phase.phase);
        }
    }

    Ok(())
}

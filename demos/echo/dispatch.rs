//! This example invokes a simulated echo service with every kind of [`InvocationOptions`]
//!
//! The echo service acknowledges a request after 200ms and takes 2 seconds to execute it
use std::time::Duration;

use demos::{invoke, MemoryPeer, PeerBehavior};
use invocation::InvocationOptions;
use tracing::{error, info};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("INVOCATION_LOG"))
        .init();

    let peer = MemoryPeer::spawn(PeerBehavior {
        ack_delay: Duration::from_millis(200),
        execution_delay: Duration::from_secs(2),
    });

    let template = InvocationOptions::defaults();
    let invocations = [
        template,
        template.no_ack(),
        template.no_result(),
        template.no_ack().no_result(),
        template.expect_ack_within_millis(100),
        template.expect_result_within(Duration::from_secs(1)),
    ];

    for options in invocations {
        match invoke(&peer, "echo", options).await {
            Ok(outcome) => info!("{options}: {outcome:?}"),
            Err(e) => error!("{options}: {e}"),
        }
    }

    Ok(())
}

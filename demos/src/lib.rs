//! Shared components of the examples: an in-memory remote peer and a dispatcher that drives
//! remote invocations according to [`invocation::InvocationOptions`]
pub mod dispatch;
pub mod memory;

pub use dispatch::{invoke, InvokeError, Outcome};
pub use memory::{MemoryPeer, PeerBehavior, Request};

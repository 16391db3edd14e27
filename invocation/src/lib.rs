//! Invocation options for remote service calls
//!
//! An [`InvocationOptions`] tells a remote invocation dispatcher what to wait for once a request
//! has been handed to the transport: an acknowledgment of receipt from the remote peer, the
//! outcome of the remote execution, both, or neither.
//!
//! ```
//! use invocation::{InvocationMode, InvocationOptions, TimeUnit};
//!
//! // 1 second ack timeout and 30 seconds execution timeout
//! let options = InvocationOptions::defaults();
//! assert_eq!(options.mode(), InvocationMode::Full);
//!
//! // 1 minute ack timeout then forget about the result
//! let options = InvocationOptions::defaults()
//!     .expect_ack_within_unit(1, TimeUnit::Minutes)
//!     .no_result();
//! assert_eq!(options.ack_timeout_millis(), Some(60_000));
//!
//! // no ack and forget about the result (fire and forget)
//! let options = InvocationOptions::defaults().no_ack().no_result();
//! assert_eq!(options.mode(), InvocationMode::FireAndForget);
//! ```
pub mod configuration;
mod error;
mod options;
mod phase;
mod time_unit;

pub use configuration::{ConfigurationProvider, InvocationOptionsConfiguration};
pub use error::{BoxError, Error};
pub use options::{
    InvocationMode, InvocationOptions, DEFAULT_ACK_TIMEOUT, DEFAULT_RESULT_TIMEOUT,
};
pub use phase::{Phase, PhaseTimeout};
pub use time_unit::{ParseTimeUnitError, TimeUnit};

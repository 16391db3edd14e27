use thiserror::Error;

use crate::Phase;

/// Type-erased error returned by a [`crate::ConfigurationProvider`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can be raised when building [`crate::InvocationOptions`] from an external source
#[derive(Debug, Error)]
pub enum Error {
    /// An enabled phase was configured with a zero timeout.
    /// A zero timeout expires before the remote peer can ever answer
    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(Phase),

    /// The configuration provider failed to provide a configuration
    #[error("failed to load invocation options configuration: {0}")]
    Configuration(BoxError),
}

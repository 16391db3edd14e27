use std::{fmt, time::Duration};

/// A wait phase of a remote invocation
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Waiting for the remote peer to acknowledge receipt of the request
    Ack,

    /// Waiting for the outcome of the remote execution
    Result,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Ack => write!(f, "ack"),
            Phase::Result => write!(f, "result"),
        }
    }
}

/// A [`Phase`] a dispatcher must go through along with the maximum time it is allowed to wait
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PhaseTimeout {
    pub phase: Phase,
    pub timeout: Duration,
}

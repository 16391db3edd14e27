use std::{fmt, time::Duration};

use crate::{Error, Phase, PhaseTimeout, TimeUnit};

/// Default time to wait for the remote peer to acknowledge receipt of a request
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_secs(1);

/// Default time to wait for the outcome of a remote execution
pub const DEFAULT_RESULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Kind of remote invocation described by an [`InvocationOptions`]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InvocationMode {
    /// Wait for the acknowledgment, then for the result
    Full,

    /// Wait for the acknowledgment then forget about the result
    AckOnly,

    /// Do not wait for an acknowledgment but wait for the result
    ResultOnly,

    /// Wait for nothing
    FireAndForget,
}

/// Options used to tune how a remote invocation behaves in regard to the acknowledgment of the
/// request and the execution timeout
///
/// An absent timeout means that the corresponding exchange is skipped altogether: it does not
/// time out instantly, it never happens.
///
/// [`InvocationOptions`] is an immutable value. Every mutator consumes the options and returns
/// updated options, which makes it safe to start from a shared template:
///
/// ```
/// use std::time::Duration;
/// use invocation::InvocationOptions;
///
/// let template = InvocationOptions::defaults();
/// let quick = template.expect_result_within(Duration::from_secs(5));
///
/// assert_eq!(template.result_timeout(), Some(Duration::from_secs(30)));
/// assert_eq!(quick.result_timeout(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct InvocationOptions {
    ack_timeout: Option<Duration>,
    result_timeout: Option<Duration>,
}

impl InvocationOptions {
    /// Create options with opinionated defaults: a [`DEFAULT_ACK_TIMEOUT`] ack timeout and a
    /// [`DEFAULT_RESULT_TIMEOUT`] execution timeout
    pub const fn defaults() -> Self {
        Self {
            ack_timeout: Some(DEFAULT_ACK_TIMEOUT),
            result_timeout: Some(DEFAULT_RESULT_TIMEOUT),
        }
    }

    /// Wait up to `timeout` for the remote peer to acknowledge the request
    #[must_use]
    pub const fn expect_ack_within(mut self, timeout: Duration) -> Self {
        self.ack_timeout = Some(timeout);
        self
    }

    /// Wait up to `millis` milliseconds for the remote peer to acknowledge the request
    #[must_use]
    pub const fn expect_ack_within_millis(self, millis: u64) -> Self {
        self.expect_ack_within(Duration::from_millis(millis))
    }

    /// Wait up to `amount` `unit` for the remote peer to acknowledge the request
    #[must_use]
    pub const fn expect_ack_within_unit(self, amount: u64, unit: TimeUnit) -> Self {
        self.expect_ack_within(unit.duration(amount))
    }

    /// Do not request nor wait for an acknowledgment
    #[must_use]
    pub const fn no_ack(mut self) -> Self {
        self.ack_timeout = None;
        self
    }

    /// Wait up to `timeout` for the outcome of the remote execution
    #[must_use]
    pub const fn expect_result_within(mut self, timeout: Duration) -> Self {
        self.result_timeout = Some(timeout);
        self
    }

    /// Wait up to `millis` milliseconds for the outcome of the remote execution
    #[must_use]
    pub const fn expect_result_within_millis(self, millis: u64) -> Self {
        self.expect_result_within(Duration::from_millis(millis))
    }

    /// Wait up to `amount` `unit` for the outcome of the remote execution
    #[must_use]
    pub const fn expect_result_within_unit(self, amount: u64, unit: TimeUnit) -> Self {
        self.expect_result_within(unit.duration(amount))
    }

    /// Do not wait for the outcome of the remote execution.
    /// Combined with [`Self::no_ack`], this yields a fire and forget invocation
    #[must_use]
    pub const fn no_result(mut self) -> Self {
        self.result_timeout = None;
        self
    }

    /// Returns `true` if the caller expects the remote peer to acknowledge the request
    pub const fn is_ack_expected(&self) -> bool {
        self.ack_timeout.is_some()
    }

    /// Returns `true` if the caller expects the outcome of the remote execution
    pub const fn is_result_expected(&self) -> bool {
        self.result_timeout.is_some()
    }

    pub const fn ack_timeout(&self) -> Option<Duration> {
        self.ack_timeout
    }

    pub const fn result_timeout(&self) -> Option<Duration> {
        self.result_timeout
    }

    /// Ack timeout in milliseconds, `None` if no acknowledgment is expected
    pub fn ack_timeout_millis(&self) -> Option<u64> {
        self.ack_timeout.map(as_millis)
    }

    /// Execution timeout in milliseconds, `None` if no result is expected
    pub fn result_timeout_millis(&self) -> Option<u64> {
        self.result_timeout.map(as_millis)
    }

    /// Returns the timeout of the given `phase`, `None` if the phase is skipped
    pub const fn timeout(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Ack => self.ack_timeout,
            Phase::Result => self.result_timeout,
        }
    }

    pub const fn mode(&self) -> InvocationMode {
        match (self.is_ack_expected(), self.is_result_expected()) {
            (true, true) => InvocationMode::Full,
            (true, false) => InvocationMode::AckOnly,
            (false, true) => InvocationMode::ResultOnly,
            (false, false) => InvocationMode::FireAndForget,
        }
    }

    /// Returns the phases a dispatcher must wait for, in order.
    /// The [`Phase::Ack`] phase always comes before the [`Phase::Result`] phase
    pub fn phases(&self) -> impl Iterator<Item = PhaseTimeout> {
        let ack = self.ack_timeout.map(|timeout| PhaseTimeout {
            phase: Phase::Ack,
            timeout,
        });
        let result = self.result_timeout.map(|timeout| PhaseTimeout {
            phase: Phase::Result,
            timeout,
        });

        ack.into_iter().chain(result)
    }

    /// Make sure that every phase that will be waited for has a non-zero timeout
    pub fn validate(&self) -> Result<(), Error> {
        match self.phases().find(|p| p.timeout.is_zero()) {
            Some(p) => Err(Error::ZeroTimeout(p.phase)),
            None => Ok(()),
        }
    }
}

impl Default for InvocationOptions {
    fn default() -> Self {
        Self::defaults()
    }
}

impl fmt::Display for InvocationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ack_timeout {
            Some(timeout) => write!(f, "ack within {timeout:?}")?,
            None => write!(f, "no ack")?,
        }

        match self.result_timeout {
            Some(timeout) => write!(f, ", result within {timeout:?}"),
            None => write!(f, ", no result"),
        }
    }
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_expect_ack_and_result() {
        let options = InvocationOptions::defaults();

        assert_eq!(options.is_ack_expected(), true);
        assert_eq!(options.ack_timeout_millis(), Some(1_000));
        assert_eq!(options.is_result_expected(), true);
        assert_eq!(options.result_timeout_millis(), Some(30_000));
        assert_eq!(options.mode(), InvocationMode::Full);
        assert_eq!(InvocationOptions::default(), options);
    }

    #[test]
    fn no_ack_keeps_result() {
        let options = InvocationOptions::defaults().no_ack();

        assert_eq!(options.is_ack_expected(), false);
        assert_eq!(options.ack_timeout(), None);
        assert_eq!(options.ack_timeout_millis(), None);
        assert_eq!(options.is_result_expected(), true);
        assert_eq!(options.result_timeout_millis(), Some(30_000));
        assert_eq!(options.mode(), InvocationMode::ResultOnly);
    }

    #[test]
    fn no_result_keeps_ack() {
        let options = InvocationOptions::defaults().no_result();

        assert_eq!(options.ack_timeout_millis(), Some(1_000));
        assert_eq!(options.is_result_expected(), false);
        assert_eq!(options.result_timeout_millis(), None);
        assert_eq!(options.mode(), InvocationMode::AckOnly);
    }

    #[test]
    fn fire_and_forget() {
        let options = InvocationOptions::defaults().no_ack().no_result();

        assert_eq!(options.is_ack_expected(), false);
        assert_eq!(options.is_result_expected(), false);
        assert_eq!(options.mode(), InvocationMode::FireAndForget);
        assert_eq!(options.phases().count(), 0);
    }

    #[test]
    fn expect_ack_within_one_minute_then_forget_result() {
        let options = InvocationOptions::defaults()
            .expect_ack_within_unit(1, TimeUnit::Minutes)
            .no_result();

        assert_eq!(options.ack_timeout_millis(), Some(60_000));
        assert_eq!(options.is_result_expected(), false);
    }

    #[test]
    fn expect_again_after_clearing() {
        let options = InvocationOptions::defaults()
            .no_ack()
            .no_result()
            .expect_ack_within_millis(250)
            .expect_result_within(Duration::from_secs(2));

        assert_eq!(options.ack_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(options.result_timeout(), Some(Duration::from_secs(2)));
        assert_eq!(options.mode(), InvocationMode::Full);
    }

    #[test]
    fn copy_is_independent() {
        let original = InvocationOptions::defaults()
            .expect_ack_within_millis(500)
            .expect_result_within_unit(2, TimeUnit::Minutes);
        let copy = original;

        assert_eq!(copy.is_ack_expected(), original.is_ack_expected());
        assert_eq!(copy.is_result_expected(), original.is_result_expected());
        assert_eq!(copy.ack_timeout_millis(), original.ack_timeout_millis());
        assert_eq!(copy.result_timeout_millis(), original.result_timeout_millis());

        let copy = copy.no_ack();
        assert_eq!(copy.is_ack_expected(), false);
        assert_eq!(original.is_ack_expected(), true);
        assert_eq!(original.ack_timeout_millis(), Some(500));
        assert_eq!(original.result_timeout_millis(), Some(120_000));
    }

    #[test]
    fn mutators_are_idempotent() {
        let options = InvocationOptions::defaults().no_ack();
        assert_eq!(options.is_ack_expected(), false);
        let options = options.no_ack();
        assert_eq!(options.is_ack_expected(), false);

        let options = InvocationOptions::defaults()
            .expect_ack_within_millis(100)
            .expect_ack_within_millis(700);
        assert_eq!(options.ack_timeout_millis(), Some(700));
    }

    #[test]
    fn unit_is_normalized() {
        let raw = InvocationOptions::defaults().expect_ack_within_millis(1_000);
        let unit = InvocationOptions::defaults().expect_ack_within_unit(1, TimeUnit::Seconds);
        let duration = InvocationOptions::defaults().expect_ack_within(Duration::from_secs(1));

        assert_eq!(raw, unit);
        assert_eq!(raw, duration);

        let raw = InvocationOptions::defaults().expect_result_within_millis(90_000);
        let unit =
            InvocationOptions::defaults().expect_result_within_unit(90, TimeUnit::Seconds);
        assert_eq!(raw, unit);
    }

    #[test]
    fn millis_truncate_sub_millisecond_timeouts() {
        let options = InvocationOptions::defaults()
            .expect_ack_within_unit(1_500, TimeUnit::Microseconds)
            .expect_result_within(Duration::MAX);

        assert_eq!(options.ack_timeout_millis(), Some(1));
        assert_eq!(options.result_timeout_millis(), Some(u64::MAX));
    }

    #[test]
    fn phases_in_order() {
        let phases = InvocationOptions::defaults().phases().collect::<Vec<_>>();
        assert_eq!(
            phases,
            vec![
                PhaseTimeout {
                    phase: Phase::Ack,
                    timeout: DEFAULT_ACK_TIMEOUT
                },
                PhaseTimeout {
                    phase: Phase::Result,
                    timeout: DEFAULT_RESULT_TIMEOUT
                },
            ]
        );

        let phases = InvocationOptions::defaults()
            .no_ack()
            .phases()
            .collect::<Vec<_>>();
        assert_eq!(
            phases,
            vec![PhaseTimeout {
                phase: Phase::Result,
                timeout: DEFAULT_RESULT_TIMEOUT
            }]
        );
    }

    #[test]
    fn timeout_by_phase() {
        let options = InvocationOptions::defaults().no_result();

        assert_eq!(options.timeout(Phase::Ack), Some(DEFAULT_ACK_TIMEOUT));
        assert_eq!(options.timeout(Phase::Result), None);
    }

    #[test]
    fn zero_timeout_is_stored_but_invalid() {
        let options = InvocationOptions::defaults().expect_ack_within(Duration::ZERO);
        assert_eq!(options.ack_timeout(), Some(Duration::ZERO));
        assert!(matches!(
            options.validate(),
            Err(Error::ZeroTimeout(Phase::Ack))
        ));

        let options = InvocationOptions::defaults().expect_result_within_millis(0);
        assert!(matches!(
            options.validate(),
            Err(Error::ZeroTimeout(Phase::Result))
        ));
    }

    #[test]
    fn skipped_phases_are_always_valid() {
        assert!(InvocationOptions::defaults().validate().is_ok());
        assert!(InvocationOptions::defaults()
            .no_ack()
            .no_result()
            .validate()
            .is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(
            InvocationOptions::defaults().to_string(),
            "ack within 1s, result within 30s"
        );
        assert_eq!(
            InvocationOptions::defaults().no_ack().no_result().to_string(),
            "no ack, no result"
        );
        assert_eq!(
            InvocationOptions::defaults()
                .expect_ack_within_millis(1_500)
                .no_result()
                .to_string(),
            "ack within 1.5s, no result"
        );
    }
}

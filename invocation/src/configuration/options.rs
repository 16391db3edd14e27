use std::time::Duration;

use tracing::debug;

use crate::{
    ConfigurationProvider, Error, InvocationOptions, DEFAULT_ACK_TIMEOUT, DEFAULT_RESULT_TIMEOUT,
};

/// Configuration parameters for [`InvocationOptions`]
///
/// With the `config-provider` feature, this configuration can be deserialized. Missing keys fall
/// back to the [`InvocationOptions::defaults`] values and timeouts are written in a human
/// readable form such as `"1s"` or `"2m 30s"`:
///
/// ```toml
/// expect_ack = true
/// ack_timeout = "5s"
/// expect_result = false
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "config-provider", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-provider", serde(default))]
pub struct InvocationOptionsConfiguration {
    /// Whether the remote peer should acknowledge the receipt of a request
    pub expect_ack: bool,

    /// The time to wait for the acknowledgment.
    /// Ignored when `expect_ack` is false
    #[cfg_attr(feature = "config-provider", serde(with = "humantime_serde"))]
    pub ack_timeout: Duration,

    /// Whether the outcome of the remote execution should be waited for
    pub expect_result: bool,

    /// The time to wait for the outcome of the remote execution.
    /// Ignored when `expect_result` is false
    #[cfg_attr(feature = "config-provider", serde(with = "humantime_serde"))]
    pub result_timeout: Duration,
}

impl Default for InvocationOptionsConfiguration {
    fn default() -> Self {
        Self {
            expect_ack: true,
            ack_timeout: DEFAULT_ACK_TIMEOUT,
            expect_result: true,
            result_timeout: DEFAULT_RESULT_TIMEOUT,
        }
    }
}

impl TryFrom<InvocationOptionsConfiguration> for InvocationOptions {
    type Error = Error;

    fn try_from(configuration: InvocationOptionsConfiguration) -> Result<Self, Self::Error> {
        let mut options = InvocationOptions::defaults()
            .expect_ack_within(configuration.ack_timeout)
            .expect_result_within(configuration.result_timeout);

        if !configuration.expect_ack {
            options = options.no_ack();
        }
        if !configuration.expect_result {
            options = options.no_result();
        }

        options.validate()?;
        Ok(options)
    }
}

impl From<InvocationOptions> for InvocationOptionsConfiguration {
    fn from(options: InvocationOptions) -> Self {
        Self {
            expect_ack: options.is_ack_expected(),
            ack_timeout: options.ack_timeout().unwrap_or(DEFAULT_ACK_TIMEOUT),
            expect_result: options.is_result_expected(),
            result_timeout: options.result_timeout().unwrap_or(DEFAULT_RESULT_TIMEOUT),
        }
    }
}

impl InvocationOptions {
    /// Create options from the configuration returned by a [`ConfigurationProvider`]
    ///
    /// The resulting options are validated, a zero timeout on an expected phase is rejected
    pub fn configure_with<Provider>(provider: &mut Provider) -> Result<Self, Error>
    where
        Provider: ConfigurationProvider,
        <Provider as ConfigurationProvider>::Configuration: Into<InvocationOptionsConfiguration>,
    {
        let configuration: InvocationOptionsConfiguration = provider
            .configure()
            .map_err(|e| Error::Configuration(e.into()))?
            .into();

        let options = InvocationOptions::try_from(configuration)?;
        debug!(%options, "configured invocation options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxError, InvocationMode, Phase};

    #[test]
    fn default_configuration_matches_defaults() {
        let options = InvocationOptions::try_from(InvocationOptionsConfiguration::default());
        assert_eq!(options.ok(), Some(InvocationOptions::defaults()));
    }

    #[test]
    fn disabled_phases_are_absent() {
        let configuration = InvocationOptionsConfiguration {
            expect_ack: false,
            ack_timeout: Duration::from_secs(5),
            expect_result: true,
            result_timeout: Duration::from_secs(10),
        };

        let options = InvocationOptions::try_from(configuration).expect("valid configuration");
        assert_eq!(options.is_ack_expected(), false);
        assert_eq!(options.result_timeout_millis(), Some(10_000));
        assert_eq!(options.mode(), InvocationMode::ResultOnly);
    }

    #[test]
    fn reject_zero_timeout() {
        let configuration = InvocationOptionsConfiguration {
            result_timeout: Duration::ZERO,
            ..Default::default()
        };

        assert!(matches!(
            InvocationOptions::try_from(configuration),
            Err(Error::ZeroTimeout(Phase::Result))
        ));
    }

    #[test]
    fn ignore_zero_timeout_of_disabled_phase() {
        let configuration = InvocationOptionsConfiguration {
            expect_ack: false,
            ack_timeout: Duration::ZERO,
            ..Default::default()
        };

        let options = InvocationOptions::try_from(configuration).expect("valid configuration");
        assert_eq!(options, InvocationOptions::defaults().no_ack());
    }

    #[test]
    fn options_to_configuration() {
        let options = InvocationOptions::defaults()
            .expect_ack_within_millis(200)
            .no_result();

        let configuration = InvocationOptionsConfiguration::from(options);
        assert_eq!(
            configuration,
            InvocationOptionsConfiguration {
                expect_ack: true,
                ack_timeout: Duration::from_millis(200),
                expect_result: false,
                result_timeout: DEFAULT_RESULT_TIMEOUT,
            }
        );
        assert_eq!(InvocationOptions::try_from(configuration).ok(), Some(options));
    }

    #[test]
    fn configure_with_closure() {
        let mut provider = || {
            Ok::<_, BoxError>(InvocationOptionsConfiguration {
                expect_result: false,
                ..Default::default()
            })
        };

        let options = InvocationOptions::configure_with(&mut provider).expect("valid options");
        assert_eq!(options.mode(), InvocationMode::AckOnly);
    }

    #[test]
    fn configure_with_failing_provider() {
        let mut provider =
            || Err::<InvocationOptionsConfiguration, BoxError>("source unavailable".into());

        let err = InvocationOptions::configure_with(&mut provider).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "failed to load invocation options configuration: source unavailable"
        );
    }
}

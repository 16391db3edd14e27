//! Provides configuration components for [`InvocationOptions`](crate::InvocationOptions)
pub mod options;
pub mod provider;

pub use options::InvocationOptionsConfiguration;
pub use provider::ConfigurationProvider;

#[cfg(feature = "config-provider")]
pub mod default;
#[cfg(feature = "config-provider")]
pub use default::DefaultConfigurationProvider;

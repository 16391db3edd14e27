//! Components that can provide configuration
use crate::BoxError;

/// A special trait for a component that can provide a configuration from any configuration source
///
/// The trait is implemented for closures returning a [`Result`], which comes in handy when the
/// configuration is computed in code rather than loaded from a file or the environment
pub trait ConfigurationProvider {
    /// The type of configuration provided
    type Configuration;

    /// Error type that can occur during configuration
    type Error: Into<BoxError>;

    /// Attempt to retrieve the [`Self::Configuration`] provided by this trait
    fn configure(&mut self) -> Result<Self::Configuration, Self::Error>;
}

impl<F, C, E> ConfigurationProvider for F
where
    F: FnMut() -> Result<C, E>,
    E: Into<BoxError>,
{
    type Configuration = C;
    type Error = E;

    fn configure(&mut self) -> Result<Self::Configuration, Self::Error> {
        self()
    }
}

use crate::ConfigurationProvider;

use config::{Config, ConfigError, Environment, File};
use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

/// Prefix of the environment variables read by the [`DefaultConfigurationProvider`]
pub const DEFAULT_ENV_PREFIX: &str = "INVOCATION";

/// A [`ConfigurationProvider`] that reads an optional configuration file, overridden by
/// environment variables
///
/// Environment variables are named after the configuration keys, prefixed with
/// [`DEFAULT_ENV_PREFIX`] by default, e.g `INVOCATION_ACK_TIMEOUT=5s`
pub struct DefaultConfigurationProvider<T> {
    file: Option<PathBuf>,
    prefix: String,
    _phantom: PhantomData<T>,
}

impl<T> Default for DefaultConfigurationProvider<T> {
    fn default() -> Self {
        Self {
            file: None,
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<T> DefaultConfigurationProvider<T> {
    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().into());
        self
    }

    /// Read environment variables starting with `prefix` instead of [`DEFAULT_ENV_PREFIX`]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl<T> ConfigurationProvider for DefaultConfigurationProvider<T>
where
    T: serde::de::DeserializeOwned,
{
    type Configuration = T;
    type Error = ConfigError;

    fn configure(&mut self) -> Result<Self::Configuration, Self::Error> {
        let file = self
            .file
            .clone()
            .and_then(|file| file.into_os_string().into_string().ok());

        let mut builder = Config::builder();
        if let Some(file) = file {
            debug!(%file, "loading configuration file");
            builder = builder.add_source(File::with_name(&file))
        }

        trace!(prefix = %self.prefix, "loading configuration from environment");
        let config = builder
            .add_source(Environment::with_prefix(&self.prefix).try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}

//! Environment-backed configuration loading.

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Loads `.env` if present, then reads variables sharing `prefix`.
pub(crate) fn from_prefixed_env<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    dotenvy::dotenv().ok();
    from_prefixed_vars(prefix, std::env::vars())
}

pub(crate) fn from_prefixed_vars<T, I>(prefix: &str, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    Ok(envy::prefixed(prefix).from_iter(vars)?)
}

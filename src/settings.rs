use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::env;
use crate::credentials::{AllowCredentials, ParseCredentialsError};
use crate::exposed_headers::ExposedHeaders;
use crate::filter::CorsFilter;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowOrigin;
use serde::{Deserialize, Deserializer, Serialize};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Flat, loader-facing form of the configuration surface.
///
/// Every field is optional in every source and falls back to the documented
/// default. Convert with [`CorsSettings::into_options`] once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsSettings {
    pub allow_origin: String,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    #[serde(deserialize_with = "deserialize_credentials")]
    pub allow_credentials: AllowCredentials,
    pub expose_headers: Vec<String>,
    pub max_age: u64,
    pub allow_all_origins: bool,
    pub allow_all_headers: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{key} must be a non-negative integer number of seconds, got {value:?}")]
    InvalidMaxAge {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{key}: {source}")]
    InvalidCredentials {
        key: &'static str,
        #[source]
        source: ParseCredentialsError,
    },
    #[error("failed to read CORS settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CORS settings document")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CorsSettings {
    /// Reads the `CORS_*` variables from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the `CORS_*` keys through `lookup`.
    ///
    /// Lists are comma-separated with entries trimmed and blanks dropped. The
    /// two `ALLOW_ALL` keys are presence flags: any non-blank value enables
    /// them. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Self::default();

        if let Some(value) = read(env::ALLOW_ORIGIN) {
            settings.allow_origin = value;
        }
        if let Some(value) = read(env::ALLOW_METHODS) {
            settings.allow_methods = split_list(&value);
        }
        if let Some(value) = read(env::ALLOW_HEADERS) {
            settings.allow_headers = split_list(&value);
        }
        if let Some(value) = read(env::ALLOW_CREDENTIALS) {
            settings.allow_credentials = value
                .parse::<AllowCredentials>()
                .map_err(|source| SettingsError::InvalidCredentials {
                    key: env::ALLOW_CREDENTIALS,
                    source,
                })?;
        }
        if let Some(value) = read(env::EXPOSE_HEADERS) {
            settings.expose_headers = split_list(&value);
        }
        if let Some(value) = read(env::MAX_AGE) {
            settings.max_age = value
                .parse::<u64>()
                .map_err(|source| SettingsError::InvalidMaxAge {
                    key: env::MAX_AGE,
                    value: value.clone(),
                    source,
                })?;
        }
        settings.allow_all_origins = read(env::ALLOW_ALL_ORIGIN).is_some();
        settings.allow_all_headers = read(env::ALLOW_ALL_HEADERS).is_some();

        Ok(settings)
    }

    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(document)?)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&document)
    }

    /// The `allow_all_*` flags take precedence over the static values.
    pub fn into_options(self) -> CorsOptions {
        let origin = if self.allow_all_origins {
            AllowOrigin::MirrorRequest
        } else {
            AllowOrigin::Exact(self.allow_origin)
        };
        let allowed_headers = if self.allow_all_headers {
            AllowedHeaders::MirrorRequest
        } else {
            AllowedHeaders::List(self.allow_headers)
        };

        CorsOptions {
            origin,
            methods: AllowedMethods::list(self.allow_methods),
            allowed_headers,
            credentials: self.allow_credentials,
            exposed_headers: ExposedHeaders::list(self.expose_headers),
            max_age: self.max_age,
        }
    }

    pub fn into_filter(self) -> Result<CorsFilter, SettingsError> {
        Ok(CorsFilter::new(self.into_options())?)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CredentialsRepr {
    Flag(bool),
    Text(String),
}

fn deserialize_credentials<'de, D>(deserializer: D) -> Result<AllowCredentials, D::Error>
where
    D: Deserializer<'de>,
{
    match CredentialsRepr::deserialize(deserializer)? {
        CredentialsRepr::Flag(value) => Ok(value.into()),
        CredentialsRepr::Text(value) => value.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::credentials::AllowCredentials;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowOrigin;
use thiserror::Error;

/// Static CORS configuration, built once at startup and read-only afterwards.
///
/// The defaults emit all six headers with empty values, `false` credentials
/// and a max age of `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    pub origin: AllowOrigin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: AllowCredentials,
    pub exposed_headers: ExposedHeaders,
    pub max_age: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} value {value:?} is not a valid HTTP header value")]
    InvalidHeaderValue { field: &'static str, value: String },
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: AllowOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allowed_headers(mut self, allowed_headers: AllowedHeaders) -> Self {
        self.allowed_headers = allowed_headers;
        self
    }

    pub fn credentials(mut self, credentials: AllowCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn exposed_headers(mut self, exposed_headers: ExposedHeaders) -> Self {
        self.exposed_headers = exposed_headers;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Checks that every statically configured value can be sent as a header.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let AllowOrigin::Exact(value) = &self.origin {
            ensure_header_value("allow_origin", value)?;
        }

        ensure_list("allow_methods", self.methods.values())?;
        if let AllowedHeaders::List(values) = &self.allowed_headers {
            ensure_list("allow_headers", values)?;
        }
        ensure_list("expose_headers", &self.exposed_headers)?;

        Ok(())
    }
}

fn ensure_list(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    for value in values {
        ensure_header_value(field, value)?;
    }
    Ok(())
}

fn ensure_header_value(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let valid = value
        .bytes()
        .all(|byte| byte == b'\t' || (byte >= 0x20 && byte != 0x7f));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidHeaderValue {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

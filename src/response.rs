use crate::constants::status;
use crate::headers::Headers;

/// Mutable view of an outbound response's headers.
///
/// Hosts implement this for their response type so the filter can finalize
/// responses it did not build. Name lookups must be case-insensitive.
pub trait ResponseHeaders {
    fn contains_header(&self, name: &str) -> bool;

    fn set_header(&mut self, name: &str, value: &str);
}

impl ResponseHeaders for Headers {
    fn contains_header(&self, name: &str) -> bool {
        self.keys().any(|existing| existing.eq_ignore_ascii_case(name))
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, slot)) => *slot = value.to_string(),
            None => {
                self.insert(name.to_string(), value.to_string());
            }
        }
    }
}

/// Terminal, empty-bodied response produced for a preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub status: u16,
    pub headers: Headers,
}

impl PreflightResponse {
    pub(crate) fn new(headers: Headers) -> Self {
        Self {
            status: status::OK,
            headers,
        }
    }
}

/// What [`CorsFilter::on_response`](crate::CorsFilter::on_response) did to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// `Access-Control-Allow-Origin` was already set; nothing was touched.
    AlreadyPresent,
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

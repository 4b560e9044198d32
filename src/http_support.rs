//! Adapters between the filter and the `http` crate's request/response types.

use crate::constants::header;
use crate::context::RequestContext;
use crate::response::{PreflightResponse, ResponseHeaders};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Response, StatusCode};
use tracing::warn;

impl ResponseHeaders for HeaderMap {
    fn contains_header(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => {
                warn!(
                    header = name,
                    "dropping CORS header with an invalid name or value"
                );
            }
        }
    }
}

/// Request inputs copied out of an `http` request so the request itself can
/// move on to the next handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    pub fn from_http(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self::from_http(request.method(), request.headers())
    }

    pub fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

/// Non-UTF-8 bytes (obs-text) are decoded lossily so mirrored values still
/// reach the response.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

impl PreflightResponse {
    /// Builds the terminal response with an empty body.
    pub fn into_http_response<B: Default>(self) -> Response<B> {
        let mut response = Response::new(B::default());
        *response.status_mut() = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        for (name, value) in &self.headers {
            response.headers_mut().set_header(name, value);
        }
        response
    }
}

#[cfg(test)]
#[path = "http_support_test.rs"]
mod http_support_test;

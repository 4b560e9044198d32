use cors_header_filter::constants::header;
use cors_header_filter::{Headers, PreflightResponse};

use super::headers::header_value;

pub fn assert_preflight(response: Option<PreflightResponse>) -> Headers {
    match response {
        Some(response) => {
            assert_eq!(response.status, 200, "preflight responses use status 200");
            response.headers
        }
        None => panic!("expected preflight short-circuit, request continued"),
    }
}

/// Checks all six CORS headers, in order: origin, methods, allowed headers,
/// credentials, exposed headers, max age.
pub fn assert_cors_headers(headers: &Headers, expected: [&str; 6]) {
    for (name, value) in header::RESPONSE_HEADERS.iter().zip(expected) {
        assert_eq!(
            header_value(headers, name),
            Some(value),
            "unexpected value for {name}"
        );
    }
}

use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::response::{ApplyOutcome, PreflightResponse, ResponseHeaders};
use tracing::{debug, trace};

/// Request/response interceptor that attaches CORS headers.
///
/// The filter is invoked twice per request: [`CorsFilter::on_request`] before
/// routing, which answers preflight requests directly, and
/// [`CorsFilter::on_response`] before the response is sent. It holds only
/// immutable configuration and can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CorsFilter {
    options: CorsOptions,
}

impl CorsFilter {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// `OPTIONS` carrying `Access-Control-Request-Method`; the header value is
    /// not inspected.
    pub fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method == method::OPTIONS && request.access_control_request_method.is_some()
    }

    pub fn compute_headers(&self, request: &RequestContext<'_>) -> Headers {
        HeaderBuilder::new(&self.options)
            .build_all(request)
            .into_headers()
    }

    /// Returns a terminal response for preflight requests. `None` means the
    /// request continues down the pipeline.
    pub fn on_request(&self, request: &RequestContext<'_>) -> Option<PreflightResponse> {
        if !Self::is_preflight(request) {
            return None;
        }

        debug!(
            origin = request.origin.unwrap_or_default(),
            requested_method = request.access_control_request_method.unwrap_or_default(),
            "answering CORS preflight request"
        );
        Some(PreflightResponse::new(self.compute_headers(request)))
    }

    /// Attaches the CORS headers unless `Access-Control-Allow-Origin` is
    /// already present, whatever its value. Only that header gates the write.
    pub fn on_response<R>(&self, request: &RequestContext<'_>, response: &mut R) -> ApplyOutcome
    where
        R: ResponseHeaders + ?Sized,
    {
        if response.contains_header(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
            trace!("response already carries Access-Control-Allow-Origin; leaving it untouched");
            return ApplyOutcome::AlreadyPresent;
        }

        for (name, value) in self.compute_headers(request) {
            response.set_header(&name, &value);
        }
        ApplyOutcome::Applied
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

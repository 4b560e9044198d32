use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// All six response headers, present even when their value is empty.
    pub(crate) fn build_all(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_header(request));
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers(request));
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_exposed_headers());
        headers.extend(self.build_max_age_header());
        headers
    }

    pub(crate) fn build_origin_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.origin.resolve(request),
        )
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.methods.header_value(),
        )
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allowed_headers.resolve(request),
        )
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            self.options.credentials.as_str(),
        )
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.exposed_headers.header_value(),
        )
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        single(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.to_string(),
        )
    }
}

fn single(name: &'static str, value: impl Into<String>) -> HeaderCollection {
    let mut headers = HeaderCollection::with_estimate(1);
    headers.push(name, value);
    headers
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

use cors_header_filter::constants::method;
use cors_header_filter::{
    AllowCredentials, AllowOrigin, AllowedHeaders, AllowedMethods, CorsFilter, CorsOptions,
    ExposedHeaders, RequestContext,
};

#[derive(Default)]
pub struct FilterBuilder {
    options: CorsOptions,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.options.origin = AllowOrigin::exact(origin);
        self
    }

    pub fn allow_all_origins(mut self) -> Self {
        self.options.origin = AllowOrigin::mirror_request();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = AllowedHeaders::list(headers);
        self
    }

    pub fn allow_all_headers(mut self) -> Self {
        self.options.allowed_headers = AllowedHeaders::mirror_request();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = AllowCredentials::from(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = seconds;
        self
    }

    pub fn build(self) -> CorsFilter {
        CorsFilter::new(self.options).expect("valid CORS configuration")
    }
}

pub struct TestRequest {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl TestRequest {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        }
    }
}

pub fn filter() -> FilterBuilder {
    FilterBuilder::new()
}

pub fn simple_request() -> TestRequest {
    TestRequest::with_method(method::GET)
}

/// `OPTIONS` with `Access-Control-Request-Method: GET` already set.
pub fn preflight_request() -> TestRequest {
    TestRequest::with_method(method::OPTIONS).request_method(method::GET)
}

pub fn options_request() -> TestRequest {
    TestRequest::with_method(method::OPTIONS)
}

use crate::context::RequestContext;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Comma-joined in configured order.
    List(Vec<String>),
    /// Echo the request's `Access-Control-Request-Headers` header.
    MirrorRequest,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    pub fn resolve(&self, request: &RequestContext<'_>) -> String {
        match self {
            Self::List(values) => values.join(","),
            Self::MirrorRequest => request
                .access_control_request_headers
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;

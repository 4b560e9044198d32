use crate::context::RequestContext;

/// Source of the `Access-Control-Allow-Origin` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowOrigin {
    /// Emit the configured value verbatim, including the empty string.
    Exact(String),
    /// Echo the request's `Origin` header back to the caller.
    MirrorRequest,
}

impl Default for AllowOrigin {
    fn default() -> Self {
        Self::Exact(String::new())
    }
}

impl AllowOrigin {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    /// Header value for `request`. A mirrored origin that the request does not
    /// carry resolves to the empty string.
    pub fn resolve(&self, request: &RequestContext<'_>) -> String {
        match self {
            Self::Exact(value) => value.clone(),
            Self::MirrorRequest => request.origin.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Values are emitted exactly as configured; casing is the caller's choice.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined header value; an empty list yields `""`.
    pub fn header_value(&self) -> String {
        self.0.join(",")
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;

/// Borrowed view of the request inputs the filter consults.
///
/// Header values are `None` when the request does not carry the header. Hosts
/// look headers up case-insensitively before building the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

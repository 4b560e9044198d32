pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";

    /// Every response header the filter writes, in emission order.
    pub const RESPONSE_HEADERS: [&str; 6] = [
        ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        ACCESS_CONTROL_EXPOSE_HEADERS,
        ACCESS_CONTROL_MAX_AGE,
    ];
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod status {
    pub const OK: u16 = 200;
}

pub mod env {
    pub const ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";
    pub const ALLOW_METHODS: &str = "CORS_ALLOW_METHODS";
    pub const ALLOW_HEADERS: &str = "CORS_ALLOW_HEADERS";
    pub const ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
    pub const EXPOSE_HEADERS: &str = "CORS_EXPOSE_HEADERS";
    pub const MAX_AGE: &str = "CORS_MAX_AGE";
    pub const ALLOW_ALL_ORIGIN: &str = "CORS_ALLOW_ALL_ORIGIN";
    pub const ALLOW_ALL_HEADERS: &str = "CORS_ALLOW_ALL_HEADERS";
}

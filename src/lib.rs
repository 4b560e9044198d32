pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod context;
mod credentials;
mod exposed_headers;
mod filter;
mod header_builder;
mod headers;
mod http_support;
mod options;
mod origin;
mod response;
mod settings;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use credentials::{AllowCredentials, ParseCredentialsError};
pub use exposed_headers::ExposedHeaders;
pub use filter::CorsFilter;
pub use headers::Headers;
pub use http_support::OwnedRequestContext;
pub use options::{CorsOptions, ValidationError};
pub use origin::AllowOrigin;
pub use response::{ApplyOutcome, PreflightResponse, ResponseHeaders};
pub use settings::{CorsSettings, SettingsError};

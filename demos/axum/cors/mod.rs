use std::sync::Arc;

use cors_header_filter::{CorsFilter, CorsSettings, SettingsError};

pub type SharedCors = Arc<CorsFilter>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Reads the `CORS_*` environment variables, falling back to a permissive
/// development setup when none are set.
pub fn build_state() -> Result<AppState, SettingsError> {
    let mut settings = CorsSettings::from_env()?;
    if settings == CorsSettings::default() {
        settings.allow_all_origins = true;
        settings.allow_methods = vec!["GET".into(), "POST".into(), "OPTIONS".into()];
        settings.allow_headers = vec!["Content-Type".into(), "X-Requested-With".into()];
        settings.expose_headers = vec!["X-Example-Trace".into()];
        settings.max_age = 600;
    }

    Ok(AppState {
        cors: Arc::new(settings.into_filter()?),
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;

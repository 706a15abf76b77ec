//! CORS allow-list keyed by deployment environment.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;
use crate::error::{Error, Result};

/// Build a CORS layer from config. Returns `None` when CORS is disabled.
///
/// # Errors
/// Returns a config error if an origin is not a valid header value.
pub fn build_cors_layer(cfg: &ServerConfig) -> Result<Option<CorsLayer>> {
    if !cfg.cors.enabled {
        return Ok(None);
    }

    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let origins = cfg.cors.origins_for(cfg.environment);
    if origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(AllowOrigin::any());
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| Error::config(format!("cors: invalid origin '{o}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        layer = layer.allow_origin(values);
    }

    if cfg.cors.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.cors.max_age_seconds > 0 {
        layer = layer.max_age(std::time::Duration::from_secs(cfg.cors.max_age_seconds));
    }

    Ok(Some(layer))
}

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub debug: bool,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            Err(_) => 10000,
        };

        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase();

        let debug = std::env::var("DEBUG")
            .map(|raw| parse_bool(&raw))
            .unwrap_or(false);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            port,
            log_level,
            debug,
            cors_origins,
        })
    }

    /// Directive string for the tracing env filter. `DEBUG=true` overrides
    /// the configured level.
    pub fn env_filter(&self) -> String {
        let level = if self.debug {
            "debug"
        } else {
            self.log_level.as_str()
        };
        format!("medina_backend={level},tower_http={level}")
    }

    /// Builds the CORS layer: all methods and headers, credentials allowed.
    /// Credentials cannot be combined with a literal wildcard, so the `*`
    /// case mirrors whatever origin the request carries.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let origin = if self.cors_origins.iter().any(|o| o == "*") {
            AllowOrigin::mirror_request()
        } else {
            let origins = self
                .cors_origins
                .iter()
                .map(|o| {
                    o.parse::<HeaderValue>()
                        .with_context(|| format!("Invalid CORS origin: {o}"))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 10000,
            log_level: "info".to_string(),
            debug: false,
            cors_origins: vec!["*".to_string()],
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

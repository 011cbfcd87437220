/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Canva OAuth settings.
    pub canva: CanvaConfig,
}

/// Canva OAuth and asset-endpoint configuration.
///
/// Credentials are optional at startup: a missing client id or secret only
/// fails the OAuth routes at request time, so local development without a
/// Canva app still gets a working companies/sponsorships API.
#[derive(Debug, Clone)]
pub struct CanvaConfig {
    /// OAuth client id (`CANVA_CLIENT_ID`, no default).
    pub client_id: Option<String>,
    /// OAuth client secret (`CANVA_CLIENT_SECRET`, no default).
    pub client_secret: Option<String>,
    /// Authorization endpoint.
    pub auth_url: String,
    /// Token exchange endpoint.
    pub token_url: String,
    /// Asset listing endpoint.
    pub assets_url: String,
    /// Redirect URI registered with the provider.
    pub redirect_uri: String,
    /// Requested OAuth scope.
    pub scope: String,
    /// Front-end base URL for post-callback redirects.
    pub frontend_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let canva = CanvaConfig::from_env(port);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            canva,
        }
    }
}

impl CanvaConfig {
    /// Load Canva settings from environment variables with defaults.
    ///
    /// | Env Var               | Default                                        |
    /// |-----------------------|------------------------------------------------|
    /// | `CANVA_CLIENT_ID`     | unset                                          |
    /// | `CANVA_CLIENT_SECRET` | unset                                          |
    /// | `CANVA_AUTH_URL`      | `https://www.canva.com/api/oauth/authorize`    |
    /// | `CANVA_TOKEN_URL`     | `https://api.canva.com/rest/v1/oauth/token`    |
    /// | `CANVA_ASSETS_URL`    | `https://api.canva.com/rest/v1/assets`         |
    /// | `CANVA_REDIRECT_URI`  | `http://localhost:{port}/auth/canva/callback`  |
    /// | `CANVA_SCOPE`         | `asset:read`                                   |
    /// | `FRONTEND_URL`        | `http://localhost:5173`                        |
    pub fn from_env(port: u16) -> Self {
        let client_id = std::env::var("CANVA_CLIENT_ID").ok();
        let client_secret = std::env::var("CANVA_CLIENT_SECRET").ok();

        let auth_url = std::env::var("CANVA_AUTH_URL")
            .unwrap_or_else(|_| "https://www.canva.com/api/oauth/authorize".into());
        let token_url = std::env::var("CANVA_TOKEN_URL")
            .unwrap_or_else(|_| "https://api.canva.com/rest/v1/oauth/token".into());
        let assets_url = std::env::var("CANVA_ASSETS_URL")
            .unwrap_or_else(|_| "https://api.canva.com/rest/v1/assets".into());

        let redirect_uri = std::env::var("CANVA_REDIRECT_URI")
            .unwrap_or_else(|_| format!("http://localhost:{port}/auth/canva/callback"));
        let scope = std::env::var("CANVA_SCOPE").unwrap_or_else(|_| "asset:read".into());
        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".into());

        Self {
            client_id,
            client_secret,
            auth_url,
            token_url,
            assets_url,
            redirect_uri,
            scope,
            frontend_url,
        }
    }
}

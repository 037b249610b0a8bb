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
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether storage error bodies carry the raw driver text in a
    /// `details` field (default: `true`, matching the historical surface).
    pub verbose_errors: bool,
    /// Whether to apply migrations at startup (default: `true`). Set to
    /// `false` when attaching to a pre-existing legacy database.
    pub run_migrations: bool,
    /// Directory served at `/` (public viewer).
    pub public_dir: String,
    /// Directory served at `/admin` (admin editor).
    pub admin_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT`                 | `3000`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    /// | `VERBOSE_ERRORS`       | `true`       |
    /// | `RUN_MIGRATIONS`       | `true`       |
    /// | `PUBLIC_DIR`           | `web/public` |
    /// | `ADMIN_DIR`            | `web/admin`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let verbose_errors = env_flag("VERBOSE_ERRORS", true);
        let run_migrations = env_flag("RUN_MIGRATIONS", true);

        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "web/public".into());
        let admin_dir = std::env::var("ADMIN_DIR").unwrap_or_else(|_| "web/admin".into());

        Self {
            host,
            port,
            request_timeout_secs,
            verbose_errors,
            run_migrations,
            public_dir,
            admin_dir,
        }
    }
}

/// Read a boolean env var; anything other than `true`/`false`
/// (case-insensitive, also `1`/`0`) fails fast.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Err(_) => default,
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => panic!("{name} must be true or false, got '{raw}'"),
        },
    }
}

/// Configuration management for the application layer
///
/// Loads configuration from environment variables into a typed struct.
///
/// # Environment Variables
///
/// - `API_BASE_URL`: origin of the CampusLink API (required)
/// - `API_TIMEOUT_SECONDS`: per-request timeout (default: 15)
/// - `SUPABASE_URL`: auth provider origin (optional; auth flows disabled
///   without it)
/// - `SUPABASE_ANON_KEY`: auth provider public key (optional)
/// - `RUST_LOG`: log filter (default: info)
///
/// # Example
///
/// ```no_run
/// use campuslink_app::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("API at {}", config.api.base_url);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API client configuration
    pub api: ApiConfig,

    /// External auth provider configuration
    pub supabase: SupabaseConfig,
}

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the CampusLink API, e.g. `https://api.campuslink.app`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

/// External auth provider configuration
///
/// The auth provider issues the bearer tokens this client forwards; both
/// fields are optional so read-only/unauthenticated use still works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Provider origin
    pub url: Option<String>,

    /// Public (anon) API key
    pub anon_key: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or a numeric variable
    /// fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let base_url = env::var("API_BASE_URL")
            .map_err(|_| anyhow::anyhow!("API_BASE_URL environment variable is required"))?;

        let timeout_seconds = env::var("API_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<u64>()?;

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_seconds,
            },
            supabase: SupabaseConfig {
                url: env::var("SUPABASE_URL").ok(),
                anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            },
        })
    }

    /// Per-request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }
}

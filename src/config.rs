#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub bkash: BkashConfig,
}

#[derive(Debug, Clone)]
pub struct BkashConfig {
    pub base_url: Option<String>,
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());

        Self {
            bind_addr: format!("0.0.0.0:{}", port),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data.db?mode=rwc".to_string()),
            bkash: BkashConfig {
                base_url: env_opt("BKASH_BASE_URL"),
                app_key: env_opt("BKASH_APP_KEY"),
                app_secret: env_opt("BKASH_APP_SECRET"),
                timeout_ms: std::env::var("PROVIDER_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(2500),
            },
        }
    }
}

/// Empty values count as unset so a blank BKASH_BASE_URL still selects
/// simulation mode.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

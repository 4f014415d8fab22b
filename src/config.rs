const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_USER_KEY: &str = "user";
const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_key: String,
    pub token_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build-time overrides; the browser has no process environment.
    pub fn load() -> Self {
        Self::from_overrides(
            option_env!("EXPENSES_API_BASE_URL"),
            option_env!("EXPENSES_LOG_LEVEL"),
        )
    }

    fn from_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(base_url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            settings.api_base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|raw| raw.trim().parse::<log::Level>().ok()) {
            settings.log_level = level;
        }

        settings
    }
}

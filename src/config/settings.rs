pub const DEFAULT_BASE_URL: &str = "https://bright-reward-e6526194c7.strapiapp.com/api";
pub const BASE_URL_ENV: &str = "MEDIA_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    /// No timeout is applied when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("media_list/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
        }
    }

    /// Defaults, with the base URL taken from the environment when set
    pub fn from_env() -> Self {
        Self::from_base_url_var(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url_var(value: Option<String>) -> Self {
        let mut config = Self::new();
        if let Some(base_url) = value.filter(|v| !v.trim().is_empty()) {
            config.api.base_url = base_url.trim().to_string();
        }
        config
    }
}

/// Environment variable overriding the range API base URL.
pub const HIBP_RANGE_URL_ENV: &str = "HIBP_RANGE_URL";

/// Environment variable enabling response padding (`1` or `true`).
pub const HIBP_ADD_PADDING_ENV: &str = "HIBP_ADD_PADDING";

/// Public Pwned Passwords range endpoint. The prefix is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Settings for [`RangeClient`](crate::RangeClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the 5 character prefix is appended to.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Sends `Add-Padding: true`, asking the service to pad responses with
    /// zero-count records so response size does not reveal the prefix.
    pub add_padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("hibp-range-client/", env!("CARGO_PKG_VERSION")).to_string(),
            add_padding: false,
        }
    }
}

impl ClientConfig {
    /// Builds a config from [`HIBP_RANGE_URL_ENV`] and [`HIBP_ADD_PADDING_ENV`],
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(HIBP_RANGE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(flag) = lookup(HIBP_ADD_PADDING_ENV) {
            config.add_padding = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Full request URL for `prefix`.
    pub fn range_url(&self, prefix: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{prefix}")
    }
}

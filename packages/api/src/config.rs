//! Remote API configuration from environment variables.

/// Base URL used when `BOOKING_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://booking-api.example.com";

/// Connection settings for the remote booking API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, stored without a trailing slash.
    pub base_url: String,
    /// Platform credential sent as `x-api-key` on every request.
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read `BOOKING_API_BASE_URL` / `BOOKING_API_KEY`, falling back to the
    /// defaults. On native targets a `.env` file is honored; on wasm the
    /// variables are baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            let base_url = std::env::var("BOOKING_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
            let api_key = std::env::var("BOOKING_API_KEY").unwrap_or_default();
            Self::new(base_url, api_key)
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(
                option_env!("BOOKING_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
                option_env!("BOOKING_API_KEY").unwrap_or(""),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://host.example.com/", "key");
        assert_eq!(config.base_url, "https://host.example.com");
    }
}

//! Server configuration.

/// Address the service listens on unless overridden.
pub const DEFAULT_BIND_ADDR: &str = "localhost:8080";

/// Environment variable overriding [`DEFAULT_BIND_ADDR`].
pub const BIND_ADDR_ENV: &str = "CATALOG_BIND_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BIND_ADDR_ENV).map(|v| v.trim().to_string()) {
            Some(addr) if !addr.is_empty() => Self { bind_addr: addr },
            _ => {
                tracing::info!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
                Self::default()
            }
        }
    }
}

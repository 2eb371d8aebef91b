use std::fmt;

pub const DEFAULT_POSTS_KEY: &str = "posts";
pub const DEFAULT_LEADERBOARD_KEY: &str = "leaderboard";
pub const DEFAULT_CURATOR: &str = "Admin";
/// Matches the browser's en-US `toLocaleDateString()` output, e.g. `10/19/2026`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key holding the posts blob
    pub posts_key: String,
    /// Storage key holding the leaderboard blob
    pub leaderboard_key: String,
    /// Author stamped on posts created through the store
    pub curator: String,
    /// chrono format string used for post dates
    pub date_format: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            posts_key: DEFAULT_POSTS_KEY.to_string(),
            leaderboard_key: DEFAULT_LEADERBOARD_KEY.to_string(),
            curator: DEFAULT_CURATOR.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl StoreConfig {
    /// Prefix both storage keys, e.g. `hunt:` gives `hunt:posts`
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.posts_key = format!("{}{}", prefix, DEFAULT_POSTS_KEY);
        self.leaderboard_key = format!("{}{}", prefix, DEFAULT_LEADERBOARD_KEY);
        self
    }

    pub fn with_curator(mut self, curator: impl Into<String>) -> Self {
        self.curator = curator.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

/// Admin credentials checked by the auth gate
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();

        assert_eq!(config.posts_key, "posts");
        assert_eq!(config.leaderboard_key, "leaderboard");
        assert_eq!(config.curator, "Admin");
    }

    #[test]
    fn test_key_prefix() {
        let config = StoreConfig::default().with_key_prefix("hunt:");

        assert_eq!(config.posts_key, "hunt:posts");
        assert_eq!(config.leaderboard_key, "hunt:leaderboard");
    }

    #[test]
    fn test_auth_config_debug_redacts_password() {
        let config = AuthConfig::new("admin", "hunter2");
        let debug = format!("{:?}", config);

        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}

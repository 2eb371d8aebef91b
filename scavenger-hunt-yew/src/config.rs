use scavenger_hunt_core::{AuthConfig, StoreConfig};

/// Settings baked in at build time.
///
/// | Variable | Effect |
/// |---|---|
/// | `HUNT_CURATOR` | author stamped on new posts |
/// | `HUNT_STORAGE_PREFIX` | prefix for the `posts` / `leaderboard` keys |
/// | `HUNT_ADMIN_USERNAME` | admin login name (default `admin`) |
/// | `HUNT_ADMIN_PASSWORD` | admin password; unset disables admin login |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("HUNT_CURATOR"),
            option_env!("HUNT_STORAGE_PREFIX"),
            option_env!("HUNT_ADMIN_USERNAME"),
            option_env!("HUNT_ADMIN_PASSWORD"),
        )
    }

    fn from_values(
        curator: Option<&str>,
        prefix: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Self {
        let mut store = StoreConfig::default();
        if let Some(prefix) = prefix {
            store = store.with_key_prefix(prefix);
        }
        if let Some(curator) = curator {
            store = store.with_curator(curator);
        }

        let auth = AuthConfig::new(username.unwrap_or("admin"), password.unwrap_or_default());

        Self { store, auth }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

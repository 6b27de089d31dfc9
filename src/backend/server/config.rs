/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * `main` calls `dotenv` first, so a local `.env` file works as well.
 *
 * # Variables
 *
 * | Variable          | Default | Meaning                                   |
 * |-------------------|---------|-------------------------------------------|
 * | `PORT`            | `3000`  | Listening port (bound on `0.0.0.0`)       |
 * | `DATABASE_URL`    | unset   | PostgreSQL URL; unset means memory storage |
 * | `SESSION_SECRET`  | unset   | Cookie signing secret                     |
 * | `BCRYPT_COST`     | `10`    | bcrypt cost factor (4..=31)               |
 * | `COOKIE_SECURE`   | `false` | Set the `Secure` cookie attribute         |
 * | `ADMIN_USERNAMES` | empty   | Comma-separated admin usernames           |
 *
 * # Error Handling
 *
 * A malformed value is a `ServerConfigError` and stops startup. Missing
 * optional values fall back to the defaults above.
 */

use std::collections::HashMap;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCostOutOfRange(u32),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// PostgreSQL URL; `None` selects in-memory storage
    pub database_url: Option<String>,
    /// Secret used to derive the cookie signing key
    pub session_secret: Option<String>,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
    /// Usernames that are made admins when they register
    pub admin_usernames: Vec<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("session_secret", &self.session_secret.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie_secure", &self.cookie_secure)
            .field("admin_usernames", &self.admin_usernames)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            session_secret: None,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cookie_secure: false,
            admin_usernames: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load configuration from an explicit variable map
    ///
    /// Empty values are treated as unset.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ServerConfigError> {
        let get = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|_| ServerConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        config.database_url = get("DATABASE_URL");
        config.session_secret = get("SESSION_SECRET");

        if let Some(cost) = get("BCRYPT_COST") {
            let cost: u32 = cost.parse().map_err(|_| ServerConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            if !(4..=31).contains(&cost) {
                return Err(ServerConfigError::BcryptCostOutOfRange(cost));
            }
            config.bcrypt_cost = cost;
        }

        if let Some(secure) = get("COOKIE_SECURE") {
            config.cookie_secure = match secure.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ServerConfigError::InvalidValue {
                        name: "COOKIE_SECURE",
                        value: secure,
                    })
                }
            };
        }

        if let Some(admins) = get("ADMIN_USERNAMES") {
            config.admin_usernames = admins
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    /// In-memory storage, fixed secret, cheapest bcrypt cost
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            session_secret: Some("cloudpad-test-secret".to_string()),
            bcrypt_cost: 4,
            ..Self::default()
        }
    }

    /// Whether `username` is listed in `ADMIN_USERNAMES`
    pub fn is_admin_username(&self, username: &str) -> bool {
        self.admin_usernames.iter().any(|admin| admin == username)
    }
}

use crate::{
    client::view::expiration::DEFAULT_EXPIRING_SOON_DAYS, server::error::config::ConfigError,
};

pub struct Config {
    pub database_url: String,
    /// Products this many days or fewer from expiring are flagged as expiring soon.
    pub expiring_soon_days: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let expiring_soon_days = match lookup("EXPIRING_SOON_DAYS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "EXPIRING_SOON_DAYS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_EXPIRING_SOON_DAYS,
        };

        Ok(Self {
            database_url,
            expiring_soon_days,
        })
    }
}

use dioxus_logger::tracing::Level;
use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{
    error::{config::ConfigError, AppError},
    model::mod_database::SearchPlatform,
    util::parse::{parse_embed_color, parse_snowflake},
};

const DEFAULT_EMBED_COLOR: u32 = 0x5865F2;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub discord_bot_token: String,

    pub embed_color: u32,

    pub ps3_search_channel_id: u64,
    pub xbox360_search_channel_id: u64,

    /// Discord user allowed to relay messages with `/send`.
    pub relay_operator_id: u64,

    pub http_timeout: Duration,
    pub chrome_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never
    /// touch global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let embed_color = match lookup("EMBED_COLOR") {
            Some(value) => parse_embed_color("EMBED_COLOR", &value)?,
            None => DEFAULT_EMBED_COLOR,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: "HTTP_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            embed_color,
            ps3_search_channel_id: parse_snowflake(
                "PS3_SEARCH_CHANNEL_ID",
                &required("PS3_SEARCH_CHANNEL_ID")?,
            )?,
            xbox360_search_channel_id: parse_snowflake(
                "XBOX360_SEARCH_CHANNEL_ID",
                &required("XBOX360_SEARCH_CHANNEL_ID")?,
            )?,
            relay_operator_id: parse_snowflake(
                "RELAY_OPERATOR_ID",
                &required("RELAY_OPERATOR_ID")?,
            )?,
            http_timeout,
            chrome_path: lookup("CHROME_PATH").map(PathBuf::from),
            log_level,
        })
    }

    /// Channel in which searches for `platform` are allowed.
    pub fn search_channel_id(&self, platform: SearchPlatform) -> u64 {
        match platform {
            SearchPlatform::Ps3 => self.ps3_search_channel_id,
            SearchPlatform::Xbox360 => self.xbox360_search_channel_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DISCORD_BOT_TOKEN", "token"),
        ("PS3_SEARCH_CHANNEL_ID", "1111"),
        ("XBOX360_SEARCH_CHANNEL_ID", "2222"),
        ("RELAY_OPERATOR_ID", "212676144934289408"),
    ];

    /// Tests loading a configuration with only the required variables.
    ///
    /// Expected: defaults for every optional value
    #[test]
    fn applies_defaults_for_optional_values() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(config.embed_color, DEFAULT_EMBED_COLOR);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.chrome_path.is_none());
        assert_eq!(config.search_channel_id(SearchPlatform::Ps3), 1111);
        assert_eq!(config.search_channel_id(SearchPlatform::Xbox360), 2222);
        assert_eq!(config.relay_operator_id, 212676144934289408);
    }

    /// Tests that the missing variable is named in the error.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("RELAY_OPERATOR_ID"))
    #[test]
    fn reports_the_missing_variable() {
        let vars: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(name, _)| *name != "RELAY_OPERATOR_ID")
            .collect();

        let result = Config::from_lookup(lookup_from(&vars));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "RELAY_OPERATOR_ID")
            }
            other => panic!("expected missing RELAY_OPERATOR_ID, got {:?}", other.err()),
        }
    }

    /// Tests that a blank required value counts as missing.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn treats_blank_token_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("DISCORD_BOT_TOKEN", "   ");

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    /// Tests overriding optional values.
    ///
    /// Expected: parsed color, timeout, log level and Chrome path
    #[test]
    fn reads_optional_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("EMBED_COLOR", "#2F3136"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("LOG_LEVEL", "debug"),
            ("CHROME_PATH", "/usr/bin/chromium"),
        ]);

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.embed_color, 0x2F3136);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
    }

    /// Tests rejecting a malformed channel ID.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming the variable
    #[test]
    fn rejects_malformed_channel_id() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("PS3_SEARCH_CHANNEL_ID", "search");

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "PS3_SEARCH_CHANNEL_ID"
        ));
    }
}

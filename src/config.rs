use crate::models::catalog::BornUpdatePolicy;
use anyhow::Context;
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug)]
pub struct Config {
    server_host: String,
    server_port: u16,
    persist_born: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps a variable name to its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let server_host = load_or(&lookup, "SERVER_HOST", DEFAULT_HOST.to_string())?;
        let server_port = load_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?;
        let persist_born = load_or(&lookup, "CATALOG_PERSIST_BORN", true)?;
        Ok(Self {
            server_host,
            server_port,
            persist_born,
        })
    }

    #[must_use]
    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    #[must_use]
    pub const fn server_port(&self) -> u16 {
        self.server_port
    }

    #[must_use]
    pub const fn born_update_policy(&self) -> BornUpdatePolicy {
        if self.persist_born {
            BornUpdatePolicy::Persist
        } else {
            BornUpdatePolicy::Discard
        }
    }
}

fn load_or<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .with_context(|| format!("Failed to parse environment variable {key}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.server_host(), "0.0.0.0");
        assert_eq!(config.server_port(), 4000);
        assert_eq!(config.born_update_policy(), BornUpdatePolicy::Persist);
    }

    #[test]
    fn reads_port_and_policy() {
        let config = config(&[("SERVER_PORT", "4001"), ("CATALOG_PERSIST_BORN", "false")]).unwrap();
        assert_eq!(config.server_port(), 4001);
        assert_eq!(config.born_update_policy(), BornUpdatePolicy::Discard);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = config(&[("SERVER_PORT", "four thousand")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }
}

//! Environment-driven configuration for the API process.

use std::net::SocketAddr;

use anyhow::{Context, bail};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE: &str = "anythink";
const DEV_JWT_SECRET: &str = "dev-secret";

/// Which document store backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process-local stores; contents vanish on restart.
    InMemory,
    Mongo { uri: String, database: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub store: StoreConfig,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    ///
    /// - `BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `JWT_SECRET` (insecure dev default, with a warning)
    /// - `USE_PERSISTENT_STORES=true` selects MongoDB, which requires
    ///   `MONGODB_URI`; `MONGODB_DATABASE` defaults to `anythink`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr:?}"))?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });

        let use_persistent = lookup("USE_PERSISTENT_STORES")
            .map(|v| v.trim().parse::<bool>().unwrap_or(false))
            .unwrap_or(false);

        let store = if use_persistent {
            let Some(uri) = lookup("MONGODB_URI") else {
                bail!("MONGODB_URI must be set when USE_PERSISTENT_STORES=true");
            };
            StoreConfig::Mongo {
                uri,
                database: lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            }
        } else {
            StoreConfig::InMemory
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_to_in_memory_dev_setup() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(cfg.store, StoreConfig::InMemory);
    }

    #[test]
    fn persistent_stores_need_a_uri() {
        let err = config(&[("USE_PERSISTENT_STORES", "true")]).unwrap_err();
        assert!(err.to_string().contains("MONGODB_URI"));
    }

    #[test]
    fn persistent_stores_pick_up_mongo_settings() {
        let cfg = config(&[
            ("USE_PERSISTENT_STORES", "true"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("JWT_SECRET", "prod"),
        ])
        .unwrap();
        assert_eq!(
            cfg.store,
            StoreConfig::Mongo {
                uri: "mongodb://db:27017".to_string(),
                database: "anythink".to_string(),
            }
        );
        assert_eq!(cfg.jwt_secret, "prod");
    }

    #[test]
    fn unparseable_flag_means_in_memory() {
        let cfg = config(&[("USE_PERSISTENT_STORES", "yes please")]).unwrap();
        assert_eq!(cfg.store, StoreConfig::InMemory);
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
    }
}

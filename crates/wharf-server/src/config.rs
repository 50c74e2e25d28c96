use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use wharf_store::{MemoryFactory, StoreFactory};

use crate::error::{ServerError, ServerResult};

/// Process-lifetime pub configuration.
///
/// Read at startup by the HTTP layer and registry, never mutated after.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PubConfig {
    /// Address and port to listen on.
    pub bind_addr: SocketAddr,
    /// When `true`, all write endpoints answer 403.
    pub readonly: bool,
    /// Whether a push may create a workspace that does not exist yet.
    /// Reads never create workspaces regardless of this flag.
    pub allow_push_to_new_workspaces: bool,
    /// Whether the homepage lists hosted workspaces or shows a generic
    /// notice.
    pub discoverable_workspaces: bool,
    /// Storage backend for newly created workspaces.
    pub storage: StorageKind,
    /// Pub title shown on the homepage.
    pub title: Option<String>,
    /// Longer notes shown on the homepage.
    pub notes: Option<String>,
}

impl Default for PubConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3333".parse().unwrap(),
            readonly: false,
            allow_push_to_new_workspaces: true,
            discoverable_workspaces: true,
            storage: StorageKind::Memory,
            title: None,
            notes: None,
        }
    }
}

impl PubConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| ServerError::Config(err.to_string()))
    }
}

/// Storage backend kinds for workspace stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Volatile in-memory stores; deleted workspaces lose their documents.
    Memory,
}

impl StorageKind {
    /// The store factory backing this kind.
    pub fn factory(self) -> Arc<dyn StoreFactory> {
        match self {
            Self::Memory => Arc::new(MemoryFactory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PubConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3333".parse::<SocketAddr>().unwrap());
        assert!(!config.readonly);
        assert!(config.allow_push_to_new_workspaces);
        assert!(config.discoverable_workspaces);
        assert_eq!(config.storage, StorageKind::Memory);
        assert!(config.title.is_none());
        assert!(config.notes.is_none());
    }

    #[test]
    fn parse_partial_toml() {
        let config: PubConfig = toml::from_str(
            r#"
            bind-addr = "127.0.0.1:8080"
            readonly = true
            title = "My pub"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(config.readonly);
        assert_eq!(config.title.as_deref(), Some("My pub"));
        // Unset keys fall back to defaults.
        assert!(config.allow_push_to_new_workspaces);
        assert_eq!(config.storage, StorageKind::Memory);
    }

    #[test]
    fn parse_storage_kind() {
        let config: PubConfig = toml::from_str(r#"storage = "memory""#).unwrap();
        assert_eq!(config.storage, StorageKind::Memory);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(PubConfig::load(Path::new("/nonexistent/wharf.toml")).is_err());
    }
}

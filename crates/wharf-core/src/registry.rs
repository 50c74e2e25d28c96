use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use wharf_store::{DocumentStore, StoreFactory};
use wharf_types::WorkspaceAddress;

use crate::error::{CoreError, CoreResult};

/// Maps workspace addresses to their document stores.
///
/// The registry owns exclusive mutation rights over the map: stores are
/// registered only by [`obtain`](Self::obtain) with `create_if_absent`,
/// and removed only by [`delete`](Self::delete). At most one live store
/// exists per address at any time; concurrent create-on-demand calls for
/// the same new address race for the write guard and the loser reuses the
/// winner's store.
///
/// Constructed once at process start and passed into the HTTP layer.
pub struct WorkspaceRegistry {
    factory: Arc<dyn StoreFactory>,
    stores: RwLock<HashMap<WorkspaceAddress, Arc<dyn DocumentStore>>>,
}

impl WorkspaceRegistry {
    pub fn new(factory: Arc<dyn StoreFactory>) -> Self {
        Self {
            factory,
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a workspace's store, optionally creating it.
    ///
    /// Returns `WorkspaceNotFound` when the address is unregistered and
    /// `create_if_absent` is false, and also when the address is malformed
    /// or the backend fails to construct a store. Creation failures are
    /// logged here and deliberately indistinguishable from "never existed"
    /// at the API boundary.
    pub async fn obtain(
        &self,
        address: &str,
        create_if_absent: bool,
    ) -> CoreResult<Arc<dyn DocumentStore>> {
        let not_found = || CoreError::WorkspaceNotFound(address.to_string());

        let addr = match WorkspaceAddress::parse(address) {
            Ok(addr) => addr,
            Err(err) => {
                tracing::debug!(%address, %err, "rejecting malformed workspace address");
                return Err(not_found());
            }
        };

        if let Some(store) = self.stores.read().await.get(&addr) {
            return Ok(Arc::clone(store));
        }
        if !create_if_absent {
            return Err(not_found());
        }

        // Check-then-construct-then-register must be atomic for this
        // address: hold the write guard across all three steps so N racing
        // creates produce exactly one store.
        let mut stores = self.stores.write().await;
        if let Some(store) = stores.get(&addr) {
            return Ok(Arc::clone(store));
        }
        match self.factory.open(&addr) {
            Ok(store) => {
                tracing::info!(workspace = %addr, "created workspace");
                stores.insert(addr, Arc::clone(&store));
                Ok(store)
            }
            Err(err) => {
                tracing::warn!(workspace = %addr, %err, "failed to create workspace store");
                Err(not_found())
            }
        }
    }

    /// Drop a workspace's store. Idempotent; unknown or malformed
    /// addresses are a no-op.
    ///
    /// Durable backing data (if the backend has any) is not destroyed;
    /// silent recreation by a later permitted write is expected.
    pub async fn delete(&self, address: &str) {
        let Ok(addr) = WorkspaceAddress::parse(address) else {
            return;
        };
        if self.stores.write().await.remove(&addr).is_some() {
            tracing::info!(workspace = %addr, "deleted workspace");
        }
    }

    /// All registered workspace addresses, ascending.
    pub async fn list(&self) -> Vec<WorkspaceAddress> {
        let mut addresses: Vec<WorkspaceAddress> =
            self.stores.read().await.keys().cloned().collect();
        addresses.sort();
        addresses
    }
}

impl std::fmt::Debug for WorkspaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceRegistry").finish_non_exhaustive()
    }
}

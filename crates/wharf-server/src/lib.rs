//! HTTP layer for the Wharf pub server.
//!
//! Hosts many isolated document workspaces for two kinds of clients:
//! browsers get read-only HTML views, sync peers get a small REST API to
//! list and push documents. Policy (read-only mode, create-on-push) is
//! enforced here, before any request reaches the workspace core.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use config::{PubConfig, StorageKind};
pub use error::{ServerError, ServerResult};
pub use server::WharfServer;
pub use state::AppState;

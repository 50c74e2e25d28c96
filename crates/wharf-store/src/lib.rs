//! Document store contract and backends for the Wharf pub server.
//!
//! A [`DocumentStore`] owns one workspace's documents and history: it
//! validates, applies, and classifies submitted documents, and answers
//! listing queries. The registry in `wharf-core` holds exactly one store
//! per workspace and never inspects documents itself.
//!
//! The only backend shipped here is [`MemoryStore`], a volatile in-memory
//! store. [`StoreFactory`] is the seam for adding durable backends.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryFactory, MemoryStore};
pub use traits::{DocumentStore, StoreFactory};

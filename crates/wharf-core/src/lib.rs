//! Workspace registry and ingestion/query operations for the Wharf pub server.
//!
//! This crate is the multi-tenant core: [`WorkspaceRegistry`] maps workspace
//! addresses to document stores and owns creation-on-demand and deletion,
//! [`IngestionPipeline`] applies batched uploads and tallies outcomes,
//! [`query`] answers read-only listing requests, and [`DemoSeeder`] keeps the
//! fixed demonstration workspace populated.
//!
//! Policy (read-only mode, create-on-push) is the HTTP layer's concern; the
//! registry only distinguishes "may create" from "must already exist".

pub mod error;
pub mod pipeline;
pub mod query;
pub mod registry;
pub mod seeder;

pub use error::{CoreError, CoreResult};
pub use pipeline::IngestionPipeline;
pub use registry::WorkspaceRegistry;
pub use seeder::{DemoSeeder, DEMO_AUTHOR, DEMO_DISPLAY_NAME, DEMO_WORKSPACE};

use wharf_types::{AuthorAddress, DocumentDraft};

use crate::error::CoreResult;
use crate::registry::WorkspaceRegistry;

/// Address of the fixed demonstration workspace.
pub const DEMO_WORKSPACE: &str = "+gardening.pals";

/// The demo workspace's hard-coded author identity.
pub const DEMO_AUTHOR: &str = "@bird.btr46n7ij6eq6hwnpvfcdakxqy3e6vz4e5vmw33ur7tjey5dkx6ea";

/// Display name stored in the demo author's about document.
pub const DEMO_DISPLAY_NAME: &str = "Bird, the example author";

/// Keeps the demonstration workspace present and populated.
///
/// Run once at process start and again on an explicit recreate request,
/// e.g. after someone deleted the demo workspace.
pub struct DemoSeeder;

impl DemoSeeder {
    /// Deterministic path of the seeded display-name document.
    pub fn about_path() -> String {
        format!("/about/~{DEMO_AUTHOR}/displayName.txt")
    }

    /// Obtain the demo workspace (creating it if absent) and write its one
    /// seeded document. Idempotent: the write lands in the same
    /// path/author slot every time, never duplicating.
    pub async fn ensure_seeded(registry: &WorkspaceRegistry) -> CoreResult<()> {
        let store = registry.obtain(DEMO_WORKSPACE, true).await?;
        let author = AuthorAddress::parse(DEMO_AUTHOR).expect("demo author address is valid");
        store
            .set(&author, DocumentDraft::new(Self::about_path(), DEMO_DISPLAY_NAME))
            .await?;
        tracing::debug!(workspace = DEMO_WORKSPACE, "seeded demo workspace");
        Ok(())
    }
}

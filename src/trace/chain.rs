use crate::types::{CapturedError, RawFrame};

/// Hard limit on cause-chain traversal depth. Anything past the cap is
/// treated as the root having been reached, so pathologically deep (or
/// cyclic) cause graphs truncate instead of failing.
pub const MAX_CHAIN_DEPTH: usize = 100;

/// One error in a cause chain, paired with the frames it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseLink {
    /// Fully qualified type name of the error.
    pub type_name: String,
    /// Human-readable message, if any.
    pub message: Option<String>,
    /// Stack frames in capture order; may be empty.
    pub frames: Vec<RawFrame>,
}

impl CauseLink {
    /// Marker text for the boundary this link introduces into the output.
    pub fn caused_by_label(&self) -> String {
        match &self.message {
            Some(msg) => format!("Caused by: {} (\"{msg}\")", self.type_name),
            None => format!("Caused by: {}", self.type_name),
        }
    }
}

/// Ordered cause chain: outermost error first, root cause last.
///
/// Built fresh per serialization call and never mutated afterwards. A walked
/// chain always holds at least one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    links: Vec<CauseLink>,
}

impl Chain {
    /// Follows the `cause` relation starting at `root`, snapshotting each
    /// visited error into an owned [`CauseLink`].
    ///
    /// The traversal only reads borrows out of the caller's error graph.
    /// Errors without frames still contribute a link. Traversal stops at
    /// [`MAX_CHAIN_DEPTH`] links.
    pub fn walk(root: &dyn CapturedError) -> Self {
        let mut links = Vec::new();
        let mut current: Option<&dyn CapturedError> = Some(root);
        while let Some(err) = current {
            if links.len() >= MAX_CHAIN_DEPTH {
                tracing::debug!(cap = MAX_CHAIN_DEPTH, "cause chain truncated at depth cap");
                break;
            }
            links.push(CauseLink {
                type_name: err.type_name().to_string(),
                message: err.message().map(str::to_string),
                frames: err.frames().to_vec(),
            });
            current = err.cause();
        }
        Self { links }
    }

    /// Builds a chain from already-materialized links, outermost first.
    pub fn from_links(links: Vec<CauseLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[CauseLink] {
        &self.links
    }
}

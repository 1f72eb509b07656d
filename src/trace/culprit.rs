use super::chain::Chain;

/// Determines the `type.method` call-site responsible for an error.
///
/// Scans the chain from the outermost error toward the root cause. Every
/// link that captured at least one frame overwrites the candidate with its
/// first frame, so the deepest link with frames wins. Links without frames
/// are skipped. Returns `None` when no link captured any frames; callers
/// must treat that as a valid outcome.
pub fn determine(chain: &Chain) -> Option<String> {
    let mut culprit = None;
    for link in chain.links() {
        if let Some(first) = link.frames.first() {
            culprit = Some(first.function());
        }
    }
    culprit
}

use super::Frame;
use super::chain::CauseLink;
use crate::types::RawFrame;

/// Counts the trailing frames two adjacent captures share.
///
/// Walks both sequences backward from their final entries and stops at the
/// first mismatch. Equality is exact value equality on file, type, method
/// and line.
pub fn frames_in_common(frames: &[RawFrame], caused: &[RawFrame]) -> usize {
    frames
        .iter()
        .rev()
        .zip(caused.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Emits output frames for one link in capture order.
///
/// The trailing `in_common` frames were already reported by the adjacent
/// link, so they are kept but marked as shared context rather than
/// application code.
pub fn annotated_frames(link: &CauseLink, in_common: usize) -> Vec<Frame> {
    let total = link.frames.len();
    link.frames
        .iter()
        .enumerate()
        .map(|(i, raw)| Frame::app_frame(raw, i + in_common < total))
        .collect()
}

pub mod chain;
pub mod culprit;
pub mod merge;

pub use chain::{CauseLink, Chain, MAX_CHAIN_DEPTH};

use crate::types::{CapturedError, RawFrame};

/// One entry of a serialized stack trace.
///
/// Regular frames always carry `function` and `in_app`. Caused-by boundary
/// markers carry only `filename`. Absent fields stay out of the wire
/// payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app: Option<bool>,
}

impl Frame {
    pub(crate) fn app_frame(raw: &RawFrame, in_app: bool) -> Self {
        Self {
            filename: raw.file.clone(),
            function: Some(raw.function()),
            lineno: raw.known_line(),
            in_app: Some(in_app),
        }
    }

    pub(crate) fn caused_by(link: &CauseLink) -> Self {
        Self {
            filename: Some(link.caused_by_label()),
            function: None,
            lineno: None,
            in_app: None,
        }
    }

    /// Whether this entry is a synthetic caused-by boundary marker rather
    /// than a captured call-site.
    pub fn is_marker(&self) -> bool {
        self.function.is_none()
    }
}

/// Culprit plus ordered frames for one serialized error chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SerializedTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culprit: Option<String>,
    pub frames: Vec<Frame>,
}

/// Serializes a walked chain into its wire trace.
///
/// Frames come out root cause first: the deepest link's frames lead
/// (reversed from capture order), each link boundary contributes exactly one
/// caused-by marker, and the outermost error's frames close the sequence.
/// Trailing frames a link shares with the error it caused are kept but
/// marked `in_app = false`.
pub fn serialize_chain(chain: &Chain) -> SerializedTrace {
    let mut frames: Vec<Frame> = Vec::new();
    let mut caused: Option<&[RawFrame]> = None;
    for (i, link) in chain.links().iter().enumerate() {
        if i > 0 {
            frames.push(Frame::caused_by(link));
        }
        let in_common = caused.map_or(0, |prev| merge::frames_in_common(&link.frames, prev));
        frames.extend(merge::annotated_frames(link, in_common));
        caused = Some(&link.frames);
    }
    frames.reverse();

    SerializedTrace {
        culprit: culprit::determine(chain),
        frames,
    }
}

/// Walks `root`'s cause chain and serializes it in one call.
pub fn serialize_error(root: &dyn CapturedError) -> SerializedTrace {
    serialize_chain(&Chain::walk(root))
}

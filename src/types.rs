/// One call-site of a stack snapshot, as captured by the runtime at throw time.
///
/// Frames are kept in capture order: index 0 is the call-site where the
/// capture began.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RawFrame {
    /// Source file name, if the runtime recorded one.
    pub file: Option<String>,
    /// Fully qualified name of the type declaring the call-site.
    pub type_name: String,
    /// Method or function name within `type_name`.
    pub method: String,
    /// Line number as captured. `None` or a non-positive value means unknown.
    pub line: Option<i64>,
}

impl RawFrame {
    /// `type.method` identifier for this call-site.
    pub fn function(&self) -> String {
        format!("{}.{}", self.type_name, self.method)
    }

    /// Line number usable in output. Non-positive captures count as unknown.
    pub fn known_line(&self) -> Option<u32> {
        match self.line {
            Some(n) if n > 0 => Some(n as u32),
            _ => None,
        }
    }
}

/// Read-only view of a captured error and its cause relation.
///
/// `cause` is a back-reference into a graph the caller keeps alive for the
/// duration of one serialization call; implementations hand out borrows,
/// never ownership. Frame capture itself is the runtime's job, this crate
/// only reads what was captured.
pub trait CapturedError {
    /// Fully qualified type name of the error.
    fn type_name(&self) -> &str;

    /// Human-readable message, if any.
    fn message(&self) -> Option<&str>;

    /// Module or package declaring the error type, if known.
    fn module(&self) -> Option<&str>;

    /// The error this one was caused by, or `None` at the root cause.
    fn cause(&self) -> Option<&dyn CapturedError>;

    /// Stack frames in capture order.
    fn frames(&self) -> &[RawFrame];
}

/// Owned error capture for embedders that receive errors as data rather
/// than live values, e.g. across the wasm boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorSnapshot {
    /// Fully qualified type name of the error.
    pub type_name: String,
    /// Human-readable message, if any.
    pub message: Option<String>,
    /// Module or package declaring the error type, if known.
    pub module: Option<String>,
    /// Stack frames in capture order; may be empty.
    #[serde(default)]
    pub frames: Vec<RawFrame>,
    /// The error this one was caused by, if any.
    pub cause: Option<Box<ErrorSnapshot>>,
}

impl CapturedError for ErrorSnapshot {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    fn cause(&self) -> Option<&dyn CapturedError> {
        self.cause.as_deref().map(|c| c as &dyn CapturedError)
    }

    fn frames(&self) -> &[RawFrame] {
        &self.frames
    }
}

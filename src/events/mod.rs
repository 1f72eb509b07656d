pub mod exception;
pub mod message;
pub mod query;

/// Payload section holding the message interface.
pub const MESSAGE_INTERFACE: &str = "sentry.interfaces.Message";
/// Payload section holding the query interface.
pub const QUERY_INTERFACE: &str = "sentry.interfaces.Query";
/// Payload section holding the outermost error's identity.
pub const EXCEPTION_INTERFACE: &str = "sentry.interfaces.Exception";
/// Payload section holding the serialized stack trace.
pub const STACKTRACE_INTERFACE: &str = "sentry.interfaces.Stacktrace";

/// Event severity. A closed set: a new severity gets a new variant here,
/// never a bare wire code at a call site.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Error,
}

impl Level {
    /// Numeric severity code understood by the backend wire protocol.
    pub fn wire_code(self) -> u64 {
        match self {
            Self::Error => 5,
        }
    }
}

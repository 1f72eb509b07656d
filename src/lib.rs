#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod events;
pub mod trace;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use events::exception::{exception, exception_into};
pub use events::message::{message, message_into};
pub use events::query::{query, query_into};
pub use events::{
    EXCEPTION_INTERFACE, Level, MESSAGE_INTERFACE, QUERY_INTERFACE, STACKTRACE_INTERFACE,
};
pub use trace::{
    CauseLink, Chain, Frame, MAX_CHAIN_DEPTH, SerializedTrace, serialize_chain, serialize_error,
};
pub use types::{CapturedError, ErrorSnapshot, RawFrame};

use serde_json::{Map, Value};

use super::{EXCEPTION_INTERFACE, Level, STACKTRACE_INTERFACE};
use crate::error::Error;
use crate::trace::{Chain, serialize_chain};
use crate::types::CapturedError;

/// Builds a standalone exception event payload.
pub fn exception(error: &dyn CapturedError) -> Result<Map<String, Value>, Error> {
    let mut json = Map::new();
    exception_into(&mut json, error)?;
    Ok(json)
}

/// Adds level, culprit, error identity and stack trace to an existing
/// payload.
///
/// The identity section describes the outermost error; its causes are folded
/// into the stack trace section. The `culprit` key is omitted when no link
/// in the chain captured any frames.
pub fn exception_into(json: &mut Map<String, Value>, error: &dyn CapturedError) -> Result<(), Error> {
    let chain = Chain::walk(error);
    let trace = serialize_chain(&chain);

    json.insert("level".to_string(), Value::from(Level::Error.wire_code()));
    if let Some(culprit) = &trace.culprit {
        json.insert("culprit".to_string(), Value::String(culprit.clone()));
    }
    json.insert(
        EXCEPTION_INTERFACE.to_string(),
        Value::Object(identity(error)),
    );

    let mut stacktrace = Map::new();
    stacktrace.insert("frames".to_string(), serde_json::to_value(&trace.frames)?);
    json.insert(STACKTRACE_INTERFACE.to_string(), Value::Object(stacktrace));
    Ok(())
}

fn identity(error: &dyn CapturedError) -> Map<String, Value> {
    let mut content = Map::new();
    content.insert(
        "type".to_string(),
        Value::String(error.type_name().to_string()),
    );
    content.insert("value".to_string(), optional_string(error.message()));
    content.insert("module".to_string(), optional_string(error.module()));
    content
}

fn optional_string(value: Option<&str>) -> Value {
    match value {
        Some(s) => Value::String(s.to_string()),
        None => Value::Null,
    }
}

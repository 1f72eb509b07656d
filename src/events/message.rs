use serde_json::{Map, Value};

use super::MESSAGE_INTERFACE;

/// Builds a standalone message event payload.
pub fn message(text: &str, params: &[Value]) -> Map<String, Value> {
    let mut json = Map::new();
    message_into(&mut json, text, params);
    json
}

/// Adds the message interface to an existing payload.
///
/// `params` are positional substitution values the backend interpolates into
/// `text`; an empty slice still emits an empty `params` array.
pub fn message_into(json: &mut Map<String, Value>, text: &str, params: &[Value]) {
    let mut content = Map::new();
    content.insert("message".to_string(), Value::String(text.to_string()));
    content.insert("params".to_string(), Value::Array(params.to_vec()));
    json.insert(MESSAGE_INTERFACE.to_string(), Value::Object(content));
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::{message, message_into};
    use crate::events::MESSAGE_INTERFACE;
    use serde_json::{Value, json};

    #[test]
    fn message_payload_shape() {
        let payload = message("job {0} failed", &[json!("cleanup")]);
        let content = payload.get(MESSAGE_INTERFACE).unwrap();
        assert_eq!(content["message"], json!("job {0} failed"));
        assert_eq!(content["params"], json!(["cleanup"]));
    }

    #[test]
    fn no_params_still_emits_empty_array() {
        let payload = message("plain", &[]);
        let content = payload.get(MESSAGE_INTERFACE).unwrap();
        assert_eq!(content["params"], json!([]));
    }

    #[test]
    fn message_into_preserves_existing_fields() {
        let mut payload = serde_json::Map::new();
        payload.insert("timestamp".to_string(), Value::from(1_700_000_000));
        message_into(&mut payload, "hello", &[]);

        assert!(payload.contains_key("timestamp"));
        assert!(payload.contains_key(MESSAGE_INTERFACE));
    }
}

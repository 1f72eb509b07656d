use serde_json::{Map, Value};

use super::QUERY_INTERFACE;

/// Builds a standalone query event payload.
pub fn query(query: &str, engine: &str) -> Map<String, Value> {
    let mut json = Map::new();
    query_into(&mut json, query, engine);
    json
}

/// Adds the query interface to an existing payload.
pub fn query_into(json: &mut Map<String, Value>, query: &str, engine: &str) {
    let mut content = Map::new();
    content.insert("query".to_string(), Value::String(query.to_string()));
    content.insert("engine".to_string(), Value::String(engine.to_string()));
    json.insert(QUERY_INTERFACE.to_string(), Value::Object(content));
}

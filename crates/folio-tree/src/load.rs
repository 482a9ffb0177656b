//! Content tree loading.
//!
//! The tree is a JSON object. Each key is a topic name whose value is an object; inside it,
//! two reserved keys describe the topic itself and every other key is a child topic:
//!
//! ```json
//! {
//!   "Algorithms": {
//!     "___urlPath___": "algorithms",
//!     "Sorting": { "___md___": 12, "___urlPath___": "sorting" },
//!     "Graphs": { "___md___": 13 }
//!   }
//! }
//! ```

use serde_json::{Map, Value};

use crate::{DocId, Topic, TreeError, slug::segment_slug};

/// Reserved key holding a topic's document id.
pub const DOC_KEY: &str = "___md___";

/// Reserved key holding a topic's URL segment.
pub const URL_PATH_KEY: &str = "___urlPath___";

/// Converts the parsed JSON root into top-level topics.
pub fn topics_from_value(value: &Value) -> Result<Vec<Topic>, TreeError> {
    let Value::Object(map) = value else {
        return Err(TreeError::InvalidNode {
            location: "(root)".to_string(),
            reason: format!("expected an object, found {}", kind(value)),
        });
    };

    let mut trail = Vec::new();
    children_from_map(map, &mut trail)
}

/// Builds child topics from every non-reserved key of `map`.
fn children_from_map(
    map: &Map<String, Value>,
    trail: &mut Vec<String>,
) -> Result<Vec<Topic>, TreeError> {
    let mut children = Vec::new();
    for (key, value) in map {
        if key == DOC_KEY || key == URL_PATH_KEY {
            continue;
        }
        trail.push(key.clone());
        let topic = topic_from_value(key, value, trail)?;
        trail.pop();
        children.push(topic);
    }
    Ok(children)
}

/// Builds one topic. `trail` ends with `name`.
fn topic_from_value(name: &str, value: &Value, trail: &mut Vec<String>) -> Result<Topic, TreeError> {
    let Value::Object(map) = value else {
        return Err(invalid(
            trail,
            format!("expected an object, found {}", kind(value)),
        ));
    };

    let doc = map
        .get(DOC_KEY)
        .map(|v| doc_id_from_value(v, trail))
        .transpose()?;
    let url_path = map
        .get(URL_PATH_KEY)
        .map(|v| url_path_from_value(v, trail))
        .transpose()?;
    let segment = url_path.clone().unwrap_or_else(|| segment_slug(name));
    let children = children_from_map(map, trail)?;

    Ok(Topic {
        name: name.to_string(),
        url_path,
        segment,
        doc,
        children,
    })
}

/// Reads a document id: a non-negative integer, or a string of digits.
fn doc_id_from_value(value: &Value, trail: &[String]) -> Result<DocId, TreeError> {
    match value {
        Value::Number(n) => n.as_u64().map(DocId).ok_or_else(|| {
            invalid(
                trail,
                format!("{DOC_KEY} must be a non-negative integer, found {n}"),
            )
        }),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s
            .parse()
            .map_err(|e| invalid(trail, format!("{DOC_KEY}: {e}"))),
        other => Err(invalid(
            trail,
            format!("{DOC_KEY} must be a non-negative integer, found {}", kind(other)),
        )),
    }
}

/// Reads a URL segment: a non-empty string without inner slashes.
fn url_path_from_value(value: &Value, trail: &[String]) -> Result<String, TreeError> {
    let Value::String(s) = value else {
        return Err(invalid(
            trail,
            format!("{URL_PATH_KEY} must be a string, found {}", kind(value)),
        ));
    };
    let trimmed = s.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(invalid(
            trail,
            format!("{URL_PATH_KEY} must be a single non-empty segment, found '{s}'"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Builds an `InvalidNode` error for the node at `trail`.
fn invalid(trail: &[String], reason: String) -> TreeError {
    TreeError::InvalidNode {
        location: trail.join(" › "),
        reason,
    }
}

/// Describes a JSON value's type for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

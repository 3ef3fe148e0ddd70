//! Key-path traversal over JSON objects
//!
//! Manifest paths are plain key sequences such as `["jspm", "directories",
//! "baseURL"]`. Traversal never indexes into arrays; a path that runs into a
//! non-object value simply does not exist.

use serde_json::{Map, Value};

use crate::order::KeyOrder;

/// Join a key path for error messages (`jspm.directories.baseURL`).
pub fn display_path(path: &[&str]) -> String {
    path.join(".")
}

/// A short name for the JSON type of `value`.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Get the value at `path`, or `None` if any segment is missing.
pub fn get_at_path<'a>(root: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let value = root.get(*first)?;
    if rest.is_empty() {
        return Some(value);
    }
    match value {
        Value::Object(child) => get_at_path(child, rest),
        _ => None,
    }
}

/// Set `value` at `path`, creating intermediate objects as needed.
///
/// Scalars standing where an intermediate object is required are replaced.
/// New keys are placed according to `order`.
pub fn set_at_path(
    root: &mut Map<String, Value>,
    path: &[&str],
    value: Value,
    order: Option<&KeyOrder>,
) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        insert_ordered(root, first, value, order);
        return;
    }

    if !matches!(root.get(*first), Some(Value::Object(_))) {
        insert_ordered(root, first, Value::Object(Map::new()), order);
    }

    if let Some(Value::Object(child)) = root.get_mut(*first) {
        set_at_path(child, rest, value, order.and_then(|o| o.child(first)));
    }
}

/// Remove the value at `path`, keeping the order of the remaining siblings.
pub fn remove_at_path(root: &mut Map<String, Value>, path: &[&str]) -> Option<Value> {
    let (first, rest) = path.split_first()?;

    if rest.is_empty() {
        let removed = root.get(*first).cloned()?;
        root.retain(|key, _| key.as_str() != *first);
        return Some(removed);
    }

    match root.get_mut(*first) {
        Some(Value::Object(child)) => remove_at_path(child, rest),
        _ => None,
    }
}

/// Insert `key`, keeping its current slot if it already exists.
///
/// A new key known to `order` goes before the first existing sibling that the
/// schema ranks after it; anything else is appended.
pub fn insert_ordered(
    map: &mut Map<String, Value>,
    key: &str,
    value: Value,
    order: Option<&KeyOrder>,
) {
    if let Some(slot) = map.get_mut(key) {
        *slot = value;
        return;
    }

    let insert_before = order.and_then(|order| {
        let rank = order.position(key)?;
        map.keys()
            .position(|existing| order.position(existing).is_some_and(|r| r > rank))
    });

    let Some(index) = insert_before else {
        map.insert(key.to_string(), value);
        return;
    };

    let previous = std::mem::take(map);
    let mut pending = Some(value);
    for (i, (existing_key, existing_value)) in previous.into_iter().enumerate() {
        if i == index {
            if let Some(value) = pending.take() {
                map.insert(key.to_string(), value);
            }
        }
        map.insert(existing_key, existing_value);
    }
}

/// Merge `incoming` over `existing`: surviving keys keep their old position,
/// dropped keys disappear, new keys are appended. Nested objects merge the
/// same way.
pub fn merge_preserving_order(
    existing: &Map<String, Value>,
    incoming: Map<String, Value>,
) -> Map<String, Value> {
    let mut incoming = incoming;
    let mut merged = Map::new();

    for (key, old_value) in existing {
        let Some(new_value) = incoming.get(key).cloned() else {
            continue;
        };
        let value = match (old_value, new_value) {
            (Value::Object(old), Value::Object(new)) => {
                Value::Object(merge_preserving_order(old, new))
            }
            (_, new) => new,
        };
        merged.insert(key.clone(), value);
    }

    incoming.retain(|key, _| !merged.contains_key(key));
    for (key, value) in incoming {
        merged.insert(key, value);
    }
    merged
}

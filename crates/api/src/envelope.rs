//! Payload unwrapping for inconsistently wrapped success bodies.

use serde_json::Value;

/// Wrapper keys the backends have used, in resolution order.
const ENVELOPE_KEYS: [&str; 8] = [
    "data", "Data", "result", "Result", "items", "accounts", "rows", "list",
];

/// Unwraps the payload from whichever envelope the backend chose.
///
/// Checks the known wrapper keys in their historical priority order; the
/// first present, non-null key wins. Anything else, including a bare array,
/// is already the payload and is returned unchanged.
#[must_use]
pub fn unwrap_payload(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            let hit = ENVELOPE_KEYS
                .iter()
                .find(|key| map.get(**key).is_some_and(|v| !v.is_null()));
            match hit {
                Some(key) => map.remove(*key).unwrap_or(Value::Null),
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

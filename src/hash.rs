//! Keying functions: how a vertex value maps to the key that identifies it.
//!
//! A key function must be pure and deterministic. Two logically distinct
//! vertices that produce the same key are treated as one vertex; the graph
//! cannot detect such a collision.

/// A boxed key function bound to a graph for its whole lifetime.
///
/// The function must be `Send + Sync` so that a graph can be moved behind a
/// caller's lock and shared between threads.
pub type KeyFn<K, T> = Box<dyn Fn(&T) -> K + Send + Sync>;

/// Use a vertex value as its own key.
pub fn identity<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Key function for integer vertices.
pub fn int_hash(value: &i64) -> i64 {
    *value
}

/// Key function for string vertices.
#[allow(clippy::ptr_arg)]
pub fn string_hash(value: &String) -> String {
    value.clone()
}

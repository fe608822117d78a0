//! Core types for the key-value store
//!
//! This module defines the two opaque string types that flow through
//! every layer:
//! - [`Key`]: Identifier of an entry in the primary store
//! - [`Value`]: Payload stored under a key, also the lookup term of the
//!   value index
//!
//! Both are thin newtypes over `String`. They borrow as `str`, so maps keyed
//! by them can be queried with a plain `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key of an entry in the primary store
///
/// Keys are opaque: no structure, case folding or validation is applied.
///
/// # Examples
///
/// ```
/// use tallykv_core::Key;
///
/// let key = Key::from("a");
/// assert_eq!(key.as_str(), "a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from anything string-like
    pub fn new(key: impl Into<String>) -> Self {
        Key(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Value stored under a key
///
/// Values are opaque strings. The text `"NULL"` is an ordinary value here;
/// absence is always modelled as `Option::<Value>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    /// Create a value from anything string-like
    pub fn new(value: impl Into<String>) -> Self {
        Value(value.into())
    }

    /// Borrow the value as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                $ty(s.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                $ty(s)
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_newtype_impls!(Key);
string_newtype_impls!(Value);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_key_borrows_as_str() {
        let mut map = HashMap::new();
        map.insert(Key::from("a"), 1);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }

    #[test]
    fn test_value_display_is_raw_text() {
        let value = Value::new("hello world");
        assert_eq!(value.to_string(), "hello world");
    }

    #[test]
    fn test_null_text_is_an_ordinary_value() {
        let value = Value::from("NULL");
        assert_eq!(value, "NULL");
        assert_ne!(Some(value), None);
    }

    #[test]
    fn test_serde_transparent() {
        let key = Key::from("k1");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""k1""#);

        let back: Value = serde_json::from_str(r#""10""#).unwrap();
        assert_eq!(back, Value::from("10"));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut keys = vec![Key::from("b"), Key::from("a"), Key::from("ab")];
        keys.sort();
        assert_eq!(keys, vec![Key::from("a"), Key::from("ab"), Key::from("b")]);
    }
}

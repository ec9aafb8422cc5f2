//! Dynamic value representation for VDF data.
//!
//! This module provides the [`Value`] enum, the slot type stored under every
//! key of a [`VdfNode`]. A slot is either a raw string leaf or a nested node;
//! VDF has no other shapes, so all typing beyond that (integers, floats,
//! pointers) happens at read time through the accessors on [`VdfNode`].
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use vdf::{Value, VdfNode};
//!
//! // From primitives
//! let leaf = Value::from("hello");
//! let child = Value::from(VdfNode::new());
//!
//! // Using the vdf! macro
//! use vdf::vdf;
//! let node = vdf! {
//!     "name" => "Alice",
//!     "settings" => {
//!         "volume" => "0.5",
//!     },
//! };
//! assert_eq!(node.get_str("name"), Some("Alice"));
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use vdf::Value;
//!
//! let value = Value::from("42");
//! assert!(value.is_string());
//! assert!(!value.is_node());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use vdf::{Value, VdfNode};
//!
//! let leaf = Value::from("hello");
//! assert_eq!(leaf.as_str(), Some("hello"));
//! assert!(leaf.as_node().is_none());
//!
//! let child = Value::from(VdfNode::new());
//! assert!(child.as_node().is_some());
//! ```

use crate::VdfNode;
use std::fmt;

/// A single slot in a VDF document: a string leaf or a nested node.
///
/// Every value in a parsed document is stored as its raw string exactly as it
/// appeared (after escape processing); nothing is coerced at parse time.
/// Numeric interpretation is deferred to the typed readers on [`VdfNode`].
///
/// # Examples
///
/// ```rust
/// use vdf::{Value, VdfNode};
///
/// let leaf = Value::String("128".to_string());
/// let child = Value::Node(VdfNode::new());
///
/// assert!(leaf.is_string());
/// assert!(child.is_node());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    String(String),
    Node(VdfNode),
}

impl Value {
    /// Returns `true` if the value is a string leaf.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a nested node.
    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// If the value is a string leaf, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::{Value, VdfNode};
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(VdfNode::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Node(_) => None,
        }
    }

    /// If the value is a nested node, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::{Value, VdfNode};
    ///
    /// assert!(Value::from(VdfNode::new()).as_node().is_some());
    /// assert_eq!(Value::from("leaf").as_node(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&VdfNode> {
        match self {
            Value::Node(node) => Some(node),
            Value::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}

// From implementations for creating Value from primitives
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<VdfNode> for Value {
    fn from(value: VdfNode) -> Self {
        Value::Node(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Node(node) => serde::Serialize::serialize(node, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
        assert_eq!(Value::from(VdfNode::new()), Value::Node(VdfNode::new()));
    }

    #[test]
    fn test_type_checks() {
        let leaf = Value::from("hello");
        assert!(leaf.is_string());
        assert!(!leaf.is_node());

        let child = Value::from(VdfNode::new());
        assert!(child.is_node());
        assert!(!child.is_string());
    }

    #[test]
    fn test_accessors() {
        let leaf = Value::from("hello");
        assert_eq!(leaf.as_str(), Some("hello"));
        assert!(leaf.as_node().is_none());

        let child = Value::from(VdfNode::new());
        assert!(child.as_str().is_none());
        assert!(child.as_node().is_some());
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_string(v: &Value) -> bool {
            v.is_string()
        }

        let leaf = Value::String(String::new());
        assert!(check_string(&leaf));
    }

    #[test]
    fn test_display_leaf() {
        let leaf = Value::from("raw content");
        assert_eq!(leaf.to_string(), "raw content");
    }
}

//! Multimap tree type for VDF documents.
//!
//! This module provides [`VdfNode`], the result of every parse and the unit
//! of document structure: a map from string keys to *sequences* of [`Value`]
//! slots. VDF allows the same key to appear many times in one node, so each
//! key owns an ordered sequence rather than a single value. Repeated puts
//! append; readers address a slot by key and index.
//!
//! ## Why `BTreeMap`?
//!
//! Node storage is a `BTreeMap` rather than a hash map to ensure:
//!
//! - **Deterministic output**: keys serialize in ascending order
//! - **Iteration order**: `keys()`/`iter()` walk keys in ascending order
//! - **Compatibility**: repeated parse/write cycles produce identical text
//!
//! Only the sequence *within* one key preserves document order.
//!
//! ## Examples
//!
//! ```rust
//! use vdf::VdfNode;
//!
//! let mut node = VdfNode::new();
//! node.put("name", "Alice");
//! node.put("name", "Bob");
//!
//! assert_eq!(node.values("name"), 2);
//! assert_eq!(node.get_str("name"), Some("Alice"));
//! assert_eq!(node.get_str_at("name", 1), Some("Bob"));
//! ```

use crate::error::{Error, Result};
use crate::options::MultimapPolicy;
use crate::value::Value;
use crate::writer::Writer;
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// A node in a VDF document: an ordered multimap of string keys to values.
///
/// Every key maps to one or more [`Value`] slots, each either a string leaf
/// or a nested `VdfNode`. The root of a parsed document is itself a node.
///
/// Absent keys are never errors: string readers answer `None`, numeric
/// readers answer a default. Only a value that is *present* but fails to
/// parse as the requested type produces [`Error::Conversion`].
///
/// # Examples
///
/// ```rust
/// use vdf::VdfNode;
///
/// let root = vdf::parse("\"settings\" { \"volume\" \"0.5\" \"port\" \"27015\" }").unwrap();
/// let settings = root.get_node("settings").unwrap();
///
/// assert_eq!(settings.get_f32("volume").unwrap(), 0.5);
/// assert_eq!(settings.get_i32("port").unwrap(), 27015);
/// assert_eq!(settings.get_i32("missing").unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdfNode(BTreeMap<String, Vec<Value>>);

impl VdfNode {
    /// Creates an empty node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let node = VdfNode::new();
    /// assert!(node.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        VdfNode(BTreeMap::new())
    }

    /// Returns the number of distinct keys in this node.
    ///
    /// Repeated keys count once; use [`values`](VdfNode::values) for the
    /// number of slots under one key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("key", "a");
    /// node.put("key", "b");
    /// assert_eq!(node.len(), 1);
    /// assert_eq!(node.values("key"), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the node contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the node, in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Vec<Value>> {
        self.0.keys()
    }

    /// Returns an iterator over key-sequence pairs, in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Value>> {
        self.0.iter()
    }

    /// Appends a value to the back of the key's sequence.
    ///
    /// A fresh key starts a new sequence; an existing key grows by one slot.
    /// Returns a reference to the value as stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::{VdfNode, Value};
    ///
    /// let mut node = VdfNode::new();
    /// node.put("key", "first");
    /// node.put("key", "second");
    /// node.put("child", VdfNode::new());
    ///
    /// assert_eq!(node.values("key"), 2);
    /// assert!(node.get_at("child", 0).unwrap().is_node());
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &Value {
        let slots = self.0.entry(key.into()).or_default();
        slots.push(value.into());
        &slots[slots.len() - 1]
    }

    /// Appends a value subject to a [`MultimapPolicy`].
    ///
    /// [`Append`](MultimapPolicy::Append) always appends.
    /// [`Reject`](MultimapPolicy::Reject) silently drops the value when the
    /// key already exists; [`Fail`](MultimapPolicy::Fail) returns
    /// [`Error::DuplicateKey`] instead. [`AutoReduce`](MultimapPolicy::AutoReduce)
    /// appends and then collapses that key's sequence the way
    /// [`reduce`](VdfNode::reduce) would (non-recursively), and
    /// [`AutoReduceEnd`](MultimapPolicy::AutoReduceEnd) appends, deferring the
    /// collapse to whoever finishes building the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::{MultimapPolicy, VdfNode};
    ///
    /// let mut node = VdfNode::new();
    /// node.put_with_policy("key", "first", MultimapPolicy::Fail).unwrap();
    /// let err = node.put_with_policy("key", "second", MultimapPolicy::Fail);
    /// assert!(err.is_err());
    ///
    /// let mut node = VdfNode::new();
    /// node.put_with_policy("key", "first", MultimapPolicy::Reject).unwrap();
    /// node.put_with_policy("key", "second", MultimapPolicy::Reject).unwrap();
    /// assert_eq!(node.values("key"), 1);
    /// assert_eq!(node.get_str("key"), Some("first"));
    /// ```
    pub fn put_with_policy(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        policy: MultimapPolicy,
    ) -> Result<()> {
        let key = key.into();
        let exists = self.0.contains_key(&key);
        match policy {
            MultimapPolicy::Reject if exists => Ok(()),
            MultimapPolicy::Fail if exists => Err(Error::DuplicateKey { key }),
            MultimapPolicy::AutoReduce => {
                let slots = self.0.entry(key).or_default();
                slots.push(value.into());
                Self::reduce_group(slots, false);
                Ok(())
            }
            _ => {
                self.put(key, value);
                Ok(())
            }
        }
    }

    /// Returns the number of values stored under the key, or 0 when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("key", "a");
    /// node.put("key", "b");
    ///
    /// assert_eq!(node.values("key"), 2);
    /// assert_eq!(node.values("missing"), 0);
    /// ```
    #[must_use]
    pub fn values(&self, key: &str) -> usize {
        self.0.get(key).map_or(0, Vec::len)
    }

    /// Returns the key's whole value sequence, or `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the nth value under the key, or `None` when key or index is absent.
    #[must_use]
    pub fn get_at(&self, key: &str, index: usize) -> Option<&Value> {
        self.0.get(key).and_then(|slots| slots.get(index))
    }

    /// Returns the first string value under the key.
    ///
    /// Answers `None` when the key is absent or its first value is a nested
    /// node rather than a leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("name", "Alice");
    ///
    /// assert_eq!(node.get_str("name"), Some("Alice"));
    /// assert_eq!(node.get_str("missing"), None);
    /// ```
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_str_at(key, 0)
    }

    /// Returns the nth string value under the key.
    #[must_use]
    pub fn get_str_at(&self, key: &str, index: usize) -> Option<&str> {
        self.get_at(key, index).and_then(Value::as_str)
    }

    /// Returns the first string value under the key, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let node = VdfNode::new();
    /// assert_eq!(node.get_str_or("missing", "fallback"), "fallback");
    /// ```
    #[must_use]
    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    /// Reads the first value under the key as an `i32`.
    ///
    /// An absent key reads as `Ok(0)`; a present value that does not parse
    /// produces [`Error::Conversion`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("count", "42");
    /// node.put("broken", "forty-two");
    ///
    /// assert_eq!(node.get_i32("count").unwrap(), 42);
    /// assert_eq!(node.get_i32("missing").unwrap(), 0);
    /// assert!(node.get_i32("broken").is_err());
    /// ```
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get_i32_or(key, 0)
    }

    /// Reads the first value under the key as an `i32`, or `default` when absent.
    pub fn get_i32_or(&self, key: &str, default: i32) -> Result<i32> {
        match self.get_str(key) {
            Some(raw) => raw
                .parse()
                .map_err(|err| Error::conversion(key, raw, "i32", err)),
            None => Ok(default),
        }
    }

    /// Reads the first value under the key as an `i64`.
    ///
    /// An absent key reads as `Ok(0)`; a present value that does not parse
    /// produces [`Error::Conversion`].
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_i64_or(key, 0)
    }

    /// Reads the first value under the key as an `i64`, or `default` when absent.
    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        match self.get_str(key) {
            Some(raw) => raw
                .parse()
                .map_err(|err| Error::conversion(key, raw, "i64", err)),
            None => Ok(default),
        }
    }

    /// Reads the first value under the key as an `f32`.
    ///
    /// An absent key reads as `Ok(0.0)`; a present value that does not parse
    /// produces [`Error::Conversion`].
    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.get_f32_or(key, 0.0)
    }

    /// Reads the first value under the key as an `f32`, or `default` when absent.
    pub fn get_f32_or(&self, key: &str, default: f32) -> Result<f32> {
        match self.get_str(key) {
            Some(raw) => raw
                .parse()
                .map_err(|err| Error::conversion(key, raw, "f32", err)),
            None => Ok(default),
        }
    }

    /// Reads the first value under the key as a base-16 pointer value.
    ///
    /// VDF stores pointers as bare hexadecimal digits without a `0x` prefix.
    /// An absent key reads as `Ok(0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("handle", "deadbeef");
    ///
    /// assert_eq!(node.get_pointer("handle").unwrap(), 0xdead_beef);
    /// assert_eq!(node.get_pointer("missing").unwrap(), 0);
    /// ```
    pub fn get_pointer(&self, key: &str) -> Result<u64> {
        match self.get_str(key) {
            Some(raw) => u64::from_str_radix(raw, 16)
                .map_err(|err| Error::conversion(key, raw, "pointer", err)),
            None => Ok(0),
        }
    }

    /// Reads the first value under the key as any [`FromStr`] type.
    ///
    /// This is the extension point for domain value types this crate does not
    /// know about. An absent key (or a nested node in the first slot) reads
    /// as `Ok(None)`; a leaf that fails to parse produces
    /// [`Error::Conversion`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::net::Ipv4Addr;
    /// use vdf::VdfNode;
    ///
    /// let mut node = VdfNode::new();
    /// node.put("addr", "192.168.0.1");
    ///
    /// let addr: Option<Ipv4Addr> = node.get_parsed("addr").unwrap();
    /// assert_eq!(addr, Some(Ipv4Addr::new(192, 168, 0, 1)));
    ///
    /// let missing: Option<Ipv4Addr> = node.get_parsed("missing").unwrap();
    /// assert_eq!(missing, None);
    /// ```
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get_str(key) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|err| Error::conversion(key, raw, std::any::type_name::<T>(), err)),
            None => Ok(None),
        }
    }

    /// Returns the first child node under the key.
    ///
    /// Answers `None` when the key is absent or its first value is a string
    /// leaf rather than a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::VdfNode;
    ///
    /// let root = vdf::parse("\"child\" { \"key\" \"value\" }").unwrap();
    /// let child = root.get_node("child").unwrap();
    /// assert_eq!(child.get_str("key"), Some("value"));
    /// ```
    #[must_use]
    pub fn get_node(&self, key: &str) -> Option<&VdfNode> {
        self.get_node_at(key, 0)
    }

    /// Returns the nth child node under the key.
    #[must_use]
    pub fn get_node_at(&self, key: &str, index: usize) -> Option<&VdfNode> {
        self.get_at(key, index).and_then(Value::as_node)
    }

    /// Appends a clone of every key-value pair of this node into `other`.
    ///
    /// Pairs arrive in ascending key order, each key's values in sequence
    /// order, and land *behind* whatever `other` already holds under the same
    /// keys. `self` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::vdf;
    ///
    /// let source = vdf! { "key" => "theirs" };
    /// let mut target = vdf! { "key" => "ours" };
    /// source.join(&mut target);
    ///
    /// assert_eq!(target.values("key"), 2);
    /// assert_eq!(target.get_str_at("key", 1), Some("theirs"));
    /// ```
    pub fn join(&self, other: &mut VdfNode) {
        for (key, slots) in &self.0 {
            other
                .0
                .entry(key.clone())
                .or_default()
                .extend(slots.iter().cloned());
        }
    }

    /// Recursively collapses repeated node-valued keys into single nodes.
    ///
    /// For every key whose *first* value is a node, that node survives: it is
    /// reduced first, the remaining node values under the key are merged into
    /// it in sequence order, and the key's sequence shrinks to the survivor
    /// alone. Keys whose first value is a string leaf are left untouched;
    /// string leaves stored behind a leading node are discarded with the rest
    /// of the old sequence.
    ///
    /// Nodes merged in during a pass are not re-reduced, so duplicate groups
    /// nested inside a later sibling survive one call and collapse on the
    /// next. Reducing an already collapsed tree changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::parse;
    ///
    /// let text = "\"system\" { \"inner\" { \"planet\" \"mercury\" } \"inner\" { \"planet\" \"venus\" } }";
    /// let mut root = parse(text).unwrap();
    /// root.reduce();
    ///
    /// let system = root.get_node("system").unwrap();
    /// assert_eq!(system.values("inner"), 1);
    ///
    /// let inner = system.get_node("inner").unwrap();
    /// assert_eq!(inner.values("planet"), 2);
    /// assert_eq!(inner.get_str_at("planet", 1), Some("venus"));
    /// ```
    pub fn reduce(&mut self) -> &mut Self {
        for slots in self.0.values_mut() {
            Self::reduce_group(slots, true);
        }
        self
    }

    /// Collapses repeated node-valued keys in this node only.
    ///
    /// Same merge as [`reduce`](VdfNode::reduce) without the descent: nested
    /// nodes keep their own repeated keys.
    pub fn reduce_shallow(&mut self) -> &mut Self {
        for slots in self.0.values_mut() {
            Self::reduce_group(slots, false);
        }
        self
    }

    /// Collapses one key's sequence when it leads with a node.
    fn reduce_group(slots: &mut Vec<Value>, recursive: bool) {
        if !matches!(slots.first(), Some(Value::Node(_))) {
            return;
        }
        let mut drained = std::mem::take(slots).into_iter();
        let Some(Value::Node(mut primary)) = drained.next() else {
            return;
        };
        if recursive {
            primary.reduce();
        }
        for value in drained {
            // Leaf slots behind the leading node go away with the old sequence.
            if let Value::Node(node) = value {
                node.drain_into(&mut primary);
            }
        }
        slots.push(Value::Node(primary));
    }

    /// Moves every key-value pair of this node into `target`, appending.
    fn drain_into(self, target: &mut VdfNode) {
        for (key, mut slots) in self.0 {
            target.0.entry(key).or_default().append(&mut slots);
        }
    }
}

impl Default for VdfNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VdfNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Writer::new().write(self))
    }
}

impl IntoIterator for VdfNode {
    type Item = (String, Vec<Value>);
    type IntoIter = btree_map::IntoIter<String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VdfNode {
    type Item = (&'a String, &'a Vec<Value>);
    type IntoIter = btree_map::Iter<'a, String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for VdfNode {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut node = VdfNode::new();
        for (key, value) in iter {
            node.put(key, value);
        }
        node
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VdfNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, slots) in &self.0 {
            match slots.as_slice() {
                [single] => map.serialize_entry(key, single)?,
                many => map.serialize_entry(key, many)?,
            }
        }
        map.end()
    }
}

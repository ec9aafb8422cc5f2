/// Builds a [`VdfNode`](crate::VdfNode) from key-value pairs.
///
/// Values are string literals, expressions convertible into a
/// [`Value`](crate::Value), or nested `{ ... }` blocks. Repeating a key
/// appends to its slot sequence.
///
/// ```
/// use vdf::vdf;
///
/// let node = vdf! {
///     "name" => "Alice",
///     "settings" => {
///         "volume" => "0.5",
///     },
/// };
/// assert_eq!(node.get_str("name"), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vdf {
    // Empty node
    () => {
        $crate::VdfNode::new()
    };

    // Key-value pairs, values resolved per token tree
    ( $($key:literal => $value:tt),* $(,)? ) => {{
        let mut node = $crate::VdfNode::new();
        $(
            node.put($key, $crate::vdf_value!($value));
        )*
        node
    }};
}

// Maps a single value token tree onto a `Value`.
#[doc(hidden)]
#[macro_export]
macro_rules! vdf_value {
    // Nested node
    ({ $($inner:tt)* }) => {
        $crate::Value::Node($crate::vdf!($($inner)*))
    };

    // Anything else converts through `Value::from`
    ($leaf:expr) => {
        $crate::Value::from($leaf)
    };
}

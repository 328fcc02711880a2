//! The tagged key union for shape-spanning pair streams.

use std::fmt;

/// A key that is either a dense position or a name.
///
/// Collections with different key disciplines meet in one pair stream
/// through this union: sequences yield [`Key::Index`] positions, maps
/// yield [`Key::Name`] keys, and lazy sequences may yield either. The tag
/// travels with every pair, so consumers decide structurally (never by
/// inspecting the key's content) whether output should be positional or
/// named; materialization and path auto-creation both branch on it.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::Key;
///
/// let positional: Key<&str> = Key::Index(2);
/// let named: Key<&str> = Key::Name("total");
///
/// assert!(positional.is_index());
/// assert_eq!(named.as_name(), Some(&"total"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<K> {
    /// A dense position in a sequence.
    Index(usize),
    /// A name in a keyed map.
    Name(K),
}

impl<K> Key<K> {
    /// Returns `true` for positional keys.
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns `true` for named keys.
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    /// Borrows the position, if this key is positional.
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(position) => Some(*position),
            Self::Name(_) => None,
        }
    }

    /// Borrows the name, if this key is named.
    pub const fn as_name(&self) -> Option<&K> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Extracts the name, if this key is named.
    pub fn into_name(self) -> Option<K> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Maps the name, leaving positional keys untouched.
    pub fn map_name<L, F>(self, function: F) -> Key<L>
    where
        F: FnOnce(K) -> L,
    {
        match self {
            Self::Index(position) => Key::Index(position),
            Self::Name(name) => Key::Name(function(name)),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Key<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(position) => write!(formatter, "{position}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

impl<K> From<usize> for Key<K> {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for Key<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Index(position) => serializer.serialize_u64(*position as u64),
            Self::Name(name) => name.serialize(serializer),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

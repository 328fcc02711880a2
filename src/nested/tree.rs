//! The nested value tree and its path operations.

use std::mem;

use crate::coll::{
    Coll, CollectionError, InvalidArgumentError, InvalidPathError, Key, PairMap,
};

/// A tree of collections with plain values at the leaves.
///
/// Paths are slices of [`Key`] segments, one per level. Reads borrow and
/// never run a lazy factory; writes consume the tree, rebuild the spine
/// along the path, and materialize any lazy collection they descend
/// through. A write never mutates shared state since each node is owned
/// by its parent.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::Key;
/// use xduce::nested::Nested;
/// use xduce::pair_map;
///
/// let config: Nested<&str, i32> = Nested::map(pair_map! {
///     "ports" => Nested::seq(vec![Nested::leaf(8080), Nested::leaf(8081)]),
/// });
///
/// let grown = config
///     .assoc_path(&[Key::Name("ports"), Key::Index(2)], Nested::leaf(8082))
///     .unwrap();
///
/// let port = grown
///     .get_path(&[Key::Name("ports"), Key::Index(2)])
///     .and_then(Nested::as_leaf);
/// assert_eq!(port, Some(&8082));
/// ```
#[derive(Debug, Clone)]
pub enum Nested<K, V> {
    /// A terminal value.
    Leaf(V),
    /// An interior collection of subtrees.
    Coll(Coll<K, Nested<K, V>>),
}

impl<K, V> Nested<K, V> {
    /// Wraps a terminal value.
    pub const fn leaf(value: V) -> Self {
        Self::Leaf(value)
    }

    /// An interior sequence node.
    #[must_use]
    pub const fn seq(children: Vec<Self>) -> Self {
        Self::Coll(Coll::Seq(children))
    }

    /// An interior map node.
    #[must_use]
    pub const fn map(children: PairMap<K, Self>) -> Self {
        Self::Coll(Coll::Map(children))
    }

    /// Borrows the terminal value, if this node is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Coll(_) => None,
        }
    }

    /// Extracts the terminal value, if this node is a leaf.
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Coll(_) => None,
        }
    }

    /// Borrows the interior collection, if this node is one.
    #[must_use]
    pub const fn as_coll(&self) -> Option<&Coll<K, Self>> {
        match self {
            Self::Leaf(_) => None,
            Self::Coll(collection) => Some(collection),
        }
    }

    /// Walks `path` by reference, returning the addressed node.
    ///
    /// An empty path addresses the root. Returns `None` when a segment is
    /// missing, its kind does not match the collection it addresses, or
    /// the walk meets a leaf or a lazy collection; lazy contents are only
    /// reachable through the consuming operations.
    #[must_use]
    pub fn get_path(&self, path: &[Key<K>]) -> Option<&Self>
    where
        K: PartialEq,
    {
        let mut node = self;
        for segment in path {
            node = node.child(segment)?;
        }
        Some(node)
    }

    fn child(&self, segment: &Key<K>) -> Option<&Self>
    where
        K: PartialEq,
    {
        match (self, segment) {
            (Self::Coll(Coll::Seq(values)), Key::Index(position)) => values.get(*position),
            (Self::Coll(Coll::Map(entries)), Key::Name(name)) => entries.get(name),
            _ => None,
        }
    }
}

impl<K: PartialEq + Clone + 'static, V: 'static> Nested<K, V> {
    /// Stores `value` at `path`, creating missing intermediate containers.
    ///
    /// A missing intermediate is created with the shape its segment calls
    /// for: positional segments create sequences, named segments create
    /// maps. A leaf standing where the path needs a container is
    /// discarded and replaced by a fresh one. Lazy collections along the
    /// path are materialized.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] for an empty path and
    /// [`CollectionError::InvalidPath`] when a segment's kind does not
    /// match an existing collection or a position would leave a gap in a
    /// sequence.
    pub fn assoc_path(self, path: &[Key<K>], value: Self) -> Result<Self, CollectionError> {
        match path.split_first() {
            None => Err(InvalidArgumentError {
                operation: "assoc_path",
                message: "path must not be empty",
            }
            .into()),
            Some((head, rest)) => self.assoc_at(head, rest, value, 0),
        }
    }

    /// Removes the node at `path`.
    ///
    /// Every intermediate segment must already address a collection; only
    /// the final segment tolerates absence, in which case the tree comes
    /// back unchanged. Lazy collections along the path are materialized.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] for an empty path and
    /// [`CollectionError::InvalidPath`] when an intermediate segment is
    /// missing, mismatched in kind, or addresses a leaf.
    pub fn dissoc_path(self, path: &[Key<K>]) -> Result<Self, CollectionError> {
        match path.split_first() {
            None => Err(InvalidArgumentError {
                operation: "dissoc_path",
                message: "path must not be empty",
            }
            .into()),
            Some((head, rest)) => self.dissoc_at(head, rest, 0),
        }
    }

    /// Rewrites the node at `path` through `update`, which receives the
    /// current node when one exists.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`assoc_path`](Nested::assoc_path) does.
    pub fn update_path<F>(self, path: &[Key<K>], update: F) -> Result<Self, CollectionError>
    where
        F: FnOnce(Option<&Self>) -> Self,
    {
        let updated = update(self.get_path(path));
        self.assoc_path(path, updated)
    }

    fn assoc_at(
        self,
        head: &Key<K>,
        rest: &[Key<K>],
        value: Self,
        depth: usize,
    ) -> Result<Self, CollectionError> {
        match self {
            Self::Leaf(_) => Self::container_for(head).assoc_at(head, rest, value, depth),
            Self::Coll(Coll::Lazy(lazy)) => Self::Coll(Coll::Lazy(lazy).materialize()?)
                .assoc_at(head, rest, value, depth),
            Self::Coll(Coll::Seq(mut values)) => match head {
                Key::Index(position) => match rest.split_first() {
                    None => {
                        if *position < values.len() {
                            values[*position] = value;
                        } else if *position == values.len() {
                            values.push(value);
                        } else {
                            return Err(Self::gap(depth, "assoc_path"));
                        }
                        Ok(Self::seq(values))
                    }
                    Some((next, tail)) => {
                        if *position < values.len() {
                            let slot = &mut values[*position];
                            let child = mem::replace(slot, Self::hole());
                            *slot = child.assoc_at(next, tail, value, depth + 1)?;
                        } else if *position == values.len() {
                            let child = Self::container_for(next);
                            values.push(child.assoc_at(next, tail, value, depth + 1)?);
                        } else {
                            return Err(Self::gap(depth, "assoc_path"));
                        }
                        Ok(Self::seq(values))
                    }
                },
                Key::Name(_) => Err(Self::kind_mismatch(
                    depth,
                    "assoc_path",
                    "named key into a sequence",
                )),
            },
            Self::Coll(Coll::Map(mut entries)) => match head {
                Key::Name(name) => match rest.split_first() {
                    None => {
                        entries.insert(name.clone(), value);
                        Ok(Self::map(entries))
                    }
                    Some((next, tail)) => {
                        match entries.get_mut(name) {
                            Some(slot) => {
                                let child = mem::replace(slot, Self::hole());
                                *slot = child.assoc_at(next, tail, value, depth + 1)?;
                            }
                            None => {
                                let child = Self::container_for(next)
                                    .assoc_at(next, tail, value, depth + 1)?;
                                entries.insert(name.clone(), child);
                            }
                        }
                        Ok(Self::map(entries))
                    }
                },
                Key::Index(_) => Err(Self::kind_mismatch(
                    depth,
                    "assoc_path",
                    "indexed key into a map",
                )),
            },
        }
    }

    fn dissoc_at(self, head: &Key<K>, rest: &[Key<K>], depth: usize) -> Result<Self, CollectionError> {
        match self {
            Self::Leaf(_) => Err(InvalidPathError {
                operation: "dissoc_path",
                depth,
                reason: "segment does not address a collection",
            }
            .into()),
            Self::Coll(Coll::Lazy(lazy)) => {
                Self::Coll(Coll::Lazy(lazy).materialize()?).dissoc_at(head, rest, depth)
            }
            Self::Coll(Coll::Seq(mut values)) => match head {
                Key::Index(position) => match rest.split_first() {
                    None => {
                        if *position < values.len() {
                            values.remove(*position);
                        }
                        Ok(Self::seq(values))
                    }
                    Some((next, tail)) => {
                        if *position < values.len() {
                            let slot = &mut values[*position];
                            let child = mem::replace(slot, Self::hole());
                            *slot = child.dissoc_at(next, tail, depth + 1)?;
                            Ok(Self::seq(values))
                        } else {
                            Err(Self::missing(depth, "dissoc_path"))
                        }
                    }
                },
                Key::Name(_) => Err(Self::kind_mismatch(
                    depth,
                    "dissoc_path",
                    "named key into a sequence",
                )),
            },
            Self::Coll(Coll::Map(mut entries)) => match head {
                Key::Name(name) => match rest.split_first() {
                    None => {
                        entries.remove(name);
                        Ok(Self::map(entries))
                    }
                    Some((next, tail)) => match entries.get_mut(name) {
                        Some(slot) => {
                            let child = mem::replace(slot, Self::hole());
                            *slot = child.dissoc_at(next, tail, depth + 1)?;
                            Ok(Self::map(entries))
                        }
                        None => Err(Self::missing(depth, "dissoc_path")),
                    },
                },
                Key::Index(_) => Err(Self::kind_mismatch(
                    depth,
                    "dissoc_path",
                    "indexed key into a map",
                )),
            },
        }
    }

    fn container_for(segment: &Key<K>) -> Self {
        match segment {
            Key::Index(_) => Self::seq(Vec::new()),
            Key::Name(_) => Self::map(PairMap::new()),
        }
    }

    // Placeholder parked in a slot while its subtree is rebuilt.
    fn hole() -> Self {
        Self::seq(Vec::new())
    }

    fn gap(depth: usize, operation: &'static str) -> CollectionError {
        InvalidPathError {
            operation,
            depth,
            reason: "index is past the end of the sequence",
        }
        .into()
    }

    fn missing(depth: usize, operation: &'static str) -> CollectionError {
        InvalidPathError {
            operation,
            depth,
            reason: "missing intermediate segment",
        }
        .into()
    }

    fn kind_mismatch(depth: usize, operation: &'static str, reason: &'static str) -> CollectionError {
        InvalidPathError {
            operation,
            depth,
            reason,
        }
        .into()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Nested<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Leaf(value) => value.serialize(serializer),
            Self::Coll(collection) => collection.serialize(serializer),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

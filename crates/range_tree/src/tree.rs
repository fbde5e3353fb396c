use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::error::{RangeTreeError, Result};
use crate::monoid::{FnMonoid, Monoid};
use crate::util::{capacity_for, leaf_offset, left_child, midpoint, right_child, storage_len};

/// Point-update / range-fold tree over a [`Monoid`].
///
/// The tree is stored implicitly in one flat buffer of `2 * capacity - 1` nodes:
/// the root sits at position `0`, node `i` has children `2i + 1` and `2i + 2`,
/// and element `k` lives in the leaf at `capacity - 1 + k`. Leaves past the
/// input length are padded with the monoid identity.
///
/// - Indices are checked against `capacity`, not `len`. Padding leaves may be
///   queried and overwritten.
/// - Folds respect sequence order, so non-commutative operators are supported.
#[derive(Clone)]
pub struct RangeTree<M: Monoid> {
    monoid: M,
    len: usize,
    capacity: usize,
    storage: Vec<M::Value>,
}

impl<T, F> RangeTree<FnMonoid<T, F>>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds a tree from `values` with a runtime `operator` and its `identity`.
    ///
    /// `operator` must be associative and `identity` neutral for it.
    pub fn new<I>(values: I, operator: F, identity: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_monoid(values, FnMonoid::new(operator, identity))
    }
}

impl<M: Monoid> RangeTree<M> {
    pub fn with_monoid<I>(values: I, monoid: M) -> Self
    where
        I: IntoIterator<Item = M::Value>,
    {
        let mut leaves: Vec<M::Value> = values.into_iter().collect();
        let len = leaves.len();
        let capacity = capacity_for(len);
        if capacity == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("built empty range tree");
            return Self {
                monoid,
                len,
                capacity,
                storage: Vec::new(),
            };
        }

        let internal = leaf_offset(capacity);
        let total = storage_len(capacity);
        let identity = monoid.identity();
        let mut storage = Vec::with_capacity(total);
        storage.resize(internal, identity.clone());
        storage.append(&mut leaves);
        storage.resize(total, identity);

        for node in (0..internal).rev() {
            storage[node] = monoid.combine(&storage[left_child(node)], &storage[right_child(node)]);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len, capacity, "built range tree");

        Self {
            monoid,
            len,
            capacity,
            storage,
        }
    }

    /// Number of elements the tree was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of addressable leaves: the least power of two `>= len`, or `0` when empty.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    /// The flat node buffer, root first.
    pub fn as_slice(&self) -> &[M::Value] {
        &self.storage
    }

    /// The first `len` leaves, in sequence order.
    pub fn values(&self) -> &[M::Value] {
        let offset = leaf_offset(self.capacity);
        &self.storage[offset..offset + self.len]
    }

    /// The leaf at `index`, or `None` when `index >= capacity`.
    pub fn get(&self, index: usize) -> Option<&M::Value> {
        if index >= self.capacity {
            return None;
        }
        self.storage.get(leaf_offset(self.capacity) + index)
    }

    /// Aggregate of every leaf, including padding. Identity for an empty tree.
    pub fn total(&self) -> M::Value {
        match self.storage.first() {
            Some(root) => root.clone(),
            None => self.monoid.identity(),
        }
    }

    /// Replaces the leaf at `index` and recomputes its ancestors.
    pub fn set(&mut self, index: usize, value: M::Value) -> Result<()> {
        if index >= self.capacity {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, capacity = self.capacity, "rejected out-of-range set");
            return Err(RangeTreeError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(index, "set");

        self.assign(0, 0, self.capacity, index, value);
        Ok(())
    }

    /// Folds the inclusive range `[left, right]` in sequence order.
    pub fn accumulate(&self, left: usize, right: usize) -> Result<M::Value> {
        if left > right {
            #[cfg(feature = "tracing")]
            tracing::debug!(left, right, "rejected inverted range");
            return Err(RangeTreeError::InvalidRange { left, right });
        }
        self.query(left..=right)
    }

    /// Folds `range` in sequence order.
    ///
    /// Bounds are compared as given: a start past the end is an error, any
    /// other empty range yields the identity. A non-empty range reaching past
    /// `capacity` is an error.
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Value> {
        let start_bound = range.start_bound().cloned();
        let end_bound = range.end_bound().cloned();

        if let (
            Bound::Included(left) | Bound::Excluded(left),
            Bound::Included(right) | Bound::Excluded(right),
        ) = (start_bound, end_bound)
        {
            if left > right {
                #[cfg(feature = "tracing")]
                tracing::debug!(left, right, "rejected inverted range");
                return Err(RangeTreeError::InvalidRange { left, right });
            }
        }

        let start = match start_bound {
            Bound::Included(start) => Some(start),
            Bound::Excluded(start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        // `None` sits one past `usize::MAX`.
        let end = match end_bound {
            Bound::Included(end) => end.checked_add(1),
            Bound::Excluded(end) => Some(end),
            Bound::Unbounded => Some(self.capacity),
        };

        let Some(start) = start else {
            return Ok(self.monoid.identity());
        };
        let end = match end {
            Some(end) if start >= end => return Ok(self.monoid.identity()),
            Some(end) if end <= self.capacity => end,
            _ => {
                let index = end.map_or(usize::MAX, |end| end - 1);
                #[cfg(feature = "tracing")]
                tracing::debug!(index, capacity = self.capacity, "rejected out-of-range query");
                return Err(RangeTreeError::IndexOutOfRange {
                    index,
                    capacity: self.capacity,
                });
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(start, end, "query");

        Ok(self.fold(0, 0, self.capacity, start, end))
    }

    /// Writes `value` into the leaf for `index` below `node`, which covers `[node_left, node_right)`.
    fn assign(
        &mut self,
        node: usize,
        node_left: usize,
        node_right: usize,
        index: usize,
        value: M::Value,
    ) {
        if node_right - node_left == 1 {
            self.storage[node] = value;
            return;
        }

        let mid = midpoint(node_left, node_right);
        if index < mid {
            self.assign(left_child(node), node_left, mid, index, value);
        } else {
            self.assign(right_child(node), mid, node_right, index, value);
        }
        self.storage[node] = self
            .monoid
            .combine(&self.storage[left_child(node)], &self.storage[right_child(node)]);
    }

    fn fold(
        &self,
        node: usize,
        node_left: usize,
        node_right: usize,
        left: usize,
        right: usize,
    ) -> M::Value {
        if right <= node_left || node_right <= left {
            return self.monoid.identity();
        }
        if left <= node_left && node_right <= right {
            return self.storage[node].clone();
        }

        let mid = midpoint(node_left, node_right);
        let lhs = self.fold(left_child(node), node_left, mid, left, right);
        let rhs = self.fold(right_child(node), mid, node_right, left, right);
        self.monoid.combine(&lhs, &rhs)
    }
}

impl<M: Monoid + Default> FromIterator<M::Value> for RangeTree<M> {
    fn from_iter<I: IntoIterator<Item = M::Value>>(iter: I) -> Self {
        Self::with_monoid(iter, M::default())
    }
}

impl<M> fmt::Debug for RangeTree<M>
where
    M: Monoid + fmt::Debug,
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeTree")
            .field("monoid", &self.monoid)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("storage", &self.storage)
            .finish()
    }
}

/// Leaf count of the perfect binary tree holding `len` elements.
#[inline(always)]
pub(crate) fn capacity_for(len: usize) -> usize {
    if len == 0 { 0 } else { len.next_power_of_two() }
}

#[inline(always)]
pub(crate) fn storage_len(capacity: usize) -> usize {
    (2 * capacity).saturating_sub(1)
}

/// Position of the first leaf; also the number of internal nodes.
#[inline(always)]
pub(crate) fn leaf_offset(capacity: usize) -> usize {
    capacity.saturating_sub(1)
}

#[inline(always)]
pub(crate) fn left_child(node: usize) -> usize {
    2 * node + 1
}

#[inline(always)]
pub(crate) fn right_child(node: usize) -> usize {
    2 * node + 2
}

#[inline(always)]
pub(crate) fn midpoint(left: usize, right: usize) -> usize {
    debug_assert!(left < right);
    left + (right - left) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_next_power_of_two() {
        let cases = [(0, 0), (1, 1), (2, 2), (3, 4), (6, 8), (8, 8), (9, 16), (1_000, 1_024)];
        for (len, expected) in cases {
            assert_eq!(capacity_for(len), expected, "len={len}");
        }
    }

    #[test]
    fn layout_sizes() {
        assert_eq!(storage_len(0), 0);
        assert_eq!(storage_len(1), 1);
        assert_eq!(storage_len(8), 15);
        assert_eq!(leaf_offset(0), 0);
        assert_eq!(leaf_offset(1), 0);
        assert_eq!(leaf_offset(8), 7);
    }

    #[test]
    fn children_partition_the_level_below() {
        for node in 0..64 {
            assert_eq!(right_child(node), left_child(node) + 1);
            assert_eq!((left_child(node) - 1) / 2, node);
            assert_eq!((right_child(node) - 1) / 2, node);
        }
    }
}

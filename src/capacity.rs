//! Capacity growth behavior for arrays which have exceeded their storage.

/// Calculate the capacity to request when `minimum` slots are required and
/// `prev` slots are currently allocated.
///
/// The preferred capacity doubles the previous one, starting from a single
/// slot for an empty array, so that a run of pushes costs amortized O(1) per
/// element. The result is never less than `minimum`.
#[inline]
pub fn next_capacity(prev: usize, minimum: usize) -> usize {
    let preferred = if prev == 0 {
        1
    } else {
        prev.saturating_mul(2)
    };
    preferred.max(minimum)
}

#[cfg(test)]
mod tests {
    use super::next_capacity;

    #[test]
    fn grow_from_empty() {
        assert_eq!(next_capacity(0, 1), 1);
        assert_eq!(next_capacity(0, 5), 5);
    }

    #[test]
    fn grow_doubling() {
        assert_eq!(next_capacity(4, 5), 8);
        assert_eq!(next_capacity(8, 9), 16);
    }

    #[test]
    fn grow_range_exceeds_doubling() {
        assert_eq!(next_capacity(4, 13), 13);
    }

    #[test]
    fn grow_saturates() {
        assert_eq!(next_capacity(usize::MAX / 2 + 1, usize::MAX), usize::MAX);
    }
}

//! Bit-manipulation indexing for amplitude groups.
//!
//! A gate on target qubit `t` couples pairs of amplitudes whose indices
//! differ only in bit `t`. This module enumerates those pairs (and their
//! `2^k`-element generalization for multi-qubit gates) by inserting bits
//! into a compact counter, using precomputed masks so the hot loop stays
//! branch-free.
//!
//! Qubit `t` maps to bit position `t` of the flat index, least-significant
//! bit first (see the crate-level docs).

/// Insert a `0` bit at position `target`, shifting higher bits up by one.
///
/// Maps the `k`-th index with bit `target` cleared: bits below `target`
/// stay in place, bits at or above `target` move up one position.
///
/// # Example
/// ```
/// use statevec::index::insert_bit;
/// // 0b101 with a zero inserted at bit 1 -> 0b1001
/// assert_eq!(insert_bit(0b101, 1), 0b1001);
/// // Inserting at bit 0 is a plain left shift
/// assert_eq!(insert_bit(0b11, 0), 0b110);
/// ```
#[inline]
pub fn insert_bit(k: usize, target: usize) -> usize {
    let low_mask = (1usize << target) - 1;
    ((k & !low_mask) << 1) | (k & low_mask)
}

/// Insert `0` bits at several positions, lowest position first.
///
/// `sorted_targets` must be strictly increasing and refer to bit positions
/// in the *result*; inserting in ascending order keeps each position valid
/// as earlier insertions only shift bits below the next one into place.
///
/// # Example
/// ```
/// use statevec::index::insert_bits;
/// // 0b11 with zeros inserted at bits 0 and 2 -> 0b1010
/// assert_eq!(insert_bits(0b11, &[0, 2]), 0b1010);
/// ```
#[inline]
pub fn insert_bits(k: usize, sorted_targets: &[usize]) -> usize {
    debug_assert!(
        sorted_targets.windows(2).all(|w| w[0] < w[1]),
        "targets must be sorted and distinct"
    );
    sorted_targets.iter().fold(k, |acc, &t| insert_bit(acc, t))
}

/// Scatter the low `targets.len()` bits of `pattern` onto the given bit
/// positions: bit `b` of `pattern` lands at bit `targets[b]` of the result.
///
/// # Example
/// ```
/// use statevec::index::spread_bits;
/// // pattern 0b10 over targets [0, 2]: bit 1 of the pattern goes to bit 2
/// assert_eq!(spread_bits(0b10, &[0, 2]), 0b100);
/// assert_eq!(spread_bits(0b11, &[0, 2]), 0b101);
/// ```
#[inline]
pub fn spread_bits(pattern: usize, targets: &[usize]) -> usize {
    targets
        .iter()
        .enumerate()
        .fold(0, |acc, (b, &t)| acc | (((pattern >> b) & 1) << t))
}

/// Lazy enumeration of the `2^(nqubits-1)` index pairs coupled by a gate
/// on one target qubit. Created by [`pair_indices`].
#[derive(Debug, Clone)]
pub struct BasisPairs {
    next: usize,
    count: usize,
    low_mask: usize,
    stride: usize,
}

impl Iterator for BasisPairs {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.next == self.count {
            return None;
        }
        let k = self.next;
        self.next += 1;
        let i0 = ((k & !self.low_mask) << 1) | (k & self.low_mask);
        Some((i0, i0 | self.stride))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BasisPairs {}

/// Enumerate the `(i0, i1)` index pairs for a single-qubit gate on `target`
/// in an `nqubits`-qubit register.
///
/// Each pair holds the index with the target bit cleared and set,
/// respectively; together the pairs partition `{0, ..., 2^nqubits - 1}`
/// exactly once. The iterator is restartable via `Clone`.
///
/// # Example
/// ```
/// use statevec::index::pair_indices;
/// let pairs: Vec<_> = pair_indices(2, 1).collect();
/// assert_eq!(pairs, vec![(0, 2), (1, 3)]);
/// ```
pub fn pair_indices(nqubits: usize, target: usize) -> BasisPairs {
    debug_assert!(nqubits >= 1);
    debug_assert!(target < nqubits, "target {} out of range", target);
    let stride = 1usize << target;
    BasisPairs {
        next: 0,
        count: 1usize << (nqubits - 1),
        low_mask: stride - 1,
        stride,
    }
}

/// Lazy enumeration of `2^k`-element amplitude groups for a `k`-qubit gate.
/// Created by [`group_indices`].
#[derive(Debug, Clone)]
pub struct BasisGroups {
    next: usize,
    count: usize,
    sorted: Vec<usize>,
    targets: Vec<usize>,
    group_len: usize,
}

impl Iterator for BasisGroups {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.next == self.count {
            return None;
        }
        let base = insert_bits(self.next, &self.sorted);
        self.next += 1;
        Some(
            (0..self.group_len)
                .map(|j| base | spread_bits(j, &self.targets))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BasisGroups {}

/// Enumerate amplitude-index groups for a `k`-qubit gate on `targets`.
///
/// Each group lists the `2^k` indices obtained by running the target bits
/// through every pattern while holding all other bits fixed; element `j` of
/// a group has bit `b` of `j` at position `targets[b]`, so `targets[0]` is
/// the least-significant bit of the gate's local basis index. The
/// `2^(nqubits-k)` groups partition all `2^nqubits` indices exactly once.
///
/// `targets` must be distinct and in range; this is the dispatcher's
/// responsibility and only debug-checked here.
///
/// # Example
/// ```
/// use statevec::index::group_indices;
/// let groups: Vec<_> = group_indices(3, &[0, 2]).collect();
/// assert_eq!(groups, vec![vec![0, 1, 4, 5], vec![2, 3, 6, 7]]);
/// ```
pub fn group_indices(nqubits: usize, targets: &[usize]) -> BasisGroups {
    let k = targets.len();
    debug_assert!(k >= 1 && k <= nqubits);
    debug_assert!(targets.iter().all(|&t| t < nqubits));
    let mut sorted = targets.to_vec();
    sorted.sort_unstable();
    debug_assert!(sorted.windows(2).all(|w| w[0] < w[1]), "duplicate targets");
    BasisGroups {
        next: 0,
        count: 1usize << (nqubits - k),
        sorted,
        targets: targets.to_vec(),
        group_len: 1usize << k,
    }
}

//! Rotation module - in-place cyclic shifts
//!
//! Every function here rotates a slice to the left without allocating and is a
//! no-op on an empty slice. Two "rotate left by one" primitives are provided:
//!
//! - [`rotate_left_copy`]: keep the head in a temporary, move the tail down in
//!   one `copy_within`, write the head at the end.
//! - [`rotate_left_reversal`]: the three-reversal identity `rev(rev(A) rev(B)) = BA`
//!   specialised to `|A| = 1`.
//!
//! [`rotate_left_by_reversal`] is the general form of the second technique, where
//! the offset is arbitrary and the cost stays `O(n)` regardless of it.

use crate::types::RotationStrategy;

/// Reverse a slice in place with two converging indices.
#[inline]
pub fn reverse<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }
    let (mut l, mut r) = (0usize, a.len() - 1);
    while l < r {
        a.swap(l, r);
        l += 1;
        r -= 1;
    }
}

/// Rotate left by one using a single bulk move.
///
/// `[a0, a1, .., an-1]` becomes `[a1, .., an-1, a0]`.
#[inline]
pub fn rotate_left_copy<T: Copy>(a: &mut [T]) {
    let Some(&head) = a.first() else {
        return;
    };
    let last = a.len() - 1;
    a.copy_within(1.., 0);
    a[last] = head;
}

/// Rotate left by one with three reversals.
#[inline]
pub fn rotate_left_reversal<T>(a: &mut [T]) {
    rotate_left_by_reversal(a, 1);
}

/// Rotate left by `k` positions (taken modulo the length) with three reversals.
pub fn rotate_left_by_reversal<T>(a: &mut [T], k: usize) {
    if a.is_empty() {
        return;
    }
    let k = k % a.len();
    reverse(&mut a[..k]);
    reverse(&mut a[k..]);
    reverse(a);
}

/// Rotate left by one with the given strategy.
///
/// Both strategies yield the same permutation.
#[inline]
pub fn rotate_left<T: Copy>(strategy: RotationStrategy, a: &mut [T]) {
    match strategy {
        RotationStrategy::ShiftCopy => rotate_left_copy(a),
        RotationStrategy::ThreeReversal => rotate_left_reversal(a),
    }
}

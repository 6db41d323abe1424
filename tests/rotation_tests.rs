//! Rotation strategy properties over seeded random payloads.

use lanternfish::core::{
    rotate_left, rotate_left_by_reversal, rotate_left_copy, rotate_left_reversal, SimpleRng,
};
use lanternfish::types::{RotationStrategy, BENCH_SAMPLE_LEN};

/// Element that lands at index `i` after rotating left by `k`.
fn rotated_reference<T: Copy>(a: &[T], k: usize) -> Vec<T> {
    let n = a.len();
    (0..n).map(|i| a[(i + k) % n]).collect()
}

fn random_payload(rng: &mut SimpleRng, max_len: u32) -> Vec<u64> {
    let len = rng.next_range(max_len) as usize;
    (0..len).map(|_| rng.next_u32() as u64).collect()
}

#[test]
fn rotate_left_one_matches_reference_for_all_strategies() {
    let mut rng = SimpleRng::new(2021);
    for _ in 0..200 {
        let original = random_payload(&mut rng, 64);
        for strategy in RotationStrategy::ALL {
            let mut a = original.clone();
            rotate_left(strategy, &mut a);
            if original.is_empty() {
                assert!(a.is_empty());
            } else {
                assert_eq!(a, rotated_reference(&original, 1), "{:?}", strategy);
            }
        }
    }
}

#[test]
fn rotation_is_a_permutation() {
    let mut rng = SimpleRng::new(6);
    let original: Vec<u32> = rng.permutation(257);
    for strategy in RotationStrategy::ALL {
        let mut a = original.clone();
        rotate_left(strategy, &mut a);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        let mut expected = original.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected);

        // Each element moved exactly one slot towards the front, cyclically.
        let n = a.len();
        for (i, v) in original.iter().enumerate() {
            assert_eq!(a[(i + n - 1) % n], *v);
        }
    }
}

#[test]
fn double_rotation_equals_offset_two() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..100 {
        let original = random_payload(&mut rng, 40);
        if original.is_empty() {
            continue;
        }
        let expected = rotated_reference(&original, 2);

        let mut by_copy = original.clone();
        rotate_left_copy(&mut by_copy);
        rotate_left_copy(&mut by_copy);
        assert_eq!(by_copy, expected);

        let mut by_reversal = original.clone();
        rotate_left_reversal(&mut by_reversal);
        rotate_left_reversal(&mut by_reversal);
        assert_eq!(by_reversal, expected);

        let mut by_offset = original.clone();
        rotate_left_by_reversal(&mut by_offset, 2);
        assert_eq!(by_offset, expected);
    }
}

#[test]
fn rotate_by_offset_matches_std() {
    let mut rng = SimpleRng::new(31);
    for _ in 0..100 {
        let original = random_payload(&mut rng, 50);
        let k = rng.next_range(120) as usize;

        let mut ours = original.clone();
        rotate_left_by_reversal(&mut ours, k);

        let mut theirs = original.clone();
        if !theirs.is_empty() {
            let len = theirs.len();
            theirs.rotate_left(k % len);
        }
        assert_eq!(ours, theirs);
    }
}

#[test]
fn length_one_rotation_is_noop() {
    for strategy in RotationStrategy::ALL {
        let mut a = [7u64];
        for _ in 0..10 {
            rotate_left(strategy, &mut a);
        }
        assert_eq!(a, [7]);
    }
}

#[test]
fn cumulative_rotation_of_shared_sample_stays_consistent() {
    // Mirrors the benchmark: one buffer rotated over and over without reset.
    let original = SimpleRng::new(12345).permutation(BENCH_SAMPLE_LEN);
    for strategy in RotationStrategy::ALL {
        let mut sample = original.clone();
        for step in 1..=BENCH_SAMPLE_LEN {
            rotate_left(strategy, &mut sample);
            if step % 97 == 0 {
                assert_eq!(sample, rotated_reference(&original, step));
            }
        }
        // A full cycle of single rotations restores the input.
        assert_eq!(sample, original);
    }
}

#[test]
fn strategies_can_alternate_on_one_buffer() {
    let original = SimpleRng::new(5).permutation(100);
    let mut a = original.clone();
    for step in 0..250 {
        rotate_left(RotationStrategy::ALL[step % 2], &mut a);
    }
    assert_eq!(a, rotated_reference(&original, 250));
}

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use lanternfish::core::{rotate_left, rotate_left_by_reversal, BucketCounter, SimpleRng};
use lanternfish::types::{RotationStrategy, BENCH_SAMPLE_LEN};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn tick_and_rotations_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut school = BucketCounter::with_reference_buckets([3, 4, 3, 1, 2]).unwrap();
    let mut sample = SimpleRng::new(12345).permutation(BENCH_SAMPLE_LEN);

    let allocs = with_alloc_counting(|| {
        for strategy in RotationStrategy::ALL {
            for _ in 0..128 {
                school.tick(strategy);
            }
            for _ in 0..100 {
                rotate_left(strategy, &mut sample);
            }
        }
        rotate_left_by_reversal(&mut sample, BENCH_SAMPLE_LEN / 3);
        let _ = school.total();
    });

    assert!(allocs == 0);
}

//! Integration test: strong exception safety and ownership transfer.
//!
//! Drives `Grid` copy, move, and swap through the mock allocators in
//! `arr2d-test-utils`. A refused allocation must leave every grid involved
//! exactly as it was, and moves must never allocate.

use arr2d_grid::{Grid, GridError, Heap};
use arr2d_test_utils::fixtures::{random_grid, random_word_grid, seq_grid};
use arr2d_test_utils::{CountingAlloc, FailingAlloc};
use proptest::prelude::*;

fn words_in(alloc: FailingAlloc, width: usize, height: usize) -> Grid<String, FailingAlloc> {
    let src = random_word_grid(width, height, 42);
    src.try_clone_in(alloc).unwrap()
}

// ── Copy-assign ─────────────────────────────────────────────────

#[test]
fn failed_assign_leaves_target_unchanged() {
    let alloc = FailingAlloc::new(1);
    let mut target = words_in(alloc.clone(), 3, 2);
    let before = target.try_clone_in(Heap).unwrap();

    let src = random_word_grid(5, 4, 7);
    let err = target.assign_from(&src).unwrap_err();

    assert!(err.is_allocation_failure());
    assert_eq!(target, before);
    assert_eq!((target.width(), target.height()), (3, 2));
    assert_eq!(alloc.calls(), 2);

    alloc.reset();
    target.assign_from(&src).unwrap();
    assert_eq!(target, src);
}

#[test]
fn failed_assign_reports_requested_bytes() {
    let mut target: Grid<u64, _> = Grid::empty_in(FailingAlloc::always());
    let src = Grid::from_fn(4, 4, |x, y| (x * y) as u64).unwrap();
    assert_eq!(
        target.assign_from(&src),
        Err(GridError::AllocationFailed {
            requested: 16 * 8,
            budget: None
        })
    );
    assert!(target.is_empty());
}

#[test]
fn assign_allocates_once_and_from_target_allocator() {
    let alloc = CountingAlloc::new();
    let mut target: Grid<i32, _> = Grid::new_in(2, 2, alloc.clone()).unwrap();
    assert_eq!(alloc.calls(), 1);

    let src = random_grid(6, 3, 3);
    target.assign_from(&src).unwrap();
    assert_eq!(alloc.calls(), 2);
    assert_eq!(alloc.bytes(), (4 + 18) * std::mem::size_of::<i32>());
    assert_eq!(target, src);
}

// ── Copy-construct ──────────────────────────────────────────────

#[test]
fn failed_try_clone_leaves_source_usable() {
    let alloc = FailingAlloc::new(1);
    let g = words_in(alloc.clone(), 2, 2);
    assert!(g.try_clone().is_err());
    assert_eq!(g.size(), 4);
    assert_eq!(g.at(1, 1).map(String::as_str), Ok(g[(1, 1)].as_str()));
}

#[test]
fn failed_construction_returns_error() {
    let err = Grid::<u8, _>::new_in(10, 10, FailingAlloc::always()).unwrap_err();
    assert_eq!(
        err,
        GridError::AllocationFailed {
            requested: 100,
            budget: None
        }
    );
}

#[test]
#[should_panic(expected = "grid clone failed")]
fn clone_panics_on_refusal() {
    let g = words_in(FailingAlloc::new(1), 2, 2);
    let _ = g.clone();
}

// ── Move and swap ───────────────────────────────────────────────

#[test]
fn moves_and_swaps_never_allocate() {
    let alloc = CountingAlloc::new();
    let mut a: Grid<i32, _> = Grid::new_in(3, 3, alloc.clone()).unwrap();
    let mut b: Grid<i32, _> = Grid::new_in(1, 2, alloc.clone()).unwrap();
    assert_eq!(alloc.calls(), 2);

    a.swap(&mut b);
    assert_eq!((a.width(), a.height()), (1, 2));
    assert_eq!((b.width(), b.height()), (3, 3));

    let mut taken = a.take();
    assert!(a.is_empty());
    assert_eq!((a.width(), a.height()), (0, 0));

    b.move_from(&mut Grid::empty_in(alloc.clone()));
    assert!(b.is_empty());
    b.move_from(&mut taken);
    assert!(taken.is_empty());

    assert_eq!(alloc.calls(), 2);
    assert_eq!((b.width(), b.height()), (1, 2));
}

#[test]
fn self_assignment_round_trip() {
    let mut g = seq_grid(4, 3);
    let snapshot = g.clone();

    g = g.try_clone().unwrap();
    assert_eq!(g, snapshot);

    let moved = g.take();
    g = moved;
    assert_eq!(g, snapshot);

    let src = g.take();
    g.assign_from(&src).unwrap();
    assert_eq!(g, snapshot);
}

#[test]
fn transposed_dimensions_are_unequal() {
    assert_ne!(seq_grid(2, 3), seq_grid(3, 2));
    assert_eq!(seq_grid(2, 3).as_slice(), seq_grid(3, 2).as_slice());
}

// ── Property tests ──────────────────────────────────────────────

proptest! {
    #[test]
    fn deep_copies_are_isolated(
        w in 1usize..8,
        h in 1usize..8,
        seed in any::<u64>(),
        value in any::<i32>(),
    ) {
        let original = random_grid(w, h, seed);
        let snapshot = original.try_clone().unwrap();

        let mut copy = original.clone();
        copy.fill(value);
        *copy.get_mut(w - 1, h - 1) = value.wrapping_add(1);
        prop_assert_eq!(&original, &snapshot);

        let mut assigned: Grid<i32> = Grid::default();
        assigned.assign_from(&original).unwrap();
        assigned.fill(value);
        prop_assert_eq!(&original, &snapshot);
    }

    #[test]
    fn refused_assign_is_invisible(
        w in 0usize..6,
        h in 0usize..6,
        seed in any::<u64>(),
    ) {
        let alloc = FailingAlloc::new(1);
        let mut target = random_grid(w, h, seed).try_clone_in(alloc).unwrap();
        let before = target.try_clone_in(Heap).unwrap();
        let src = random_grid(h + 1, w + 1, seed ^ 1);
        prop_assert!(target.assign_from(&src).is_err());
        prop_assert_eq!(&target, &before);
    }
}

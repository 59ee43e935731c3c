/*!
 * Placement Strategy Tests
 * First-fit, best-fit and worst-fit selection over fragmented memory
 */

use contiguous_allocator::memory::{Block, MemoryError, MemoryManager, Strategy};
use contiguous_allocator::ProcessId;
use pretty_assertions::assert_eq;

fn pid(name: &str) -> ProcessId {
    ProcessId::new(name).unwrap()
}

/// Build free holes of the given sizes at ascending addresses, each followed
/// by a 5-byte guard allocation so the holes never coalesce
fn fragmented(holes: &[usize]) -> MemoryManager {
    let total: usize = holes.iter().map(|h| h + 5).sum();
    let mut manager = MemoryManager::new(total).unwrap();

    for (i, &hole) in holes.iter().enumerate() {
        manager
            .request(pid(&format!("hole{}", i)), hole, Strategy::FirstFit)
            .unwrap();
        manager
            .request(pid(&format!("guard{}", i)), 5, Strategy::FirstFit)
            .unwrap();
    }
    for i in 0..holes.len() {
        manager.release(&pid(&format!("hole{}", i))).unwrap();
    }
    manager
}

#[test]
fn test_first_fit_takes_lowest_address() {
    let mut manager = fragmented(&[20, 10, 30]);
    let start = manager.request(pid("P"), 15, Strategy::FirstFit).unwrap();
    assert_eq!(start, 0);
}

#[test]
fn test_best_fit_takes_smallest_sufficient_hole() {
    // holes start at 0, 25 and 40
    let mut manager = fragmented(&[20, 10, 30]);
    assert_eq!(manager.request(pid("P"), 15, Strategy::BestFit).unwrap(), 0);

    let mut manager = fragmented(&[20, 15, 30]);
    assert_eq!(manager.request(pid("P"), 15, Strategy::BestFit).unwrap(), 25);
}

#[test]
fn test_worst_fit_takes_largest_hole() {
    let mut manager = fragmented(&[20, 10, 30]);
    assert_eq!(manager.request(pid("P"), 15, Strategy::WorstFit).unwrap(), 40);

    let mut manager = fragmented(&[20, 15, 30]);
    assert_eq!(manager.request(pid("P"), 15, Strategy::WorstFit).unwrap(), 45);
}

#[test]
fn test_exact_fit_hole_is_not_split() {
    let mut manager = fragmented(&[20, 15, 30]);
    let before = manager.block_count();

    manager.request(pid("P"), 15, Strategy::BestFit).unwrap();
    assert_eq!(manager.block_count(), before);
    assert_eq!(manager.blocks()[2], Block::allocated(25, 15, pid("P")));
}

#[test]
fn test_request_all_free_space() {
    let mut manager = MemoryManager::new(256).unwrap();
    manager.request(pid("A"), 100, Strategy::FirstFit).unwrap();

    let start = manager.request(pid("B"), 156, Strategy::WorstFit).unwrap();
    assert_eq!(start, 100);
    assert!(manager.blocks().iter().all(Block::is_allocated));
    assert_eq!(manager.largest_free_block(), 0);
}

#[test]
fn test_one_byte_over_largest_hole_fails() {
    let mut manager = fragmented(&[20, 15, 30]);
    let before = manager.clone();

    for strategy in Strategy::ALL {
        assert_eq!(
            manager.request(pid("P"), 31, strategy),
            Err(MemoryError::InsufficientSpace {
                requested: 31,
                largest_free: 30
            })
        );
    }
    assert_eq!(manager, before);
}

#[test]
fn test_same_process_may_hold_many_blocks() {
    let mut manager = MemoryManager::new(100).unwrap();
    manager.request(pid("P1"), 10, Strategy::FirstFit).unwrap();
    manager.request(pid("P1"), 20, Strategy::FirstFit).unwrap();

    let starts: Vec<_> = manager
        .process_allocations(&pid("P1"))
        .iter()
        .map(|b| (b.start, b.end))
        .collect();
    assert_eq!(starts, vec![(0, 10), (10, 30)]);
}

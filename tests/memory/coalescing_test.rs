/*!
 * Release and Coalescing Tests
 * Verifies freed blocks merge with free neighbours
 */

use contiguous_allocator::memory::{Block, MemoryError, MemoryManager, Region, Strategy};
use contiguous_allocator::ProcessId;
use pretty_assertions::assert_eq;

fn pid(name: &str) -> ProcessId {
    ProcessId::new(name).unwrap()
}

/// A, B, C allocated back to back, 30 bytes each, followed by free space
fn three_blocks() -> MemoryManager {
    let mut manager = MemoryManager::new(100).unwrap();
    for name in ["A", "B", "C"] {
        manager.request(pid(name), 30, Strategy::FirstFit).unwrap();
    }
    manager
}

#[test]
fn test_release_b_then_a_merges_span() {
    let mut manager = three_blocks();

    manager.release(&pid("B")).unwrap();
    manager.release(&pid("A")).unwrap();

    assert_eq!(
        manager.blocks(),
        &[
            Block::free(0, 60),
            Block::allocated(60, 30, pid("C")),
            Block::free(90, 10),
        ]
    );
}

#[test]
fn test_release_merges_with_following_hole() {
    let mut manager = three_blocks();

    let region = manager.release(&pid("C")).unwrap();
    assert_eq!(region, Region { start: 60, size: 30 });
    assert_eq!(manager.blocks().last(), Some(&Block::free(60, 40)));
    assert_eq!(manager.block_count(), 3);
}

#[test]
fn test_sandwiched_release_collapses_three_blocks() {
    let mut manager = three_blocks();
    manager.release(&pid("A")).unwrap();
    manager.release(&pid("C")).unwrap();
    assert_eq!(manager.block_count(), 3);

    manager.release(&pid("B")).unwrap();
    assert_eq!(manager.blocks(), &[Block::free(0, 100)]);
}

#[test]
fn test_request_then_release_restores_partition() {
    let mut manager = three_blocks();
    manager.release(&pid("B")).unwrap();
    let before = manager.clone();

    for strategy in Strategy::ALL {
        manager.request(pid("D"), 12, strategy).unwrap();
        manager.release(&pid("D")).unwrap();
        assert_eq!(manager, before, "round trip with {}", strategy);
    }
}

#[test]
fn test_multi_block_process_needs_one_release_per_block() {
    let mut manager = MemoryManager::new(100).unwrap();
    manager.request(pid("P1"), 10, Strategy::FirstFit).unwrap();
    manager.request(pid("P2"), 10, Strategy::FirstFit).unwrap();
    manager.request(pid("P1"), 10, Strategy::FirstFit).unwrap();

    assert_eq!(manager.release(&pid("P1")).unwrap().start, 0);
    assert_eq!(manager.release(&pid("P1")).unwrap().start, 20);
    assert_eq!(
        manager.release(&pid("P1")),
        Err(MemoryError::ProcessNotFound(pid("P1")))
    );
}

#[test]
fn test_release_all_frees_every_block() {
    let mut manager = MemoryManager::new(100).unwrap();
    manager.request(pid("P1"), 10, Strategy::FirstFit).unwrap();
    manager.request(pid("P2"), 10, Strategy::FirstFit).unwrap();
    manager.request(pid("P1"), 10, Strategy::FirstFit).unwrap();

    assert_eq!(manager.release_all(&pid("P1")), Ok(20));
    assert_eq!(
        manager.blocks(),
        &[
            Block::free(0, 10),
            Block::allocated(10, 10, pid("P2")),
            Block::free(20, 80),
        ]
    );
}

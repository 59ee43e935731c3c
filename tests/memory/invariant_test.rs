/*!
 * Partition Invariant Property Tests
 * Random operation sequences must keep the partition well formed
 */

use contiguous_allocator::memory::{MemoryManager, Strategy as Fit};
use contiguous_allocator::ProcessId;
use proptest::prelude::*;

const TOTAL: usize = 1024;

#[derive(Debug, Clone)]
enum Op {
    Request { pid: u8, size: usize, strategy: Fit },
    Release { pid: u8 },
    ReleaseAll { pid: u8 },
    Compact,
}

fn fit() -> impl Strategy<Value = Fit> {
    prop_oneof![Just(Fit::FirstFit), Just(Fit::BestFit), Just(Fit::WorstFit)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..6, 1usize..300, fit())
            .prop_map(|(pid, size, strategy)| Op::Request { pid, size, strategy }),
        3 => (0u8..6).prop_map(|pid| Op::Release { pid }),
        1 => (0u8..6).prop_map(|pid| Op::ReleaseAll { pid }),
        1 => Just(Op::Compact),
    ]
}

fn pid(n: u8) -> ProcessId {
    ProcessId::new(&format!("P{}", n)).unwrap()
}

fn apply(manager: &mut MemoryManager, op: &Op) {
    match op {
        Op::Request { pid: n, size, strategy } => {
            let _ = manager.request(pid(*n), *size, *strategy);
        }
        Op::Release { pid: n } => {
            let _ = manager.release(&pid(*n));
        }
        Op::ReleaseAll { pid: n } => {
            let _ = manager.release_all(&pid(*n));
        }
        Op::Compact => {
            manager.compact();
        }
    }
}

proptest! {
    #[test]
    fn partition_stays_well_formed(ops in proptest::collection::vec(op(), 1..60)) {
        let mut manager = MemoryManager::new(TOTAL).unwrap();
        for op in &ops {
            apply(&mut manager, op);

            prop_assert_eq!(manager.check_invariants(), Ok(()));
            let covered: usize = manager.blocks().iter().map(|b| b.size).sum();
            prop_assert_eq!(covered, TOTAL);
            prop_assert!(manager.blocks().windows(2).all(|w| w[0].start < w[1].start));
        }
    }

    #[test]
    fn failed_operations_change_nothing(ops in proptest::collection::vec(op(), 1..40)) {
        let mut manager = MemoryManager::new(TOTAL).unwrap();
        for op in &ops {
            let before = manager.clone();
            let failed = match op {
                Op::Request { pid: n, size, strategy } => {
                    manager.request(pid(*n), *size, *strategy).is_err()
                }
                Op::Release { pid: n } => manager.release(&pid(*n)).is_err(),
                Op::ReleaseAll { pid: n } => manager.release_all(&pid(*n)).is_err(),
                Op::Compact => {
                    manager.compact();
                    false
                }
            };
            if failed {
                prop_assert_eq!(&manager, &before);
            }
        }
    }

    #[test]
    fn compaction_leaves_single_trailing_hole(ops in proptest::collection::vec(op(), 1..60)) {
        let mut manager = MemoryManager::new(TOTAL).unwrap();
        for op in &ops {
            apply(&mut manager, op);
        }
        let used = manager.used_memory();
        let owners: Vec<_> = manager
            .blocks()
            .iter()
            .filter(|b| b.is_allocated())
            .map(|b| (b.owner.clone(), b.size))
            .collect();

        manager.compact();
        let once = manager.clone();
        manager.compact();
        prop_assert_eq!(&manager, &once);

        let free: Vec<_> = manager.blocks().iter().filter(|b| b.is_free()).collect();
        prop_assert!(free.len() <= 1);
        if let Some(hole) = free.first() {
            prop_assert_eq!(hole.start, used);
            prop_assert_eq!(hole.end(), TOTAL);
        }

        let compacted: Vec<_> = manager
            .blocks()
            .iter()
            .filter(|b| b.is_allocated())
            .map(|b| (b.owner.clone(), b.size))
            .collect();
        prop_assert_eq!(compacted, owners);
    }
}

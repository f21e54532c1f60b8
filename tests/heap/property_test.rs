/*!
 * Heap Property Tests
 * Randomized operation sequences checked against the arena partition
 */

use arena_heap::Heap;
use proptest::prelude::*;

const ARENA: usize = 4096;

#[derive(Debug, Clone)]
enum Op {
    Allocate(usize),
    ReleaseNth(usize),
    Coalesce,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..=512).prop_map(Op::Allocate),
        2 => (0usize..64).prop_map(Op::ReleaseNth),
        1 => Just(Op::Coalesce),
    ]
}

fn apply(heap: &mut Heap, live: &mut Vec<usize>, op: Op) {
    match op {
        Op::Allocate(size) => {
            if let Some(address) = heap.allocate(size) {
                live.push(address);
            }
        }
        Op::ReleaseNth(n) => {
            if !live.is_empty() {
                let address = live.swap_remove(n % live.len());
                heap.release(address);
            }
        }
        Op::Coalesce => heap.coalesce(),
    }
}

/// Allocated and free regions together must tile the arena exactly.
fn check_partition(heap: &Heap) {
    let (total, used, available) = heap.info();
    assert_eq!(used + available, total);

    let mut extents: Vec<(usize, usize)> = heap
        .allocated_regions()
        .iter()
        .chain(heap.free_regions().iter())
        .map(|region| (region.base, region.length))
        .collect();
    extents.sort_unstable();

    let mut cursor = 0;
    for (base, length) in extents {
        assert_eq!(base, cursor, "gap or overlap at 0x{:x}", base);
        cursor += length;
    }
    assert_eq!(cursor, total, "extents do not cover the arena");
}

fn check_sorted(heap: &Heap) {
    for list in [heap.allocated_regions(), heap.free_regions()] {
        for pair in list.windows(2) {
            assert!(pair[0].base < pair[1].base, "list out of order");
            assert!(pair[0].end() <= pair[1].base, "regions overlap");
        }
    }
}

proptest! {
    #[test]
    fn prop_partition_holds_after_any_op_sequence(
        ops in prop::collection::vec(op_strategy(), 1..256),
    ) {
        let mut heap = Heap::with_capacity(ARENA);
        let mut live = Vec::new();

        for op in ops {
            apply(&mut heap, &mut live, op);
            check_partition(&heap);
            check_sorted(&heap);
        }
    }

    #[test]
    fn prop_first_fit_returns_lowest_adequate_base(
        ops in prop::collection::vec(op_strategy(), 1..64),
        size in 1usize..256,
    ) {
        let mut heap = Heap::with_capacity(ARENA);
        let mut live = Vec::new();
        for op in ops {
            apply(&mut heap, &mut live, op);
        }

        // The free list is sorted by base, so the first adequate region
        // is the lowest-address one
        let expected = heap
            .free_regions()
            .iter()
            .find(|region| region.length >= size)
            .map(|region| region.base);
        prop_assert_eq!(heap.allocate(size), expected);
    }

    #[test]
    fn prop_coalesce_preserves_free_bytes(
        ops in prop::collection::vec(op_strategy(), 1..128),
    ) {
        let mut heap = Heap::with_capacity(ARENA);
        let mut live = Vec::new();
        for op in ops {
            apply(&mut heap, &mut live, op);
        }

        let bytes_before: usize = heap.free_regions().iter().map(|r| r.length).sum();
        let count_before = heap.free_regions().len();

        heap.coalesce();

        let bytes_after: usize = heap.free_regions().iter().map(|r| r.length).sum();
        prop_assert_eq!(bytes_before, bytes_after);
        prop_assert!(heap.free_regions().len() <= count_before);

        // A second pass finds nothing left to merge
        let snapshot = heap.free_regions().to_vec();
        heap.coalesce();
        prop_assert_eq!(heap.free_regions(), snapshot.as_slice());
    }

    #[test]
    fn prop_write_read_roundtrip(
        data in prop::collection::vec(any::<u8>(), 1..512),
    ) {
        let mut heap = Heap::with_capacity(ARENA);
        let address = heap.allocate(data.len()).unwrap();

        heap.write(address, &data).unwrap();
        prop_assert_eq!(heap.read(address, data.len()).unwrap(), data);
    }
}

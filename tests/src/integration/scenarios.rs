//! # Ordering Scenarios
//!
//! Calculator laws exercised on pool graphs with content-hashed entries:
//!
//! | Law | Test |
//! |-----|------|
//! | Empty input | `no_enqueue_returns_empty_list` |
//! | Single anchor | `anchor_entry_returns_single_entry_list` |
//! | Anchor exclusion | `entry_with_immediate_parents_returns_child_entry` |
//! | Non-anchor inclusion | `entry_with_ancestor_depth_returns_non_anchor_entries` |
//! | Enqueue-order invariance | `entry_with_ancestor_depth_enqueued_backwards_*` |

#[cfg(test)]
mod tests {
    use crate::fixtures::{init_tracing, random_pool, PoolFixture};
    use tx_order_calculator::domain::invariants::{
        invariant_adjacency_transposed, invariant_minimal_selection, invariant_no_duplicates,
        invariant_topological_order,
    };
    use tx_order_calculator::{OrderingError, TransactionOrderCalculator, TxHash};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// parent_4 -> parent_1 -> child, with anchors parent_2, parent_3, parent_4
    /// also feeding child.
    fn ancestor_depth_pool() -> (PoolFixture, [TxHash; 5]) {
        let mut pool = PoolFixture::new();
        let parent_1 = pool.entry(1);
        let parent_2 = pool.entry(2);
        let parent_3 = pool.entry(3);
        let parent_4 = pool.entry(4);
        let child = pool.entry(5);
        pool.connect(parent_1, child);
        pool.connect(parent_2, child);
        pool.connect(parent_3, child);
        pool.connect(parent_4, child);
        pool.connect(parent_4, parent_1);

        (pool, [parent_1, parent_2, parent_3, parent_4, child])
    }

    // =============================================================================
    // CALCULATOR LAWS
    // =============================================================================

    #[test]
    fn no_enqueue_returns_empty_list() {
        let pool = PoolFixture::new();

        let result = pool.order(&[]).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn anchor_entry_returns_single_entry_list() {
        let mut pool = PoolFixture::new();
        let entry = pool.entry(1);

        let result = pool.order(&[entry]).unwrap();

        assert_eq!(result, vec![entry]);
    }

    #[test]
    fn entry_with_immediate_parents_returns_child_entry() {
        let mut pool = PoolFixture::new();
        let parent_1 = pool.entry(1);
        let parent_2 = pool.entry(2);
        let parent_3 = pool.entry(3);
        let child = pool.entry(4);
        pool.connect(parent_1, child);
        pool.connect(parent_2, child);
        pool.connect(parent_3, child);

        let result = pool.order(&[child]).unwrap();
        assert_eq!(result, vec![child]);

        pool.sever(&[parent_1, parent_2, parent_3, child]);
        assert_eq!(pool.graph.edge_count(), 0);
    }

    #[test]
    fn entry_with_ancestor_depth_returns_non_anchor_entries() {
        init_tracing();
        let (mut pool, [parent_1, parent_2, parent_3, parent_4, child]) = ancestor_depth_pool();

        let result = pool.order(&[child]).unwrap();
        assert_eq!(result, vec![parent_1, child]);

        pool.sever(&[parent_1, parent_2, parent_3, parent_4, child]);
        assert!(invariant_adjacency_transposed(&pool.graph));
        assert_eq!(pool.graph.edge_count(), 0);
    }

    #[test]
    fn entry_with_ancestor_depth_enqueued_backwards_returns_non_anchor_entries() {
        let (mut pool, [parent_1, parent_2, parent_3, parent_4, child]) = ancestor_depth_pool();

        let result = pool.order(&[child, parent_1]).unwrap();
        assert_eq!(result, vec![parent_1, child]);

        pool.sever(&[parent_1, parent_2, parent_3, parent_4, child]);
    }

    #[test]
    fn entry_with_ancestor_depth_enqueued_forwards_matches_backwards() {
        let (pool, [parent_1, _, _, _, child]) = ancestor_depth_pool();

        assert_eq!(
            pool.order(&[parent_1, child]).unwrap(),
            pool.order(&[child, parent_1]).unwrap()
        );
    }

    #[test]
    fn severed_pool_orders_every_entry_as_anchor() {
        let (mut pool, entries) = ancestor_depth_pool();
        pool.sever(&entries);

        let [_, _, _, _, child] = entries;
        assert_eq!(pool.order(&[child]).unwrap(), vec![child]);
    }

    #[test]
    fn diamond_ancestry_emitted_once() {
        //   root
        //   /  \
        //  a    b
        //   \  /
        //    c
        //    |
        //    d
        let mut pool = PoolFixture::new();
        let root = pool.entry(10);
        let a = pool.entry(11);
        let b = pool.entry(12);
        let c = pool.entry(13);
        let d = pool.entry(14);
        pool.connect(root, a);
        pool.connect(root, b);
        pool.connect(a, c);
        pool.connect(b, c);
        pool.connect(c, d);

        let result = pool.order(&[d, c, d]).unwrap();

        assert_eq!(result, vec![a, b, c, d]);
    }

    #[test]
    fn validation_context_travels_untouched() {
        let mut pool = PoolFixture::new();
        let parent = pool.entry(1);
        let child = pool.entry(2);
        pool.connect(parent, child);

        pool.order(&[child]).unwrap();

        let node = pool.graph.get(&child).unwrap();
        assert_eq!(node.context().height, 0);
    }

    #[test]
    fn unknown_entry_rejected() {
        let mut pool = PoolFixture::new();
        pool.entry(1);
        let stranger = crate::fixtures::entry_hash(99);

        assert_eq!(
            pool.order(&[stranger]),
            Err(OrderingError::UnknownNode(stranger))
        );
    }

    // =============================================================================
    // RANDOMIZED POOLS
    // =============================================================================

    #[test]
    fn random_pools_satisfy_ordering_invariants() {
        for seed in 0..32 {
            let (graph, hashes) = random_pool(seed, 64, 3);
            let requested: Vec<TxHash> = hashes.iter().step_by(5).copied().collect();

            let mut calculator = TransactionOrderCalculator::new(&graph);
            for hash in requested.iter().rev() {
                calculator.enqueue(*hash).unwrap();
            }
            let ordered = calculator.order_transactions().unwrap();

            assert!(invariant_topological_order(&graph, &ordered), "seed {seed}");
            assert!(invariant_no_duplicates(&ordered), "seed {seed}");
            assert!(
                invariant_minimal_selection(&graph, &requested, &ordered),
                "seed {seed}"
            );
        }
    }
}

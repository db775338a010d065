use common::{init_logger, Dumb};
use dynamic_biconnectivity::{
    connectivity::{AdjacencyConnectivity, DynamicConnectivity, SpanningForest},
    link_cut_tree::LCT,
    lists::treap::Treaps,
    BiconnectivitySolver, SplayLCT,
};
use rand::prelude::*;

mod common;

struct DynConTests<T>(std::marker::PhantomData<T>)
where
    T: DynamicConnectivity;

impl<T> DynConTests<T>
where
    T: DynamicConnectivity,
{
    fn assert_all_connections(t: &mut T, groups: &[&[usize]]) {
        for g1 in groups {
            for u in g1.iter().copied() {
                for g2 in groups {
                    for v in g2.iter().copied() {
                        assert_eq!(t.connected(u, v), g1 == g2, "u {u} v {v}\n{t:?}");
                    }
                }
            }
        }
    }

    fn test_dyn_con() {
        let mut t = T::new(5);
        Self::assert_all_connections(&mut t, &[&[0], &[1], &[2], &[3], &[4]]);
        assert!(t.insert(0, 1));
        assert!(t.insert(0, 2));
        assert!(!t.insert(0, 1));
        assert!(!t.insert(1, 0));
        assert!(!t.insert(3, 3));
        assert!(!t.delete(1, 2));
        assert_eq!(t.num_edges(), 2);
        assert!(t.has_edge(1, 0));
        assert!(!t.has_edge(1, 2));
        Self::assert_all_connections(&mut t, &[&[0, 1, 2], &[3], &[4]]);
        assert!(t.insert(1, 4));
        Self::assert_all_connections(&mut t, &[&[0, 1, 2, 4], &[3]]);
        assert!(t.delete(1, 0));
        Self::assert_all_connections(&mut t, &[&[0, 2], &[1, 4], &[3]]);
        assert_eq!(t.num_edges(), 2);
    }

    /// Deleting a tree edge of a cycle must find the rest of the cycle.
    fn test_replacement() {
        let mut t = T::new(6);
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)] {
            assert!(t.insert(u, v));
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            assert!(t.delete(u, v));
            assert!(t.connected(0, 4), "after deleting ({u}, {v})\n{t:?}");
            assert!(t.insert(u, v));
        }
        assert!(t.delete(3, 0));
        Self::assert_all_connections(&mut t, &[&[0, 1, 2, 3, 4], &[5]]);
        assert!(t.delete(2, 3));
        Self::assert_all_connections(&mut t, &[&[0, 1, 2], &[3, 4], &[5]]);
        assert!(t.insert(2, 5));
        assert!(t.insert(5, 4));
        assert!(t.delete(1, 2));
        Self::assert_all_connections(&mut t, &[&[0, 1], &[2, 3, 4, 5]]);
    }

    fn test_all() {
        init_logger();
        Self::test_dyn_con();
        Self::test_replacement();
    }

    fn compare_with_dumb(seed: u64) {
        const N: usize = 25;
        let mut t1 = T::new(N);
        let mut t2 = Dumb::new(N);
        let mut edges = vec![];
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        for q in 0..5000 {
            if edges.is_empty() || rng.gen_bool(0.55) {
                let u = rng.gen_range(0..N);
                let v = rng.gen_range(0..N);
                let added = t1.insert(u, v);
                assert_eq!(added, t2.add_edge(u, v), "q {q} insert {u} {v}");
                if added {
                    edges.push((u, v));
                }
            } else {
                let idx = rng.gen_range(0..edges.len());
                let (u, v) = edges.swap_remove(idx);
                assert!(t1.delete(u, v));
                assert!(t2.remove_edge(u, v));
            }
            assert_eq!(t1.num_edges(), edges.len());
            if q % 10 == 0 {
                for u in 0..N {
                    for v in 0..N {
                        assert_eq!(
                            t1.connected(u, v),
                            t2.is_connected(u, v),
                            "q {q} u {u} v {v}\n{t1:?}"
                        );
                    }
                }
            }
        }
    }
}

type Forest = SpanningForest<SplayLCT>;
type TreapForest = SpanningForest<LCT<Treaps>>;

#[test]
fn test_dumb() {
    init_logger();
    let mut t = Dumb::new(3);
    assert!(t.add_edge(0, 1));
    assert!(!t.add_edge(1, 0));
    assert!(t.is_connected(1, 0));
    assert!(!t.is_connected(2, 0));
}

#[test]
fn test_forest() {
    DynConTests::<Forest>::test_all();
}

#[test]
fn test_treap_forest() {
    DynConTests::<TreapForest>::test_all();
}

#[test]
fn test_adjacency() {
    DynConTests::<AdjacencyConnectivity>::test_all();
}

#[test]
fn test_forest_classification() {
    let mut t = Forest::new(4);
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
        t.insert(u, v);
    }
    assert!(t.is_tree_edge(0, 1));
    assert!(t.is_tree_edge(2, 1));
    assert!(!t.is_tree_edge(0, 2));
    assert_eq!(t.num_tree_edges(), 3);
    assert_eq!(t.tree_path(0, 3), [0, 1, 2, 3]);
    // (0, 2) is the only non-tree edge, so it replaces (1, 2).
    assert!(t.delete(1, 2));
    assert!(t.is_tree_edge(0, 2));
    assert_eq!(t.num_tree_edges(), 3);
    assert_eq!(t.tree_path(1, 3), [1, 0, 2, 3]);
    assert!(t.delete(2, 3));
    assert_eq!(t.tree_path(1, 3), Vec::<usize>::new());
}

#[test]
fn test_cmp1() {
    DynConTests::<Forest>::compare_with_dumb(9232345);
    DynConTests::<AdjacencyConnectivity>::compare_with_dumb(9232345);
}

#[test]
fn test_cmp2() {
    DynConTests::<Forest>::compare_with_dumb(100000007);
    DynConTests::<TreapForest>::compare_with_dumb(100000007);
}

#[test]
fn test_cmp3() {
    DynConTests::<TreapForest>::compare_with_dumb(3);
}

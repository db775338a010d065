use std::fmt::Debug;

use derivative::Derivative;

use crate::connectivity::{DynamicConnectivity, SpanningForest};
use crate::link_cut_tree::LinkCutTree;

pub trait BiconnectivitySolver {
    /// New instance for an empty graph on n nodes
    fn new(n: usize) -> Self;
    /// Add an edge between u and v. Returns whether is was added.
    fn add_edge(&mut self, u: usize, v: usize) -> bool;
    /// Remove an edge between u and v. Returns whether it was removed.
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;
    /// Check if u and v are connected.
    fn is_connected(&mut self, u: usize, v: usize) -> bool;
    /// Check if no single vertex other than u and v separates them.
    fn are_biconnected(&mut self, u: usize, v: usize) -> bool;
}

/// Answer to a biconnectivity query, with the evidence found along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biconnectivity {
    /// There is no path between the vertices.
    Disconnected,
    /// Every interior vertex of the tree path was checked.
    Biconnected { chain_len: usize },
    /// Removing `articulation` disconnects its neighbours on the tree path.
    Separated {
        articulation: usize,
        chain_len: usize,
    },
}

impl Biconnectivity {
    pub fn is_biconnected(&self) -> bool {
        matches!(self, Self::Biconnected { .. })
    }
}

/// Keeps a spanning forest of the whole graph and, for every vertex w, a connectivity
/// oracle over G - {w}. Every update is applied to all of them before returning.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: Debug"))]
pub struct BiconnectivityEngine<C, T>
where
    C: DynamicConnectivity,
    T: LinkCutTree,
{
    global: SpanningForest<T>,
    /// `excluding[w]` sees every edge not incident to w. Created on its first edge.
    #[derivative(Debug = "ignore")]
    excluding: Vec<Option<C>>,
}

impl<C, T> BiconnectivityEngine<C, T>
where
    C: DynamicConnectivity,
    T: LinkCutTree + Debug,
{
    pub fn num_vertices(&self) -> usize {
        self.excluding.len()
    }

    pub fn num_edges(&self) -> usize {
        self.global.num_edges()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.global.has_edge(u, v)
    }

    /// The oracle over G - {w}, if any edge avoiding w was ever added.
    pub fn excluding(&self, w: usize) -> Option<&C> {
        self.excluding[w].as_ref()
    }

    fn excluded_connected(&mut self, w: usize, a: usize, b: usize) -> bool {
        match &mut self.excluding[w] {
            Some(oracle) => oracle.connected(a, b),
            None => a == b,
        }
    }

    /// Walks the forest path between u and v and checks, for every interior vertex, whether
    /// its two path neighbours stay connected without it.
    pub fn query_detailed(&mut self, u: usize, v: usize) -> Biconnectivity {
        let path = self.global.tree_path(u, v);
        if path.is_empty() {
            return Biconnectivity::Disconnected;
        }
        let mut chain_len = 0;
        for w in path.windows(3) {
            let [prev, mid, next] = [w[0], w[1], w[2]];
            chain_len += 1;
            if !self.excluded_connected(mid, prev, next) {
                log::debug!("({prev}, {next}) disconnected in G - {{{mid}}}");
                return Biconnectivity::Separated {
                    articulation: mid,
                    chain_len,
                };
            }
            log::debug!("({prev}, {next}) connected in G - {{{mid}}}");
        }
        Biconnectivity::Biconnected { chain_len }
    }
}

impl<C, T> BiconnectivitySolver for BiconnectivityEngine<C, T>
where
    C: DynamicConnectivity,
    T: LinkCutTree + Debug,
{
    fn new(n: usize) -> Self {
        Self {
            global: SpanningForest::new(n),
            excluding: std::iter::repeat_with(|| None).take(n).collect(),
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.global.insert(u, v) {
            return false;
        }
        let n = self.excluding.len();
        for (w, oracle) in self.excluding.iter_mut().enumerate() {
            if w == u || w == v {
                continue;
            }
            let added = oracle.get_or_insert_with(|| C::new(n)).insert(u, v);
            assert!(added, "G - {{{w}}} already had edge ({u}, {v})");
        }
        log::trace!(
            "added ({u}, {v}) as {} edge",
            if self.global.is_tree_edge(u, v) {
                "tree"
            } else {
                "non-tree"
            }
        );
        true
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.global.delete(u, v) {
            return false;
        }
        for (w, oracle) in self.excluding.iter_mut().enumerate() {
            if w == u || w == v {
                continue;
            }
            let removed = oracle.as_mut().is_some_and(|o| o.delete(u, v));
            assert!(removed, "G - {{{w}}} was missing edge ({u}, {v})");
        }
        log::trace!("removed ({u}, {v})");
        true
    }

    fn is_connected(&mut self, u: usize, v: usize) -> bool {
        self.global.connected(u, v)
    }

    fn are_biconnected(&mut self, u: usize, v: usize) -> bool {
        self.query_detailed(u, v).is_biconnected()
    }
}

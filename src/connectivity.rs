//! Fully dynamic connectivity oracles.

use std::collections::{BTreeSet, VecDeque};
use std::fmt::Debug;

use crate::link_cut_tree::LinkCutTree;
use crate::pairing::{pair, unpair, EdgeKey};

/// Dynamic connectivity on a simple undirected graph over vertices 0..n.
pub trait DynamicConnectivity: Debug {
    /// New instance for an empty graph on n nodes
    fn new(n: usize) -> Self;
    /// Add an edge between u and v. Returns whether it was added.
    fn insert(&mut self, u: usize, v: usize) -> bool;
    /// Remove an edge between u and v. Returns whether it was removed.
    fn delete(&mut self, u: usize, v: usize) -> bool;
    /// Check if u and v are connected.
    fn connected(&mut self, u: usize, v: usize) -> bool;
    /// Is the edge (u, v) present?
    fn has_edge(&self, u: usize, v: usize) -> bool;
    /// Number of edges present.
    fn num_edges(&self) -> usize;
}

/// Spanning forest kept in a link cut tree, plus the set of edges outside of it.
/// Deleting a tree edge scans the non-tree edges, in key order, for a replacement.
#[derive(Debug)]
pub struct SpanningForest<T: LinkCutTree> {
    forest: T,
    tree_edges: BTreeSet<EdgeKey>,
    non_tree_edges: BTreeSet<EdgeKey>,
}

impl<T: LinkCutTree> SpanningForest<T> {
    pub fn is_tree_edge(&self, u: usize, v: usize) -> bool {
        self.tree_edges.contains(&pair(u, v))
    }
    pub fn num_tree_edges(&self) -> usize {
        self.tree_edges.len()
    }
    /// Vertices on the forest path from u to v, both inclusive. Empty if not connected.
    pub fn tree_path(&mut self, u: usize, v: usize) -> Vec<usize> {
        self.forest.undirected_path(u, v)
    }
    /// Links the first non-tree edge joining the two trees that a cut just separated.
    fn replace(&mut self) -> Option<EdgeKey> {
        let forest = &mut self.forest;
        let key = self.non_tree_edges.iter().copied().find(|&key| {
            let (x, y) = unpair(key);
            !forest.connected(x, y)
        })?;
        self.non_tree_edges.remove(&key);
        let (x, y) = unpair(key);
        assert!(forest.link(x, y), "replacement edge ({x}, {y}) already connected");
        self.tree_edges.insert(key);
        log::debug!("replacement edge ({x}, {y})");
        Some(key)
    }
}

impl<T: LinkCutTree + Debug> DynamicConnectivity for SpanningForest<T> {
    fn new(n: usize) -> Self {
        Self {
            forest: T::new(n),
            tree_edges: BTreeSet::new(),
            non_tree_edges: BTreeSet::new(),
        }
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        let key = pair(u, v);
        if u == v || self.has_edge(u, v) {
            return false;
        }
        if self.forest.link(u, v) {
            self.tree_edges.insert(key);
        } else {
            self.non_tree_edges.insert(key);
        }
        true
    }

    fn delete(&mut self, u: usize, v: usize) -> bool {
        let key = pair(u, v);
        if self.non_tree_edges.remove(&key) {
            return true;
        }
        if !self.tree_edges.remove(&key) {
            return false;
        }
        assert!(self.forest.cut_edge(u, v), "tree edge ({u}, {v}) missing");
        self.replace();
        true
    }

    fn connected(&mut self, u: usize, v: usize) -> bool {
        self.forest.connected(u, v)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        let key = pair(u, v);
        self.tree_edges.contains(&key) || self.non_tree_edges.contains(&key)
    }

    fn num_edges(&self) -> usize {
        self.tree_edges.len() + self.non_tree_edges.len()
    }
}

/// Plain adjacency sets. Updates are O(log n), connectivity is a BFS.
#[derive(Debug, Clone)]
pub struct AdjacencyConnectivity {
    adj: Vec<BTreeSet<usize>>,
    num_edges: usize,
}

impl DynamicConnectivity for AdjacencyConnectivity {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![BTreeSet::new(); n],
            num_edges: 0,
        }
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.adj[u].insert(v) {
            return false;
        }
        self.adj[v].insert(u);
        self.num_edges += 1;
        true
    }

    fn delete(&mut self, u: usize, v: usize) -> bool {
        if !self.adj[u].remove(&v) {
            return false;
        }
        self.adj[v].remove(&u);
        self.num_edges -= 1;
        true
    }

    fn connected(&mut self, u: usize, v: usize) -> bool {
        let mut seen = vec![false; self.adj.len()];
        let mut queue = VecDeque::from([u]);
        seen[u] = true;
        while let Some(x) = queue.pop_front() {
            if x == v {
                return true;
            }
            for &y in &self.adj[x] {
                if !seen[y] {
                    seen[y] = true;
                    queue.push_back(y);
                }
            }
        }
        false
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(&v)
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }
}

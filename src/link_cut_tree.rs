//! Link Cut Tree implementation, without aggregated data.

use crate::lists::Lists;

pub type Node = usize;

/// Interface of a Link Cut Tree.
/// It maintains a collection of trees dynamically. This implementation doesn't have any data associated with the nodes.
pub trait LinkCutTree {
    /// Create a new LinkCutTree with n vertices and no edges.
    fn new(n: usize) -> Self;
    /// Adds a new singleton tree. Returns its node, which increases from 0.
    fn make_node(&mut self) -> Node;
    /// Number of nodes.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the root of the tree containing u.
    fn root(&mut self, u: Node) -> Node;
    /// Are u and v in the same tree?
    fn connected(&mut self, u: Node, v: Node) -> bool {
        self.root(u) == self.root(v)
    }
    /// Adds an edge between u and v. Returns false, without changing anything, if they were in the same tree.
    /// Reroots v, and keeps the root of the tree containing u the same.
    fn link(&mut self, u: Node, v: Node) -> bool;
    /// Cuts u from its immediate parent. Returns the parent of u.
    fn cut(&mut self, u: Node) -> Option<Node>;
    /// Removes the tree edge between u and v. Returns false, without changing anything, if there is no such edge.
    fn cut_edge(&mut self, u: Node, v: Node) -> bool;
    /// Makes u the root of its current tree.
    fn reroot(&mut self, u: Node);
    /// Exposes the path from the root to u. Returns the lowest common ancestor of u and the
    /// previously accessed node, if they are in the same tree.
    fn access(&mut self, u: Node) -> Node;
    /// The lowest common ancestor of u and v. None if they are in different trees.
    fn lca(&mut self, u: Node, v: Node) -> Option<Node>;
    /// Nodes from the root of u's tree down to u, inclusive.
    fn path_to_root(&mut self, u: Node) -> Vec<Node>;
    /// Nodes on the tree path from u to v, both inclusive. Empty if they are in different trees.
    fn undirected_path(&mut self, u: Node, v: Node) -> Vec<Node> {
        let path_u = self.path_to_root(u);
        let lca = self.access(v);
        let path_v = self.path_to_root(v);
        if path_u.first() != path_v.first() {
            return vec![];
        }
        // Both paths start at the root, so the lca sits at the same depth in each.
        let depth = path_v
            .iter()
            .position(|&x| x == lca)
            .expect("lca must be on the path to the root");
        debug_assert_eq!(path_u.get(depth), Some(&lca));
        path_u[depth..]
            .iter()
            .rev()
            .chain(&path_v[depth + 1..])
            .copied()
            .collect()
    }
}

#[derive(Debug)]
pub struct LCT<L>
where
    L: Lists,
{
    l: L,
    // Non-EMPTY iff the node is a root of a preferred path that is not the topmost.
    parent: Vec<usize>,
}

impl<L> LinkCutTree for LCT<L>
where
    L: Lists,
{
    fn new(n: usize) -> Self {
        let mut lct = Self {
            l: L::new(n),
            parent: Vec::with_capacity(n),
        };
        for i in 0..n {
            assert_eq!(lct.make_node(), i);
        }
        lct
    }

    fn make_node(&mut self) -> Node {
        let u = self.l.create();
        self.parent.push(L::EMPTY);
        u
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn root(&mut self, u: Node) -> Node {
        self.access(u);
        self.l.first(u)
    }

    fn link(&mut self, u: Node, v: Node) -> bool {
        if self.root(u) == self.root(v) {
            return false;
        }
        self.reroot(v);
        self.parent[v] = u;
        log::trace!("link({u}, {v})");
        true
    }

    fn cut(&mut self, u: Node) -> Option<Node> {
        self.access(u);
        if self.l.is_first(u) {
            return None;
        }
        let p = self.l.prev(u);
        // split ..p from u
        let order = self.l.order(u);
        self.l.split(u, ..order);
        log::trace!("cut({u}) from {p}");
        Some(p)
    }

    fn cut_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v {
            return false;
        }
        self.reroot(u);
        self.access(v);
        // With u as the root, the edge exists iff u is right before v on the root path.
        if self.l.prev(v) != u {
            return false;
        }
        let p = self.cut(v);
        debug_assert_eq!(p, Some(u));
        true
    }

    fn reroot(&mut self, u: Node) {
        self.access(u);
        // u will be the new root
        self.l.reverse(u);
    }

    /// Returns the point where the access operation entered the topmost preferred path.
    /// That is, returns the LCA of u with the last node that called access.
    fn access(&mut self, mut u: Node) -> Node {
        let mut prev_topmost = L::EMPTY;
        let mut last_u = u;
        while u != L::EMPTY {
            let order = self.l.order(u);
            let (_, _, after) = self.l.split(u, ..=order);
            debug_assert!(self.l.is_last(u));
            if after != L::EMPTY {
                let head = self.l.first(after);
                self.parent[head] = u;
            }
            self.l.concat(u, prev_topmost);
            last_u = u;
            let head = self.l.first(u);
            (u, prev_topmost) = (std::mem::replace(&mut self.parent[head], L::EMPTY), head);
        }
        last_u
    }

    fn lca(&mut self, u: Node, v: Node) -> Option<Node> {
        self.access(u);
        let ru = self.l.first(u);
        let lca = self.access(v);
        let rv = self.l.first(v);
        (ru == rv).then_some(lca)
    }

    fn path_to_root(&mut self, u: Node) -> Vec<Node> {
        self.access(u);
        // u is the last node of the exposed path, so the whole list is root..=u
        self.l.to_vec(u)
    }
}

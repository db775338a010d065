use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};
use derivative::Derivative;

use super::{node2_fmt, node_fmt, Idx, Lists, PrettyIdx as I};

#[derive(Derivative)]
#[derivative(Debug)]
struct Node {
    #[derivative(Debug(format_with = "node_fmt"))]
    parent: Idx,
    /// Left and right child
    #[derivative(Debug(format_with = "node2_fmt"))]
    child: [Idx; 2],
    /// The subtree of this node must be mirrored. This node's own children are not swapped yet.
    flip_subtree: bool,
    size: usize,
}

impl Node {
    fn new() -> Self {
        Self {
            parent: Splays::EMPTY,
            child: [Splays::EMPTY; 2],
            flip_subtree: false,
            size: 1,
        }
    }
}

/// Splay trees over an arena of nodes. Every access splays the touched node, so sequences of
/// operations on the same list run in amortized O(log n).
pub struct Splays {
    nodes: Vec<Node>,
}

impl Debug for Splays {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch("Splays");
        for u in 0..self.nodes.len() {
            if self.nodes[u].parent == Self::EMPTY {
                self.tree_inorder_dbg(u, &builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl Splays {
    fn tree_inorder_dbg<T: AsTree>(&self, u: Idx, tree: &T) {
        let nu = &self.nodes[u];
        if nu.child[0] != Self::EMPTY {
            add_branch_to!(*tree, "left child of {u}");
            self.tree_inorder_dbg(nu.child[0], tree);
        }
        add_branch_to!(*tree, "[{u}] {nu:?}");
        if nu.child[1] != Self::EMPTY {
            self.tree_inorder_dbg(nu.child[1], tree);
        }
    }
    fn size(&self, u: Idx) -> usize {
        if u == Self::EMPTY {
            0
        } else {
            self.nodes[u].size
        }
    }
    fn recalc(&mut self, u: Idx) {
        let [l, r] = self.nodes[u].child;
        self.nodes[u].size = self.size(l) + 1 + self.size(r);
    }
    /// Applies a pending flip to u's children.
    fn push(&mut self, u: Idx) {
        let n = &mut self.nodes[u];
        if n.flip_subtree {
            n.flip_subtree = false;
            n.child.swap(0, 1);
            for c in n.child {
                if c != Self::EMPTY {
                    self.nodes[c].flip_subtree ^= true;
                }
            }
        }
    }
    /// Which child of its parent u is. Parent must exist and be pushed.
    fn dir(&self, u: Idx) -> usize {
        let p = self.nodes[u].parent;
        (self.nodes[p].child[1] == u) as usize
    }
    fn rotate(&mut self, x: Idx) {
        let p = self.nodes[x].parent;
        let g = self.nodes[p].parent;
        let d = self.dir(x);
        if g != Self::EMPTY {
            let gd = self.dir(p);
            self.nodes[g].child[gd] = x;
        }
        let b = self.nodes[x].child[d ^ 1];
        self.nodes[p].child[d] = b;
        if b != Self::EMPTY {
            self.nodes[b].parent = p;
        }
        self.nodes[x].child[d ^ 1] = p;
        self.nodes[p].parent = x;
        self.nodes[x].parent = g;
        self.recalc(p);
        self.recalc(x);
    }
    /// Makes u the root of its tree, with u's flip already applied.
    fn splay(&mut self, u: Idx) {
        let mut path = vec![u];
        while let Some(&top) = path.last() {
            let p = self.nodes[top].parent;
            if p == Self::EMPTY {
                break;
            }
            path.push(p);
        }
        for &x in path.iter().rev() {
            self.push(x);
        }
        while self.nodes[u].parent != Self::EMPTY {
            let p = self.nodes[u].parent;
            if self.nodes[p].parent != Self::EMPTY {
                if self.dir(u) == self.dir(p) {
                    self.rotate(p);
                } else {
                    self.rotate(u);
                }
            }
            self.rotate(u);
        }
    }
    fn top(&self, mut u: Idx) -> Idx {
        while self.nodes[u].parent != Self::EMPTY {
            u = self.nodes[u].parent;
        }
        u
    }
    /// Detaches the first k nodes of the tree rooted at u. Returns (first k, rest).
    fn split_k(&mut self, u: Idx, k: usize) -> (Idx, Idx) {
        if u == Self::EMPTY || k == 0 {
            return (Self::EMPTY, u);
        }
        if k >= self.size(u) {
            return (u, Self::EMPTY);
        }
        let x = self.find_kth(u, k - 1);
        // x is now the root, and everything after it is its right child
        let r = self.nodes[x].child[1];
        self.nodes[x].child[1] = Self::EMPTY;
        self.nodes[r].parent = Self::EMPTY;
        self.recalc(x);
        log::trace!("split_k({u}, {k}) = ({x}, {r})");
        (x, r)
    }
}

impl Lists for Splays {
    const EMPTY: Idx = usize::MAX;

    fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn create(&mut self) -> Idx {
        let idx = self.nodes.len();
        self.nodes.push(Node::new());
        idx
    }

    fn total_size(&self) -> usize {
        self.nodes.len()
    }

    fn root(&mut self, u: Idx) -> Idx {
        if u == Self::EMPTY {
            return Self::EMPTY;
        }
        self.top(u)
    }

    fn order(&mut self, u: Idx) -> usize {
        if u == Self::EMPTY {
            return 0;
        }
        self.splay(u);
        self.size(self.nodes[u].child[0])
    }

    fn len(&mut self, u: Idx) -> usize {
        if u == Self::EMPTY {
            return 0;
        }
        self.splay(u);
        self.nodes[u].size
    }

    fn find_kth(&mut self, u: Idx, mut k: usize) -> Idx {
        if u == Self::EMPTY {
            return Self::EMPTY;
        }
        let mut u = self.top(u);
        if k >= self.nodes[u].size {
            return Self::EMPTY;
        }
        loop {
            self.push(u);
            let [l, r] = self.nodes[u].child;
            let sl = self.size(l);
            if sl > k {
                u = l;
            } else if sl == k {
                break;
            } else {
                k -= sl + 1;
                u = r;
            }
        }
        self.splay(u);
        u
    }

    fn to_vec(&mut self, u: Idx) -> Vec<Idx> {
        if u == Self::EMPTY {
            return vec![];
        }
        let root = self.top(u);
        let mut out = Vec::with_capacity(self.nodes[root].size);
        let mut stack = vec![];
        let mut cur = root;
        loop {
            while cur != Self::EMPTY {
                self.push(cur);
                stack.push(cur);
                cur = self.nodes[cur].child[0];
            }
            let Some(top) = stack.pop() else {
                break;
            };
            out.push(top);
            cur = self.nodes[top].child[1];
        }
        out
    }

    fn concat(&mut self, u: Idx, v: Idx) -> Idx {
        let (u, v) = (self.root(u), self.root(v));
        log::trace!("concat({}, {})", I(u), I(v));
        if u == v {
            return u;
        }
        if u == Self::EMPTY {
            return v;
        }
        if v == Self::EMPTY {
            return u;
        }
        let last = self.last(u);
        // last is now the root and has no right child
        self.nodes[last].child[1] = v;
        self.nodes[v].parent = last;
        self.recalc(last);
        last
    }

    fn split_lr(&mut self, u: Idx, ql: usize, qr: usize) -> (Idx, Idx, Idx) {
        let u = self.root(u);
        let (l, mr) = self.split_k(u, ql);
        let (m, r) = self.split_k(mr, qr.saturating_sub(ql));
        log::trace!(
            "split({}, {ql}, {qr}) = ({}, {}, {})",
            I(u),
            I(l),
            I(m),
            I(r)
        );
        (l, m, r)
    }

    fn reverse(&mut self, u: Idx) {
        let u = self.root(u);
        if u != Self::EMPTY {
            self.nodes[u].flip_subtree ^= true;
        }
    }
}

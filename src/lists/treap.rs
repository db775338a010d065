use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};
use derivative::Derivative;
use rand::{rngs, Rng, SeedableRng};

use super::{node2_fmt, node_fmt, Idx, Lists, PrettyIdx as I};

#[derive(Derivative)]
#[derivative(Debug)]
struct Node {
    #[derivative(Debug(format_with = "node_fmt"))]
    parent: Idx,
    /// Left and right child
    #[derivative(Debug(format_with = "node2_fmt"))]
    child: [Idx; 2],
    /// This nodes children should be flipped.
    flip_subtree: bool,
    size: usize,
    #[derivative(Debug = "ignore")]
    priority: u32,
}

impl Node {
    fn new(priority: u32) -> Self {
        Self {
            child: [Treaps::EMPTY; 2],
            parent: Treaps::EMPTY,
            size: 1,
            priority,
            flip_subtree: false,
        }
    }
    fn flip(&self, flipped: bool) -> bool {
        self.flip_subtree ^ flipped
    }
}

/// Randomized treaps over an arena of nodes. Reads never restructure the trees.
pub struct Treaps {
    nodes: Vec<Node>,
    rng: rngs::StdRng,
}

impl Debug for Treaps {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch("Treaps");
        for u in 0..self.nodes.len() {
            if self.nodes[u].parent == Self::EMPTY {
                self.tree_inorder_dbg(u, &builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl Treaps {
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
    fn n(&self, u: Idx) -> Option<&Node> {
        if u == Self::EMPTY {
            None
        } else {
            Some(&self.nodes[u])
        }
    }
    fn child(&self, u: Idx, flipped: bool) -> [usize; 2] {
        self.n(u).map_or([Self::EMPTY; 2], |n| {
            if n.flip(flipped) {
                [n.child[1], n.child[0]]
            } else {
                n.child
            }
        })
    }
    // Panics if empty. Returns old value
    fn change_left(&mut self, u: Idx, new_l: Idx, flipped: bool) -> Idx {
        let li = self.nodes[u].flip(flipped) as usize;
        let old_l = self.nodes[u].child[li];
        if old_l != Self::EMPTY {
            self.nodes[old_l].parent = Self::EMPTY;
        }
        self.nodes[u].child[li] = new_l;
        if new_l != Self::EMPTY {
            self.nodes[new_l].parent = u;
        }
        self.recalc(u);
        old_l
    }
    fn change_right(&mut self, u: Idx, new_r: Idx, flipped: bool) -> Idx {
        self.change_left(u, new_r, !flipped)
    }
    fn size(&self, u: Idx) -> usize {
        self.n(u).map_or(0, |n| n.size)
    }
    fn parent(&self, u: Idx) -> Idx {
        self.n(u).map_or(Self::EMPTY, |n| n.parent)
    }
    fn recalc(&mut self, u: Idx) {
        let [l, r] = self.nodes[u].child;
        self.nodes[u].size = self.size(l) + 1 + self.size(r);
    }
    fn unlaze_flip(&mut self, u: Idx) {
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
    fn top(&self, mut u: Idx) -> Idx {
        while self.parent(u) != Self::EMPTY {
            u = self.nodes[u].parent;
        }
        u
    }
    /// (First k, rest). u must be a root.
    fn split_k(&mut self, u: Idx, k: usize) -> (Idx, Idx) {
        if u == Self::EMPTY || k == 0 {
            // If k == 0 the node is fully returned on the right
            return (Self::EMPTY, u);
        }
        // Detached children must carry the flip on their own.
        self.unlaze_flip(u);
        let [l, r] = self.nodes[u].child;
        let szl = self.size(l);
        if k <= szl {
            self.change_left(u, Self::EMPTY, false);
            let (ll, lr) = self.split_k(l, k);
            (ll, self.concat_inner(lr, u))
        } else {
            self.change_right(u, Self::EMPTY, false);
            let (rl, rr) = self.split_k(r, k - szl - 1);
            (self.concat_inner(u, rl), rr)
        }
    }
    fn concat_inner(&mut self, u: Idx, v: Idx) -> Idx {
        if u == Self::EMPTY {
            return v;
        } else if v == Self::EMPTY {
            return u;
        }
        if self.nodes[u].priority > self.nodes[v].priority {
            self.unlaze_flip(u);
            let old_r = self.change_right(u, Self::EMPTY, false);
            let new_r = self.concat_inner(old_r, v);
            self.change_right(u, new_r, false);
            u
        } else {
            self.unlaze_flip(v);
            let old_l = self.change_left(v, Self::EMPTY, false);
            let new_l = self.concat_inner(u, old_l);
            self.change_left(v, new_l, false);
            v
        }
    }
}

impl Lists for Treaps {
    const EMPTY: Idx = usize::MAX;

    fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            rng: rngs::StdRng::seed_from_u64(2012),
        }
    }

    fn create(&mut self) -> Idx {
        let idx = self.nodes.len();
        let priority = self.rng.gen();
        self.nodes.push(Node::new(priority));
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
        let mut path = vec![];
        let mut cur = u;
        while cur != Self::EMPTY {
            path.push(cur);
            cur = self.parent(cur);
        }
        path.reverse();
        let mut flipped = false;
        let mut ord = 0;
        for w in path.windows(2) {
            let [p, c] = [w[0], w[1]];
            let [l, r] = self.child(p, flipped);
            if c == r {
                ord += self.size(l) + 1
            }
            flipped = self.nodes[p].flip(flipped);
        }
        let [ul, _] = self.child(u, flipped);
        ord + self.size(ul)
    }

    fn len(&mut self, u: Idx) -> usize {
        if u == Self::EMPTY {
            0
        } else {
            self.nodes[self.top(u)].size
        }
    }

    fn find_kth(&mut self, u: Idx, mut k: usize) -> Idx {
        if u == Self::EMPTY {
            return Self::EMPTY;
        }
        let mut flipped = false;
        let mut u = self.top(u);
        while u != Self::EMPTY {
            let [l, r] = self.child(u, flipped);
            flipped = self.nodes[u].flip(flipped);
            let sl = self.size(l);
            if sl > k {
                u = l;
            } else if sl == k {
                return u;
            } else {
                k -= sl + 1;
                u = r;
            }
        }
        Self::EMPTY
    }

    fn to_vec(&mut self, u: Idx) -> Vec<Idx> {
        if u == Self::EMPTY {
            return vec![];
        }
        let root = self.top(u);
        let mut out = Vec::with_capacity(self.nodes[root].size);
        // (node, flipped state of its parent chain)
        let mut stack = vec![];
        let (mut cur, mut flipped) = (root, false);
        loop {
            while cur != Self::EMPTY {
                stack.push((cur, flipped));
                let [l, _] = self.child(cur, flipped);
                flipped = self.nodes[cur].flip(flipped);
                cur = l;
            }
            let Some((top, top_flipped)) = stack.pop() else {
                break;
            };
            out.push(top);
            let [_, r] = self.child(top, top_flipped);
            (cur, flipped) = (r, self.nodes[top].flip(top_flipped));
        }
        out
    }

    fn concat(&mut self, u: Idx, v: Idx) -> Idx {
        let (u, v) = (self.root(u), self.root(v));
        if u == v {
            return u;
        }
        log::trace!("concat({}, {})", I(u), I(v));
        self.concat_inner(u, v)
    }

    fn split_lr(&mut self, u: Idx, ql: usize, qr: usize) -> (Idx, Idx, Idx) {
        let u = self.root(u);
        let (l, mr) = self.split_k(u, ql);
        let (m, r) = self.split_k(mr, qr.saturating_sub(ql));
        log::trace!(
            "split({}, {ql}, {qr}) = (l={}, m={}, r={})",
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

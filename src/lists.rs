use std::fmt::{Debug, Display, Formatter};
use std::ops::RangeBounds;

pub mod splay;
pub mod treap;

pub type Idx = usize;

/// This data structure stores multiple ordered lists of nodes, all living in one arena.
/// Nodes are created with keys 0..n, in order.
///
/// Most operations take `&mut self` so self-adjusting implementations can restructure on reads.
pub trait Lists
where
    Self: Debug,
{
    /// Returned when the node doesn't exist.
    const EMPTY: Idx;
    /// New Lists with given capacity.
    fn new(capacity: usize) -> Self;
    /// Create a new node in a list of its own. Returns its index, which increases from 0.
    fn create(&mut self) -> Idx;
    /// Number of nodes in all lists.
    fn total_size(&self) -> usize;

    // OPERATIONS
    // They panic if the node doesn't exist, unless said otherwise.

    /// Returns the root of the list containing u. Only stable until the next operation.
    fn root(&mut self, u: Idx) -> Idx;
    /// Position of u in its list, 0-indexed.
    fn order(&mut self, u: Idx) -> usize;
    /// Size of the list containing u. 0 for EMPTY.
    fn len(&mut self, u: Idx) -> usize;
    /// K-th element in the list containing u (0-indexed), or EMPTY.
    fn find_kth(&mut self, u: Idx, k: usize) -> Idx;
    fn is_first(&mut self, u: Idx) -> bool {
        self.order(u) == 0
    }
    fn is_last(&mut self, u: Idx) -> bool {
        self.order(u) + 1 == self.len(u)
    }
    /// First element in the list containing u.
    fn first(&mut self, u: Idx) -> Idx {
        self.find_kth(u, 0)
    }
    /// Last element in the list containing u.
    fn last(&mut self, u: Idx) -> Idx {
        let len = self.len(u);
        match len.checked_sub(1) {
            Some(k) => self.find_kth(u, k),
            None => Self::EMPTY,
        }
    }
    /// Node after u in its list.
    fn next(&mut self, u: Idx) -> Idx {
        let k = self.order(u);
        self.find_kth(u, k + 1)
    }
    /// Node before u in its list.
    fn prev(&mut self, u: Idx) -> Idx {
        match self.order(u).checked_sub(1) {
            Some(k) => self.find_kth(u, k),
            None => Self::EMPTY,
        }
    }
    /// Are the two nodes on the same list?
    fn on_same_list(&mut self, u: Idx, v: Idx) -> bool {
        self.root(u) == self.root(v)
    }
    /// All nodes of the list containing u, in order.
    fn to_vec(&mut self, u: Idx) -> Vec<Idx> {
        let mut out = Vec::with_capacity(self.len(u));
        let mut cur = self.first(u);
        while cur != Self::EMPTY {
            out.push(cur);
            cur = self.next(cur);
        }
        out
    }

    /// Concats the lists containing u and v, either may be EMPTY. Returns the new root.
    fn concat(&mut self, u: Idx, v: Idx) -> Idx;
    /// Concats all given lists. Returns the new root.
    fn concat_all(&mut self, all: impl IntoIterator<Item = Idx>) -> Idx {
        let mut u = Self::EMPTY;
        for v in all {
            u = self.concat(u, v);
        }
        u
    }
    /// Splits the list containing u with the given range from the left and right parts. Returns (left, range, right), which may be EMPTY.
    fn split(&mut self, u: Idx, range: impl RangeBounds<usize>) -> (Idx, Idx, Idx) {
        let [l, r] = range_to_lr(range, || self.len(u));
        self.split_lr(u, l, r)
    }
    /// XXX: Use split(u, l..r) instead.
    fn split_lr(&mut self, u: Idx, l: usize, r: usize) -> (Idx, Idx, Idx);
    /// Reverse the whole list containing u.
    fn reverse(&mut self, u: Idx);
}

fn range_to_lr(range: impl RangeBounds<usize>, len: impl FnOnce() -> usize) -> [usize; 2] {
    use std::ops::Bound::*;
    let start = match range.start_bound() {
        Included(start) => *start,
        Excluded(start) => *start + 1,
        Unbounded => 0,
    };
    let end = match range.end_bound() {
        Included(end) => *end + 1,
        Excluded(end) => *end,
        Unbounded => len(),
    };
    [start, end]
}

pub(crate) fn node_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == usize::MAX {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

pub(crate) fn node2_fmt([u, v]: &[Idx; 2], f: &mut Formatter) -> std::fmt::Result {
    write!(f, "[")?;
    node_fmt(u, f)?;
    write!(f, ", ")?;
    node_fmt(v, f)?;
    write!(f, "]")
}

/// Used to pretty print a Idx, outputting ∅ if it is EMPTY.
pub struct PrettyIdx(pub Idx);

impl Display for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        node_fmt(&self.0, f)
    }
}

impl Debug for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

use dynamic_biconnectivity::link_cut_tree::*;

/// Forest as a plain parent array. Rerooting and linking mirror `LCT`, so both agree on roots.
#[derive(Debug)]
pub struct SlowLCT {
    parent: Vec<usize>,
    last_access: Option<Node>,
}

impl SlowLCT {
    fn ancestors(&self, mut u: Node) -> Vec<Node> {
        let mut path = vec![u];
        while self.parent[u] != u {
            u = self.parent[u];
            path.push(u);
        }
        path
    }
}

impl LinkCutTree for SlowLCT {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            last_access: None,
        }
    }

    fn make_node(&mut self) -> Node {
        self.parent.push(self.parent.len());
        self.parent.len() - 1
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn root(&mut self, u: Node) -> Node {
        *self.ancestors(u).last().unwrap()
    }

    fn link(&mut self, u: Node, v: Node) -> bool {
        if self.root(u) == self.root(v) {
            return false;
        }
        self.reroot(v);
        self.parent[v] = u;
        true
    }

    fn cut(&mut self, u: Node) -> Option<Node> {
        let p = self.parent[u];
        self.parent[u] = u;
        (u != p).then_some(p)
    }

    fn cut_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v {
            return false;
        }
        self.reroot(u);
        if self.parent[v] != u {
            return false;
        }
        self.cut(v);
        true
    }

    fn reroot(&mut self, u: Node) {
        let p = self.parent[u];
        if p != u {
            self.reroot(p);
            self.parent[p] = u;
            self.parent[u] = u;
        }
    }

    fn access(&mut self, u: Node) -> Node {
        let lca = self
            .last_access
            .and_then(|last| self.lca(last, u))
            .unwrap_or(u);
        self.last_access = Some(u);
        lca
    }

    fn lca(&mut self, u: Node, v: Node) -> Option<Node> {
        let au = self.ancestors(u);
        let av = self.ancestors(v);
        if au.last() != av.last() {
            return None;
        }
        au.into_iter().find(|x| av.contains(x))
    }

    fn path_to_root(&mut self, u: Node) -> Vec<Node> {
        self.access(u);
        let mut path = self.ancestors(u);
        path.reverse();
        path
    }
}

pub mod biconnectivity;
pub mod connectivity;
pub mod link_cut_tree;
pub mod lists;
pub mod pairing;
pub mod protocol;
pub use biconnectivity::{Biconnectivity, BiconnectivityEngine, BiconnectivitySolver};
pub use connectivity::DynamicConnectivity;

use connectivity::{AdjacencyConnectivity, SpanningForest};
use link_cut_tree::LCT;
use lists::splay::Splays;

/// Link cut tree over splay trees, the default forest for every structure of this crate.
pub type SplayLCT = LCT<Splays>;

/// Exclusion oracles are spanning forests with linear replacement search.
pub type FastBiconnectivitySolver = BiconnectivityEngine<SpanningForest<SplayLCT>, SplayLCT>;

/// Exclusion oracles are plain adjacency sets, answering probes with a graph search.
pub type AdjacencyBiconnectivitySolver = BiconnectivityEngine<AdjacencyConnectivity, SplayLCT>;

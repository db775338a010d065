use dynamic_biconnectivity::{Biconnectivity, BiconnectivitySolver, FastBiconnectivitySolver};

fn add_edge(t: &mut impl BiconnectivitySolver, u: usize, v: usize) {
    println!("Adding edge from {} to {}", u, v);
    t.add_edge(u, v);
}

fn rem_edge(t: &mut impl BiconnectivitySolver, u: usize, v: usize) {
    println!("Removing edge from {} to {}", u, v);
    t.remove_edge(u, v);
}

fn biconnected(t: &mut FastBiconnectivitySolver, u: usize, v: usize) {
    let answer = match t.query_detailed(u, v) {
        Biconnectivity::Disconnected => "No, they are not even connected".to_owned(),
        Biconnectivity::Biconnected { chain_len } => {
            format!("Yes ({chain_len} vertices checked)")
        }
        Biconnectivity::Separated { articulation, .. } => {
            format!("No, {articulation} separates them")
        }
    };
    println!("Are {} and {} biconnected? {}", u, v, answer);
}

fn main() {
    let mut t = FastBiconnectivitySolver::new(5);
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)] {
        t.add_edge(u, v);
    }
    println!("Created two triangles sharing vertex 2");
    biconnected(&mut t, 0, 1);
    biconnected(&mut t, 0, 3);
    add_edge(&mut t, 1, 3);
    biconnected(&mut t, 0, 3);
    biconnected(&mut t, 0, 4);
    rem_edge(&mut t, 2, 0);
    biconnected(&mut t, 0, 4);
    rem_edge(&mut t, 0, 1);
    biconnected(&mut t, 0, 4);
}

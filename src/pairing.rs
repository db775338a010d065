//! Identity of an undirected edge as a single integer, through the Cantor pairing function
//! applied to the ordered pair (min, max).

/// Key of an undirected edge. Keys order edges by `max(u, v) + min(u, v)` first.
pub type EdgeKey = u64;

fn triangle(s: u128) -> u128 {
    s * (s + 1) / 2
}

/// Key of the unordered pair {u, v}. `pair(u, v) == pair(v, u)`.
///
/// Panics if the key doesn't fit in an [`EdgeKey`], which happens once `u + v` is about 6 * 10^9.
pub fn pair(u: usize, v: usize) -> EdgeKey {
    let (x, y) = (u.min(v) as u128, u.max(v) as u128);
    let key = triangle(x + y) + y;
    EdgeKey::try_from(key)
        .unwrap_or_else(|_| panic!("edge ({u}, {v}) has no {}-bit key", EdgeKey::BITS))
}

/// Inverse of [`pair`]. Returns the endpoints with the smaller one first.
pub fn unpair(key: EdgeKey) -> (usize, usize) {
    let key = key as u128;
    // Largest s with triangle(s) <= key, corrected after the float estimate.
    let mut s = (((8.0 * key as f64 + 1.0).sqrt() - 1.0) / 2.0) as u128;
    while triangle(s) > key {
        s -= 1;
    }
    while triangle(s + 1) <= key {
        s += 1;
    }
    let y = key - triangle(s);
    let x = s - y;
    (x as usize, y as usize)
}

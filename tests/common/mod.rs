use std::collections::BTreeSet;
use std::sync::{LazyLock, Mutex};

use dynamic_biconnectivity::BiconnectivitySolver;
use flexi_logger::{Logger, LoggerHandle};
use scopeguard::{OnUnwind, ScopeGuard};

pub mod slow_lct;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the structure if the test panics while it is alive.
#[allow(dead_code)]
pub fn guard<T: std::fmt::Debug>(t: T) -> ScopeGuard<T, impl FnOnce(T), OnUnwind> {
    scopeguard::guard_on_unwind(t, |t| log::error!("Crash with {t:?}"))
}

/// Brute force: keeps the adjacency sets and searches the graph on every question.
#[derive(Debug, Clone)]
pub struct Dumb {
    adj: Vec<BTreeSet<usize>>,
}

#[allow(dead_code)]
impl Dumb {
    /// Is there a u-v path avoiding `without`?
    pub fn connected_without(&self, u: usize, v: usize, without: Option<usize>) -> bool {
        let mut seen = vec![false; self.adj.len()];
        if let Some(w) = without {
            seen[w] = true;
        }
        let mut stack = vec![u];
        seen[u] = true;
        while let Some(x) = stack.pop() {
            if x == v {
                return true;
            }
            stack.extend(self.adj[x].iter().copied().filter(|&y| {
                if seen[y] {
                    false
                } else {
                    seen[y] = true;
                    true
                }
            }));
        }
        false
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        (0..self.adj.len())
            .flat_map(|u| self.adj[u].range(u + 1..).map(move |&v| (u, v)))
            .collect()
    }
}

impl BiconnectivitySolver for Dumb {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![BTreeSet::new(); n],
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        u != v && self.adj[u].insert(v) && self.adj[v].insert(u)
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        self.adj[u].remove(&v) && self.adj[v].remove(&u)
    }

    fn is_connected(&mut self, u: usize, v: usize) -> bool {
        self.connected_without(u, v, None)
    }

    fn are_biconnected(&mut self, u: usize, v: usize) -> bool {
        self.connected_without(u, v, None)
            && (0..self.adj.len())
                .filter(|&w| w != u && w != v)
                .all(|w| self.connected_without(u, v, Some(w)))
    }
}

//! Line protocol: a vertex count, then one `op u v` command per line.
//! `op` is 0 to add an edge, 1 to remove it and 2 to ask whether u and v are biconnected.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::biconnectivity::BiconnectivitySolver;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("missing vertex count on the first line")]
    MissingHeader,

    #[error("line {line}: invalid vertex count {token:?}")]
    InvalidHeader { line: usize, token: String },

    #[error("line {line}: expected `op u v`, found {found:?}")]
    Malformed { line: usize, found: String },

    #[error("line {line}: unknown operation {op}")]
    UnknownOp { line: usize, op: u64 },

    #[error("line {line}: vertex {vertex} out of range for {n} vertices")]
    VertexOutOfRange { line: usize, vertex: usize, n: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add(usize, usize),
    Remove(usize, usize),
    Query(usize, usize),
}

impl Command {
    /// Parses `op u v` and checks the vertices against n. `line` is only used for errors.
    pub fn parse(s: &str, n: usize, line: usize) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::Malformed {
            line,
            found: s.to_owned(),
        };
        let mut tokens = s.split_whitespace().map(u64::from_str);
        let (Some(Ok(op)), Some(Ok(u)), Some(Ok(v)), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(malformed());
        };
        let [u, v] = [u, v].map(|x| usize::try_from(x).unwrap_or(usize::MAX));
        if let Some(&vertex) = [u, v].iter().find(|&&x| x >= n) {
            return Err(ProtocolError::VertexOutOfRange { line, vertex, n });
        }
        match op {
            0 => Ok(Self::Add(u, v)),
            1 => Ok(Self::Remove(u, v)),
            2 => Ok(Self::Query(u, v)),
            op => Err(ProtocolError::UnknownOp { line, op }),
        }
    }
}

/// Reads the vertex count from the first non-blank line. Returns it with the line number.
pub fn read_header(input: &mut impl BufRead) -> Result<(usize, usize), ProtocolError> {
    let mut line = 0;
    let mut buf = String::new();
    loop {
        buf.clear();
        line += 1;
        if input.read_line(&mut buf)? == 0 {
            return Err(ProtocolError::MissingHeader);
        }
        let token = buf.trim();
        if token.is_empty() {
            continue;
        }
        return token
            .parse()
            .map(|n| (n, line))
            .map_err(|_| ProtocolError::InvalidHeader {
                line,
                token: token.to_owned(),
            });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub added: usize,
    pub removed: usize,
    pub queries: usize,
    /// Adds of present edges and removes of absent ones.
    pub ignored: usize,
    pub elapsed: Duration,
    /// Resident set size at the end of the run, where the platform reports it.
    pub resident_kb: Option<u64>,
}

/// Resident set size of this process in kB, from `/proc/self/status`.
#[cfg(target_os = "linux")]
pub fn resident_memory_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    status
        .lines()
        .find_map(|l| l.strip_prefix("VmRSS:"))
        .and_then(|v| v.trim().trim_end_matches("kB").trim().parse().ok())
}

#[cfg(not(target_os = "linux"))]
pub fn resident_memory_kb() -> Option<u64> {
    None
}

/// Applies every command after the header to the solver, writing one line per query.
/// `first_line` is the line number of the header, for error messages.
pub fn run<S: BiconnectivitySolver>(
    solver: &mut S,
    n: usize,
    first_line: usize,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<RunStats, ProtocolError> {
    let start = Instant::now();
    let mut stats = RunStats::default();
    for (i, line) in input.lines().enumerate() {
        let line_no = first_line + i + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line, n, line_no)? {
            Command::Add(u, v) => {
                if solver.add_edge(u, v) {
                    stats.added += 1;
                } else {
                    stats.ignored += 1;
                }
            }
            Command::Remove(u, v) => {
                if solver.remove_edge(u, v) {
                    stats.removed += 1;
                } else {
                    stats.ignored += 1;
                }
            }
            Command::Query(u, v) => {
                stats.queries += 1;
                let answer = if solver.are_biconnected(u, v) {
                    "biconnected"
                } else {
                    "not biconnected"
                };
                writeln!(output, "{u} {v} {answer}")?;
            }
        }
    }
    stats.elapsed = start.elapsed();
    stats.resident_kb = resident_memory_kb();
    log::info!(
        "{} adds, {} removes, {} queries, {} ignored in {:?}",
        stats.added,
        stats.removed,
        stats.queries,
        stats.ignored,
        stats.elapsed
    );
    Ok(stats)
}

/// Reads the header and runs the rest of the input. Unless `quiet`, ends with the elapsed time
/// and, where available, the resident memory.
pub fn run_all<S: BiconnectivitySolver>(
    mut input: impl BufRead,
    output: &mut impl Write,
    quiet: bool,
) -> Result<RunStats, ProtocolError> {
    let (n, header_line) = read_header(&mut input)?;
    log::info!("{n} vertices");
    let mut solver = S::new(n);
    let stats = run(&mut solver, n, header_line, input, output)?;
    if !quiet {
        writeln!(output, "{} s", stats.elapsed.as_secs_f64())?;
        if let Some(kb) = stats.resident_kb {
            writeln!(output, "{kb} kB")?;
        }
    }
    output.flush()?;
    Ok(stats)
}

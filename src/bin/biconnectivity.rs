use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dynamic_biconnectivity::{
    protocol::{self, ProtocolError, RunStats},
    AdjacencyBiconnectivitySolver, FastBiconnectivitySolver,
};
use flexi_logger::Logger;

/// Connectivity oracle kept for every excluded vertex.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Oracle {
    /// Spanning forest in a link cut tree, with replacement search on deletion
    Forest,
    /// Adjacency sets, searched on every connectivity check
    Adjacency,
}

/// Answers biconnectivity queries over a graph under edge insertions and deletions.
/// Reads `n` and then `op u v` lines from stdin; `RUST_LOG` sets the log level.
#[derive(Parser, Debug)]
#[command(name = "biconnectivity")]
struct Args {
    /// Oracle used for each graph with one vertex removed
    #[arg(short, long, value_enum, default_value_t = Oracle::Forest)]
    oracle: Oracle,

    /// Don't print the time and memory lines after the answers
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: &Args) -> Result<RunStats, ProtocolError> {
    let input = io::stdin().lock();
    let mut output = BufWriter::new(io::stdout().lock());
    match args.oracle {
        Oracle::Forest => {
            protocol::run_all::<FastBiconnectivitySolver>(input, &mut output, args.quiet)
        }
        Oracle::Adjacency => {
            protocol::run_all::<AdjacencyBiconnectivitySolver>(input, &mut output, args.quiet)
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with answers.
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|l| l.log_to_stderr().start())
        .map_err(|e| eprintln!("logger disabled: {e}"))
        .ok();
    let args = Args::parse();
    log::debug!("{args:?}");
    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["biconnectivity"]).unwrap();
        assert_eq!((args.oracle, args.quiet), (Oracle::Forest, false));
        let args =
            Args::try_parse_from(["biconnectivity", "--oracle", "adjacency", "--quiet"]).unwrap();
        assert_eq!((args.oracle, args.quiet), (Oracle::Adjacency, true));
        let args = Args::try_parse_from(["biconnectivity", "-q", "-o", "forest"]).unwrap();
        assert_eq!((args.oracle, args.quiet), (Oracle::Forest, true));
    }

    #[test]
    fn test_bad_args() {
        use clap::error::ErrorKind;
        let kind = |argv: &[&str]| Args::try_parse_from(argv).unwrap_err().kind();
        assert_eq!(kind(&["biconnectivity", "--oracle"]), ErrorKind::InvalidValue);
        assert_eq!(
            kind(&["biconnectivity", "--oracle", "polylog"]),
            ErrorKind::InvalidValue
        );
        assert_eq!(kind(&["biconnectivity", "--quite"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["biconnectivity", "--help"]), ErrorKind::DisplayHelp);
    }
}

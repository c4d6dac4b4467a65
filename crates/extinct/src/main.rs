//! `extinct [OPTIONS] <N> <u1> <v1> [<u2> <v2> ...]`
//!
//! Prints one line per class of automorphically equivalent infection
//! patterns: the member states, then the expected extinction time.
//! Logging goes to stderr; set `RUST_LOG=debug` to follow the phases.

use std::ffi::OsString;
use std::process::ExitCode;

use log::debug;
use thiserror::Error;

use extinct::prelude::*;

const USAGE: &str = "\
usage: extinct [OPTIONS] <N> <u1> <v1> [<u2> <v2> ...]

Prints, for every class of automorphically equivalent infection patterns
of the N-node graph with edges u1-v1, u2-v2, ..., the expected SIS
extinction time as a rational function of the infection/recovery rate
ratio.

options:
  --var NAME    print the rate ratio as NAME (default x)
  --at P[/Q]    also evaluate every answer at the rate ratio P/Q
  --check       verify the solution before printing it
  -h, --help    print this message
";

#[derive(Debug, Error)]
enum UsageError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),

    #[error("expected a node count followed by at least one edge")]
    MissingArguments,

    #[error("edge endpoints must come in pairs")]
    OddEndpoints,

    #[error("{0:?} is not a non-negative integer")]
    NotANumber(String),

    #[error("invalid rate ratio: {0}")]
    Ratio(#[from] ParseRationalError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug)]
struct Invocation {
    graph: Graph,
    config: ExtinctionConfig,
}

/// Parses the command line; `Ok(None)` means help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Invocation>, UsageError> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut config = ExtinctionConfig::default().with_checks(args.contains("--check"));
    if let Some(variable) = args.opt_value_from_str::<_, String>("--var")? {
        config = config.with_variable(variable);
    }
    if let Some(ratio) = args.opt_value_from_str::<_, String>("--at")? {
        config = config.with_evaluation(ratio.parse()?);
    }

    let free = args.finish();
    if free.len() < 3 {
        return Err(UsageError::MissingArguments);
    }
    if free.len() % 2 == 0 {
        return Err(UsageError::OddEndpoints);
    }

    let numbers = free.iter().map(parse_number).collect::<Result<Vec<_>, _>>()?;
    let edges: Vec<(usize, usize)> = numbers[1..].chunks(2).map(|e| (e[0], e[1])).collect();
    let graph = Graph::from_edges(numbers[0], &edges)?;
    debug!(
        "graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    Ok(Some(Invocation { graph, config }))
}

fn parse_number(arg: &OsString) -> Result<usize, UsageError> {
    arg.to_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| UsageError::NotANumber(arg.to_string_lossy().into_owned()))
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn")); // `RUST_LOG=${LEVEL}` env variable to override

    let invocation = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("extinct: {err}");
            eprint!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    let run = ExtinctionRun::new(&invocation.graph).with_config(invocation.config);
    match run.run() {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("extinct: {err}");
            ExitCode::from(2)
        }
    }
}

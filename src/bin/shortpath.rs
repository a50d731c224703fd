use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use shortpath::io::{read_matrix_graph, TextGraphs};
use shortpath::report;

/// Shortest-path and traversal reports over graph description files.
#[derive(Parser)]
#[command(name = "shortpath", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All-pairs shortest-path report for weighted descriptions
    Matrix {
        /// Graph description file
        file: PathBuf,
    },
    /// Adjacency and depth-first reports for unweighted descriptions
    List {
        /// Graph description file
        file: PathBuf,
    },
    /// Single-pair shortest-path report for a weighted description
    Route {
        /// Graph description file
        file: PathBuf,
        /// Source node id
        from: usize,
        /// Destination node id
        to: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> shortpath::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Matrix { file } => {
            let mut graphs = TextGraphs::new(BufReader::new(File::open(file)?));
            while let Some(graph) = graphs.next_matrix()? {
                report::write_all_pairs(&graph, &mut out)?;
            }
        }
        Command::List { file } => {
            let mut graphs = TextGraphs::new(BufReader::new(File::open(file)?));
            while let Some(graph) = graphs.next_list()? {
                report::write_adjacency(&graph, &mut out)?;
                report::write_depth_first(&graph, &mut out)?;
            }
        }
        Command::Route { file, from, to } => {
            let graph = read_matrix_graph(BufReader::new(File::open(file)?))?;
            report::write_route(&graph, from, to, &mut out)?;
        }
    }

    Ok(())
}

//! Command dispatch logic for trellis
use std::time::Instant;

use crate::cli::{Algo, Cli, Commands, GraphArgs};
use crate::commands;
use trellis_core::error::Result;
use trellis_core::graph::WeightedGraph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Show { graph }) => handle_show(cli, graph, start),

        Some(Commands::Traverse { root, algo, graph }) => {
            handle_traverse(cli, root, *algo, graph, start)
        }

        Some(Commands::Shortest { from, to, graph }) => {
            handle_shortest(cli, from, to.as_deref(), graph, start)
        }

        Some(Commands::Matrix { graph }) => handle_matrix(cli, graph, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("trellis {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("An in-memory graph CLI for scripts and pipelines.");
    println!();
    println!("Run `trellis --help` for usage information.");
    Ok(())
}

fn build_graph(cli: &Cli, args: &GraphArgs, start: Instant) -> Result<WeightedGraph<String>> {
    let graph = commands::build::assemble(args)?;
    if cli.verbose {
        eprintln!("build_graph: {:?}", start.elapsed());
    }
    Ok(graph)
}

fn handle_show(cli: &Cli, args: &GraphArgs, start: Instant) -> Result<()> {
    let graph = build_graph(cli, args, start)?;
    commands::show::execute(cli, &graph)
}

fn handle_traverse(
    cli: &Cli,
    root: &str,
    algo: Algo,
    args: &GraphArgs,
    start: Instant,
) -> Result<()> {
    let graph = build_graph(cli, args, start)?;
    commands::traverse::execute(cli, &graph, root, algo)
}

fn handle_shortest(
    cli: &Cli,
    from: &str,
    to: Option<&str>,
    args: &GraphArgs,
    start: Instant,
) -> Result<()> {
    let graph = build_graph(cli, args, start)?;
    commands::shortest::execute(cli, &graph, from, to)
}

fn handle_matrix(cli: &Cli, args: &GraphArgs, start: Instant) -> Result<()> {
    let graph = build_graph(cli, args, start)?;
    commands::matrix::execute(cli, &graph)
}

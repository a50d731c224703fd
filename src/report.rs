//! Column-formatted text reports over the graph engines.
//!
//! Presentation only - everything here reads the engines' query surface
//! and writes to a caller-supplied sink, so the same reports serve the
//! CLI and the tests. The layouts are stable but not bit-exact contracts.

use std::fmt::{Debug, Display};
use std::io::Write;
use std::ops::Add;

use num_traits::Zero;

use crate::algorithm::traversal::depth_first_order;
use crate::graph::adjacency::ListGraph;
use crate::graph::matrix::MatrixGraph;
use crate::graph::traits::Graph;
use crate::Result;

const NO_PATH: &str = "----";

/// Full all-pairs report: one block per source node with its label,
/// followed by distance, path, and destination label columns for every
/// other destination.
pub fn write_all_pairs<W, Out>(graph: &MatrixGraph<W>, out: &mut Out) -> Result<()>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug + Display,
    Out: Write + ?Sized,
{
    writeln!(
        out,
        "{:<26}{:<11}{:<9}{:<12}Path",
        "Description", "From node", "To node", "Dijkstra's"
    )?;

    let table = graph.table();
    for from in 1..=graph.node_count() {
        if let Some(label) = graph.label(from) {
            writeln!(out, "{label}")?;
        }
        for to in 1..=graph.node_count() {
            if to == from {
                continue;
            }
            write!(out, "{from:>35}{to:>5}")?;
            match table.distance(from, to) {
                Some(distance) => {
                    write!(out, "{distance:>14}    ")?;
                    if let Some(nodes) = table.path(from, to) {
                        write!(out, "{}", path_text(&nodes))?;
                    }
                    match graph.label(to) {
                        Some(label) => writeln!(out, "    {label}")?,
                        None => writeln!(out)?,
                    }
                }
                None => writeln!(out, "{NO_PATH:>14}")?,
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Single-pair report: distance and path on one line, then the label of
/// every node along the path.
pub fn write_route<W, Out>(
    graph: &MatrixGraph<W>,
    from: usize,
    to: usize,
    out: &mut Out,
) -> Result<()>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug + Display,
    Out: Write + ?Sized,
{
    match graph.route(from, to)? {
        Some(route) => {
            writeln!(
                out,
                "{from:>4}{to:>8}{:>8}        {}",
                route.distance,
                path_text(&route.nodes)
            )?;
            for node in route.nodes {
                if let Some(label) = graph.label(node) {
                    writeln!(out, "{label}")?;
                }
            }
        }
        None => writeln!(out, "{from:>4}{to:>8}      {NO_PATH}")?,
    }
    writeln!(out)?;
    Ok(())
}

/// Per-node adjacency listing: each node's label followed by its edges
/// in traversal order.
pub fn write_adjacency<Out>(graph: &ListGraph, out: &mut Out) -> Result<()>
where
    Out: Write + ?Sized,
{
    writeln!(out, "\nGraph:")?;
    for node in 1..=graph.node_count() {
        match graph.label(node) {
            Some(label) => writeln!(out, "{:<15}{label}", format!("Node{node}"))?,
            None => writeln!(out, "Node{node}")?,
        }
        for target in graph.neighbors(node) {
            writeln!(out, "  edge  {node}  {target}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One-line depth-first ordering of every node id.
pub fn write_depth_first<G, Out>(graph: &G, out: &mut Out) -> Result<()>
where
    G: Graph + ?Sized,
    Out: Write + ?Sized,
{
    writeln!(
        out,
        "\nDepth-first ordering: {}\n",
        path_text(&depth_first_order(graph))
    )?;
    Ok(())
}

fn path_text(nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

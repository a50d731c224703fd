//! Unweighted adjacency-list graph.

use crate::graph::traits::Graph;
use crate::labels::{LabelProvider, NodeLabel};
use crate::{Error, Result, MAX_NODES};

/// A directed, unweighted graph over nodes `1..=size` with per-node edge
/// lists.
///
/// Edges are kept newest-first: the most recently inserted edge of a node
/// is the first one [`Graph::neighbors`] yields. That reverse-of-insertion
/// order is part of the contract - it is the tie-break that makes
/// depth-first traversal deterministic for a given insertion history.
#[derive(Debug, Clone)]
pub struct ListGraph {
    size: usize,
    labels: Vec<NodeLabel>,
    /// edges[i-1]: targets of node i in insertion order; iterated reversed
    edges: Vec<Vec<usize>>,
}

impl ListGraph {
    /// Creates an empty graph (no nodes, no labels, no edges).
    pub fn new() -> Self {
        ListGraph {
            size: 0,
            labels: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Resets the graph to `node_count` nodes and pulls one label per
    /// node from `labels`. Same contract as
    /// [`MatrixGraph::build`](crate::MatrixGraph::build): invalid counts
    /// and label failures leave the previous contents untouched.
    pub fn build<P>(&mut self, node_count: usize, labels: &mut P) -> Result<()>
    where
        P: LabelProvider + ?Sized,
    {
        if node_count == 0 || node_count > MAX_NODES {
            return Err(Error::InvalidNodeCount {
                requested: node_count,
                max: MAX_NODES,
            });
        }

        let mut collected = Vec::with_capacity(node_count);
        for _ in 0..node_count {
            collected.push(labels.next_label()?);
        }

        self.size = node_count;
        self.labels = collected;
        self.edges = vec![Vec::new(); node_count];
        Ok(())
    }

    /// Records the directed edge `from -> to` at the front of `from`'s
    /// traversal order.
    pub fn insert_edge(&mut self, from: usize, to: usize) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::InvalidNode(from));
        }
        if !self.has_node(to) {
            return Err(Error::InvalidNode(to));
        }
        if from == to {
            return Err(Error::SelfLoop(from));
        }

        self.edges[from - 1].push(to);
        Ok(())
    }

    /// Display label for a node, if the id is in range.
    pub fn label(&self, node: usize) -> Option<&NodeLabel> {
        if self.has_node(node) {
            self.labels.get(node - 1)
        } else {
            None
        }
    }
}

impl Graph for ListGraph {
    fn node_count(&self) -> usize {
        self.size
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if !self.has_node(node) {
            return Box::new(std::iter::empty());
        }
        Box::new(self.edges[node - 1].iter().rev().copied())
    }
}

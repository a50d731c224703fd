//! Weighted dense-matrix graph with a derived all-pairs table.

use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

use crate::algorithm::dijkstra::{all_pairs, ShortestPathTable};
use crate::graph::traits::{Graph, WeightedGraph};
use crate::labels::{LabelProvider, NodeLabel};
use crate::{Error, Result, MAX_NODES};

/// A directed, weighted graph over nodes `1..=size` backed by a dense
/// cost matrix.
///
/// The all-pairs shortest-path table is recomputed after every successful
/// edge mutation, so query results are never stale regardless of when the
/// caller asks. Labels are display-only.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W> {
    size: usize,
    labels: Vec<NodeLabel>,
    /// cost[i-1][j-1]: weight of the directed edge i -> j, `None` = no edge
    cost: Vec<Vec<Option<W>>>,
    table: ShortestPathTable<W>,
}

/// A resolved shortest path: total distance plus the full node sequence
/// from source to destination inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    pub distance: W,
    pub nodes: Vec<usize>,
}

impl<W> MatrixGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Creates an empty graph (no nodes, no labels, no edges).
    pub fn new() -> Self {
        MatrixGraph {
            size: 0,
            labels: Vec::new(),
            cost: Vec::new(),
            table: ShortestPathTable::empty(),
        }
    }

    /// Resets the graph to `node_count` nodes and pulls one label per
    /// node from `labels`.
    ///
    /// `node_count` must be in `1..=MAX_NODES`; otherwise the previous
    /// contents are left untouched and the error is returned for the
    /// caller to log or ignore. Label acquisition failures are likewise
    /// non-destructive: state changes only once every label is in hand.
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
        self.cost = vec![vec![None; node_count]; node_count];
        self.recompute();
        Ok(())
    }

    /// Records the directed edge `from -> to` with the given weight,
    /// overwriting any prior weight for the pair, then recomputes the
    /// shortest-path table.
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_endpoints(from, to)?;
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.cost[from - 1][to - 1] = Some(weight);
        self.recompute();
        Ok(())
    }

    /// Clears the directed edge `from -> to` (whether or not one was
    /// present) and recomputes the shortest-path table.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_endpoints(from, to)?;

        self.cost[from - 1][to - 1] = None;
        self.recompute();
        Ok(())
    }

    /// Shortest path from `from` to `to`.
    ///
    /// `Ok(None)` means the destination is unreachable; out-of-range
    /// endpoints are errors, not "no path".
    pub fn route(&self, from: usize, to: usize) -> Result<Option<Route<W>>> {
        self.check_node(from)?;
        self.check_node(to)?;

        let distance = match self.table.distance(from, to) {
            Some(distance) => distance,
            None => return Ok(None),
        };
        Ok(self
            .table
            .path(from, to)
            .map(|nodes| Route { distance, nodes }))
    }

    /// The current all-pairs table.
    pub fn table(&self) -> &ShortestPathTable<W> {
        &self.table
    }

    /// Display label for a node, if the id is in range.
    pub fn label(&self, node: usize) -> Option<&NodeLabel> {
        if self.has_node(node) {
            self.labels.get(node - 1)
        } else {
            None
        }
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNode(node))
        }
    }

    fn check_endpoints(&self, from: usize, to: usize) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.table = all_pairs(&*self);
    }
}

impl<W> Graph for MatrixGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    fn node_count(&self) -> usize {
        self.size
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if !self.has_node(node) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.cost[node - 1]
                .iter()
                .enumerate()
                .filter_map(|(idx, cell)| cell.as_ref().map(|_| idx + 1)),
        )
    }
}

impl<W> WeightedGraph<W> for MatrixGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_node(from) || !self.has_node(to) {
            return None;
        }
        self.cost[from - 1][to - 1]
    }
}

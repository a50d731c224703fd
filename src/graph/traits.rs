use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

/// Trait representing a bounded graph with 1-based node ids.
///
/// Node ids run from 1 to `node_count()` inclusive; id 0 is never valid.
pub trait Graph {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns true if the node id is within the graph's domain
    fn has_node(&self, node: usize) -> bool {
        node >= 1 && node <= self.node_count()
    }

    /// Returns an iterator over the targets of a node's outgoing edges,
    /// in the representation's traversal order
    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// Trait for graphs whose edges carry a weight
pub trait WeightedGraph<W>: Graph
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

//! Depth-first traversal over any [`Graph`] representation.

use crate::graph::Graph;

/// Depth-first visitation order across the whole graph.
///
/// Roots are taken in ascending id order; from each unvisited root the
/// traversal descends recursively, visiting neighbors in the
/// representation's own iteration order and skipping anything already
/// visited. Every node appears exactly once, so the result is a
/// permutation of `1..=node_count` and fully deterministic for a fixed
/// edge-insertion history.
pub fn depth_first_order<G>(graph: &G) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    let n = graph.node_count();
    let mut visited = vec![false; n + 1];
    let mut order = Vec::with_capacity(n);

    for root in 1..=n {
        if !visited[root] {
            visit(graph, root, &mut visited, &mut order);
        }
    }

    order
}

// Recursion depth is bounded by the node capacity.
fn visit<G>(graph: &G, node: usize, visited: &mut [bool], order: &mut Vec<usize>)
where
    G: Graph + ?Sized,
{
    visited[node] = true;
    order.push(node);

    for target in graph.neighbors(node) {
        if !visited[target] {
            visit(graph, target, visited, order);
        }
    }
}

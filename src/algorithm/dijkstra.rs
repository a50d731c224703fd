//! All-pairs shortest paths by repeated single-source relaxation.
//!
//! One relaxation pass is run per source node. Each pass performs exactly
//! `n` selection rounds: the unvisited node with the smallest finite
//! distance is picked (lowest id wins ties), marked visited, and its
//! outgoing edges relaxed. When no unvisited node has a finite distance
//! the first unvisited id is selected instead; its distance is `None`, so
//! the round relaxes nothing and only burns the selection. Predecessor
//! links record the node immediately before each destination on its
//! shortest path, so full paths fall out of a backward walk.

use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

use crate::graph::WeightedGraph;

/// One cell of the shortest-path table: best known distance from the
/// row's source, and the previous node on that path.
///
/// `distance: None` means unreachable; `predecessor: None` means the
/// node is the source itself (or unreachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry<W> {
    pub distance: Option<W>,
    pub predecessor: Option<usize>,
}

impl<W> PathEntry<W> {
    fn unreached() -> Self {
        PathEntry {
            distance: None,
            predecessor: None,
        }
    }
}

/// Derived all-pairs shortest-path state: one row of [`PathEntry`] values
/// per source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTable<W> {
    rows: Vec<Vec<PathEntry<W>>>,
}

impl<W> ShortestPathTable<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Table for a graph with no nodes.
    pub fn empty() -> Self {
        ShortestPathTable { rows: Vec::new() }
    }

    /// Number of source rows (equals the graph's node count).
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable
    /// or either id is out of range.
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.entry(from, to).and_then(|entry| entry.distance)
    }

    /// Predecessor of `to` on the shortest path from `from`.
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        self.entry(from, to).and_then(|entry| entry.predecessor)
    }

    /// Full node sequence from `from` to `to` inclusive, or `None` if no
    /// path exists. The path for `from == to` is the single node itself.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;

        // Walk predecessor links backward; only the source row entry has
        // a finite distance with no predecessor, so the walk ends there.
        let mut nodes = vec![to];
        let mut current = to;
        while let Some(prev) = self.predecessor(from, current) {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        Some(nodes)
    }

    fn entry(&self, from: usize, to: usize) -> Option<&PathEntry<W>> {
        if from < 1 || to < 1 {
            return None;
        }
        self.rows.get(from - 1).and_then(|row| row.get(to - 1))
    }
}

/// Computes the all-pairs shortest-path table for the current contents of
/// `graph`. O(n^3); acceptable because the node domain is bounded.
pub fn all_pairs<W, G>(graph: &G) -> ShortestPathTable<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
    G: WeightedGraph<W> + ?Sized,
{
    let n = graph.node_count();
    let rows = (1..=n).map(|source| single_source(graph, source)).collect();
    ShortestPathTable { rows }
}

fn single_source<W, G>(graph: &G, source: usize) -> Vec<PathEntry<W>>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
    G: WeightedGraph<W> + ?Sized,
{
    let n = graph.node_count();
    let mut entries = vec![PathEntry::unreached(); n];
    let mut visited = vec![false; n];

    entries[source - 1].distance = Some(W::zero());

    for _ in 0..n {
        let next = match select_next(&entries, &visited) {
            Some(node) => node,
            None => break,
        };
        visited[next - 1] = true;

        let reached = match entries[next - 1].distance {
            Some(distance) => distance,
            None => continue,
        };

        for to in 1..=n {
            if visited[to - 1] {
                continue;
            }
            let weight = match graph.edge_weight(next, to) {
                Some(weight) => weight,
                None => continue,
            };
            let candidate = reached + weight;
            let improves = match entries[to - 1].distance {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                entries[to - 1] = PathEntry {
                    distance: Some(candidate),
                    predecessor: Some(next),
                };
            }
        }
    }

    entries
}

/// Selection rule: unvisited node with the smallest finite distance,
/// lowest id on ties; first unvisited id when nothing finite remains.
fn select_next<W>(entries: &[PathEntry<W>], visited: &[bool]) -> Option<usize>
where
    W: Copy + Ord,
{
    let mut best: Option<(usize, W)> = None;
    let mut fallback = None;

    for (idx, entry) in entries.iter().enumerate() {
        if visited[idx] {
            continue;
        }
        if fallback.is_none() {
            fallback = Some(idx + 1);
        }
        if let Some(distance) = entry.distance {
            let closer = match best {
                None => true,
                Some((_, best_distance)) => distance < best_distance,
            };
            if closer {
                best = Some((idx + 1, distance));
            }
        }
    }

    best.map(|(node, _)| node).or(fallback)
}

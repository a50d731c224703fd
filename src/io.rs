//! Line-oriented graph description reader.
//!
//! A description is: one integer node count, then one label line per
//! node, then edge records as whitespace-separated integers (free to span
//! lines) until a record whose source is `0` or the input ends. Weighted
//! records are `source destination weight`; unweighted records are
//! `source destination`. Several descriptions may be concatenated in one
//! input, and the historical data files end the stream with a lone `0`
//! where the next node count would be.
//!
//! A rejected edge record (bad endpoint, self-loop, bad weight) is logged
//! and skipped; it never aborts the rest of the description.

use std::collections::VecDeque;
use std::io::BufRead;

use log::warn;

use crate::graph::adjacency::ListGraph;
use crate::graph::matrix::MatrixGraph;
use crate::labels::{LabelProvider, NodeLabel};
use crate::{Error, Result};

/// Pulls integer tokens and raw label lines off a buffered reader,
/// tracking line numbers for error reporting.
///
/// Integer tokens flow across line boundaries; asking for a label first
/// discards whatever is left of the current line, then consumes the next
/// full line verbatim. This mirrors how the description format mixes
/// token records with line records.
pub struct RecordScanner<R> {
    reader: R,
    pending: VecDeque<String>,
    line_no: usize,
}

impl<R: BufRead> RecordScanner<R> {
    pub fn new(reader: R) -> Self {
        RecordScanner {
            reader,
            pending: VecDeque::new(),
            line_no: 0,
        }
    }

    /// Next integer token, or `None` at end of input.
    pub fn next_int(&mut self) -> Result<Option<i64>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return match token.parse::<i64>() {
                    Ok(value) => Ok(Some(value)),
                    Err(_) => Err(Error::Malformed {
                        line: self.line_no,
                        reason: format!("expected an integer, found {token:?}"),
                    }),
                };
            }
            match self.next_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                None => return Ok(None),
            }
        }
    }

    /// Next integer token, treating end of input as an error.
    pub fn require_int(&mut self) -> Result<i64> {
        self.next_int()?.ok_or(Error::UnexpectedEof)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(line))
    }
}

impl<R: BufRead> LabelProvider for RecordScanner<R> {
    fn next_label(&mut self) -> Result<NodeLabel> {
        self.pending.clear();
        match self.next_line()? {
            Some(line) => Ok(NodeLabel::new(line.trim_end())),
            None => Err(Error::UnexpectedEof),
        }
    }
}

/// Iterates over the graph descriptions concatenated in one input.
pub struct TextGraphs<R> {
    scanner: RecordScanner<R>,
}

impl<R: BufRead> TextGraphs<R> {
    pub fn new(input: R) -> Self {
        TextGraphs {
            scanner: RecordScanner::new(input),
        }
    }

    /// Reads the next description as a weighted matrix graph. `Ok(None)`
    /// once the input is exhausted or the `0` stream terminator is seen.
    pub fn next_matrix(&mut self) -> Result<Option<MatrixGraph<u32>>> {
        let count = match self.read_node_count()? {
            Some(count) => count,
            None => return Ok(None),
        };

        let mut graph = MatrixGraph::new();
        graph.build(count, &mut self.scanner)?;

        loop {
            let from = match self.scanner.next_int()? {
                Some(from) => from,
                None => break,
            };
            if from == 0 {
                // a terminator record still carries its other fields
                self.scanner.next_int()?;
                self.scanner.next_int()?;
                break;
            }
            let to = self.scanner.require_int()?;
            let weight = self.scanner.require_int()?;
            match (endpoint(from), endpoint(to), u32::try_from(weight)) {
                (Some(from), Some(to), Ok(weight)) => {
                    if let Err(err) = graph.insert_edge(from, to, weight) {
                        warn!("skipping edge record ({from}, {to}, {weight}): {err}");
                    }
                }
                _ => warn!("skipping edge record ({from}, {to}, {weight}): value out of range"),
            }
        }

        Ok(Some(graph))
    }

    /// Reads the next description as an unweighted list graph. `Ok(None)`
    /// once the input is exhausted or the `0` stream terminator is seen.
    pub fn next_list(&mut self) -> Result<Option<ListGraph>> {
        let count = match self.read_node_count()? {
            Some(count) => count,
            None => return Ok(None),
        };

        let mut graph = ListGraph::new();
        graph.build(count, &mut self.scanner)?;

        loop {
            let from = match self.scanner.next_int()? {
                Some(from) => from,
                None => break,
            };
            if from == 0 {
                // a terminator record still carries its other field
                self.scanner.next_int()?;
                break;
            }
            let to = self.scanner.require_int()?;
            match (endpoint(from), endpoint(to)) {
                (Some(from), Some(to)) => {
                    if let Err(err) = graph.insert_edge(from, to) {
                        warn!("skipping edge record ({from}, {to}): {err}");
                    }
                }
                _ => warn!("skipping edge record ({from}, {to}): value out of range"),
            }
        }

        Ok(Some(graph))
    }

    fn read_node_count(&mut self) -> Result<Option<usize>> {
        match self.scanner.next_int()? {
            None | Some(0) => Ok(None),
            Some(count) => match usize::try_from(count) {
                Ok(count) => Ok(Some(count)),
                Err(_) => Err(Error::Malformed {
                    line: self.scanner.line_no,
                    reason: format!("negative node count {count}"),
                }),
            },
        }
    }

}

fn endpoint(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Reads a single weighted description from `input`.
pub fn read_matrix_graph<R: BufRead>(input: R) -> Result<MatrixGraph<u32>> {
    TextGraphs::new(input)
        .next_matrix()?
        .ok_or(Error::UnexpectedEof)
}

/// Reads a single unweighted description from `input`.
pub fn read_list_graph<R: BufRead>(input: R) -> Result<ListGraph> {
    TextGraphs::new(input)
        .next_list()?
        .ok_or(Error::UnexpectedEof)
}

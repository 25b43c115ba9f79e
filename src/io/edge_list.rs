//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines `source target weight`, each representing a
//! directed edge from the vertex named `source` to the vertex named `target`. Tokens are separated
//! by whitespace; empty lines and lines starting with the comment identifier are skipped.
//!
//! ```text
//! # a small example
//! s a 1.5
//! a t 2
//! s t 4
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::*;
use crate::prelude::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Passed on to [`Graph::from_edge_list`]
    options: EdgeListOptions,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            options: EdgeListOptions::default(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Fixes the vertex order of the resulting graph
    pub fn names<I, S>(mut self, names: I) -> EdgeListReader
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.names(names);
        self
    }

    /// Tries to parse an edge from a non-comment-line
    fn parse_edge_line<W: FromStr>(line: &str, line_number: usize) -> Result<(String, String, W)> {
        let mut parts = line.split_whitespace();

        let from: String = parse_next_value!(parts, line_number, "source vertex");
        let to: String = parse_next_value!(parts, line_number, "target vertex");
        let weight: W = parse_next_value!(parts, line_number, "weight");

        if let Some(extra) = parts.next() {
            return Err(malformed!(line_number, "unexpected trailing token `{extra}`"));
        }

        Ok((from, to, weight))
    }
}

impl<W: Weight + FromStr> GraphReader<Graph<W>> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph<W>> {
        let mut edges = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(self.comment_identifier.as_str()) {
                continue;
            }

            edges.push(Self::parse_edge_line::<W>(trimmed, i + 1)?);
        }

        debug!(edges = edges.len(), "read edge list");
        Graph::from_edge_list(edges, self.options.clone())
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<W: Weight + FromStr> EdgeListRead for Graph<W> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/*!
# IO

Reading graphs from text input.

The only supported input format is the **EdgeList** format: one `source target weight` triple
per line, with vertices given by name. See [`EdgeListReader`] for the details.

Readers implement [`GraphReader`], which abstracts over the source (any [`BufRead`] or a file
path). Writing graphs back out is not supported.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Result;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a `MalformedEdge` error
macro_rules! malformed {
    ($line: expr, $($reason: tt)+) => {
        $crate::error::GraphError::MalformedEdge {
            line: $line,
            reason: format!($($reason)+),
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $line: expr, $name: expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(malformed!($line, "premature end of line when parsing {}", $name));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => return Err(malformed!($line, "cannot parse {} from `{}`", $name, token)),
        }
    }};
}

use malformed;
use parse_next_value;

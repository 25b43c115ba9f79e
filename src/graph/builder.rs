use super::*;

/// Options for [`Graph::from_matrix`].
///
/// - `names`: the vertex names in index order.
///   Default: the decimal indices `"0"`, `"1"`, ... (raises [`Advisory::UnnamedMatrix`]).
#[derive(Debug, Clone, Default)]
pub struct MatrixOptions {
    pub names: Option<Vec<String>>,
}

impl MatrixOptions {
    /// Creates options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex names in index order
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Options for [`Graph::from_edge_list`].
///
/// - `names`: the vertex names in index order; every endpoint of an edge must be among them.
///   Names without edges become isolated vertices.
///   Default: every endpoint in order of its first appearance in the edge list
///   (raises [`Advisory::UnnamedEdgeList`]).
#[derive(Debug, Clone, Default)]
pub struct EdgeListOptions {
    pub names: Option<Vec<String>>,
}

impl EdgeListOptions {
    /// Creates options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex names in index order
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Fails with `DuplicateName` on the first name that occurs twice
fn check_unique_names(names: &[String]) -> Result<()> {
    let mut seen = FxHashSet::default();
    match names.iter().find(|name| !seen.insert(name.as_str())) {
        Some(name) => Err(GraphError::DuplicateName(name.clone())),
        None => Ok(()),
    }
}

impl<W: Weight> Graph<W> {
    /// Creates a graph from a dense square weight matrix given as rows.
    /// An entry of zero encodes a missing edge.
    ///
    /// # Errors
    /// - [`GraphError::Shape`] if the matrix is not square
    /// - [`GraphError::Weight`] if an entry is negative (or not finite)
    /// - [`GraphError::SelfLoop`] if a diagonal entry is not zero
    /// - [`GraphError::NameCount`] if the number of names differs from the dimension
    /// - [`GraphError::DuplicateName`] if a name occurs twice
    ///
    /// # Example
    /// ```
    /// use lwgraphs::prelude::*;
    ///
    /// let graph = Graph::<f64>::from_matrix(vec![vec![0.0, 2.5], vec![0.5, 0.0]], MatrixOptions::new())
    ///     .unwrap();
    /// assert_eq!(graph.names(), &["0", "1"]);
    /// assert_eq!(graph.weight(0, 1), 2.5);
    ///
    /// assert!(Graph::<i32>::from_matrix([[1, 0], [0, 0]], MatrixOptions::new()).is_err());
    /// ```
    pub fn from_matrix<I, R>(rows: I, options: MatrixOptions) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[W]>,
    {
        let rows = rows.into_iter().collect_vec();
        let n = rows.len();

        let mut matrix = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::Shape {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }

            if let Some(j) = row.iter().position(|w| !w.is_valid()) {
                return Err(GraphError::Weight { row: i, col: j });
            }

            matrix.extend_from_slice(row);
        }

        // the diagonal is checked before the names, which may not even match the dimension
        if let Some(u) = (0..n).find(|&u| matrix[u * n + u].is_edge()) {
            let vertex = options
                .names
                .as_ref()
                .and_then(|names| names.get(u).cloned())
                .unwrap_or_else(|| u.to_string());
            return Err(GraphError::SelfLoop { vertex });
        }

        let mut advisories = Vec::new();
        let names = match options.names {
            Some(names) => {
                if names.len() != n {
                    return Err(GraphError::NameCount {
                        expected: n,
                        found: names.len(),
                    });
                }
                check_unique_names(&names)?;
                names
            }
            None => {
                advisories.push(Advisory::UnnamedMatrix.emit());
                (0..n).map(|i| i.to_string()).collect()
            }
        };

        tracing::trace!(vertices = n, "graph constructed from matrix");
        Ok(Self::from_parts(names, matrix, advisories))
    }

    /// Creates a graph from a list of `(source, target, weight)` triples over vertex names.
    ///
    /// # Errors
    /// - [`GraphError::NonPositiveWeight`] if a weight is not strictly positive (or not finite)
    /// - [`GraphError::SelfLoop`] if source and target coincide
    /// - [`GraphError::DuplicateName`] if a supplied name occurs twice
    /// - [`GraphError::NameMismatch`] if an endpoint is missing from the supplied names
    /// - [`GraphError::DuplicateEdge`] if the same ordered pair is given twice
    ///
    /// # Example
    /// ```
    /// use lwgraphs::prelude::*;
    ///
    /// let graph = Graph::<f64>::from_edge_list(
    ///     [("x", "y", 0.5), ("y", "z", 1.5)],
    ///     EdgeListOptions::new().names(["z", "y", "x"]),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.index_of("x").unwrap(), 2);
    /// assert_eq!(graph.weight(2, 1), 0.5);
    /// ```
    pub fn from_edge_list<I, S>(edges: I, options: EdgeListOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: AsRef<str>,
    {
        let mut triples = Vec::new();
        for (source, target, weight) in edges {
            let (source, target) = (source.as_ref(), target.as_ref());
            if !(weight.is_valid() && weight.is_edge()) {
                return Err(GraphError::NonPositiveWeight {
                    from: source.to_string(),
                    to: target.to_string(),
                });
            }
            if source == target {
                return Err(GraphError::SelfLoop {
                    vertex: source.to_string(),
                });
            }
            triples.push((source.to_string(), target.to_string(), weight));
        }

        let mut advisories = Vec::new();
        let names = match options.names {
            Some(names) => {
                check_unique_names(&names)?;
                names
            }
            None => {
                advisories.push(Advisory::UnnamedEdgeList.emit());
                triples
                    .iter()
                    .flat_map(|(s, t, _)| [s, t])
                    .unique()
                    .cloned()
                    .collect()
            }
        };

        let index: FxHashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::NameMismatch(name.to_string()))
        };

        let n = names.len();
        let mut matrix = vec![W::zero(); n * n];
        for (source, target, weight) in &triples {
            let entry = &mut matrix[lookup(source.as_str())? * n + lookup(target.as_str())?];
            if entry.is_edge() {
                return Err(GraphError::DuplicateEdge {
                    from: source.clone(),
                    to: target.clone(),
                });
            }
            *entry = *weight;
        }

        tracing::trace!(
            vertices = n,
            edges = triples.len(),
            "graph constructed from edge list"
        );
        Ok(Self::from_parts(names, matrix, advisories))
    }
}

//! Shared fixtures and assertions for unit tests
#![cfg(test)]

use crate::prelude::*;

/// Routes `tracing` output of the library to the test writer
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Seven vertices `a..g` with unit weights and the single cycle `b -> d -> g -> b`
pub(crate) fn graph_a() -> Graph<i32> {
    Graph::from_matrix(
        [
            [0, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 1, 1],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 0, 0],
        ],
        MatrixOptions::new().names(["a", "b", "c", "d", "e", "f", "g"]),
    )
    .unwrap()
}

/// Complete directed graph on the four vertices `"0".."3"` with real weights
pub(crate) fn graph_b() -> Graph<f64> {
    Graph::from_edge_list(
        [
            ("0", "1", 0.5),
            ("0", "2", 0.5),
            ("0", "3", 0.5),
            ("1", "0", 2.0),
            ("1", "2", 2.5),
            ("1", "3", 1.5),
            ("2", "0", 1.0),
            ("2", "1", 3.5),
            ("2", "3", 2.25),
            ("3", "0", 1.5),
            ("3", "1", 2.75),
            ("3", "2", 4.0),
        ],
        EdgeListOptions::new().names(["0", "1", "2", "3"]),
    )
    .unwrap()
}

/// Acyclic graph on `A..G` with an isolated vertex `E` and several components
pub(crate) fn graph_c() -> Graph<i64> {
    Graph::from_matrix(
        [
            [0, 0, 3, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 10, 0, 2, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 5],
            [0, 0, 0, 0, 0, 0, 0],
        ],
        MatrixOptions::new().names(["A", "B", "C", "D", "E", "F", "G"]),
    )
    .unwrap()
}

/// Asserts that `graph` is a single simple directed cycle through all of its vertices
pub(crate) fn assert_is_cycle<W: Weight>(graph: &Graph<W>) {
    let n = graph.number_of_nodes();
    assert!(n >= 2, "a cycle needs at least two vertices");
    assert_eq!(graph.number_of_edges(), n);

    for u in graph.vertices() {
        assert_eq!(graph.out_degree_of(u), 1, "out-degree of {}", graph.name_of(u));
        assert_eq!(graph.in_degree_of(u), 1, "in-degree of {}", graph.name_of(u));
    }

    let mut steps = 0;
    let mut u = 0;
    loop {
        u = graph.out_edges_of(u)[0].0;
        steps += 1;
        if u == 0 {
            break;
        }
        assert!(steps < n, "walk does not return to its start");
    }
    assert_eq!(steps, n);
}

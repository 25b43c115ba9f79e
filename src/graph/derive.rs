use super::*;

impl<W: Weight> Graph<W> {
    /// Returns the graph formed by the given edges of `self`.
    ///
    /// Only endpoints of these edges become vertices of the new graph. They keep their relative
    /// order from `self` and carry over their names; weights are taken from `self`.
    /// Returns the empty graph if there are no edges.
    pub(crate) fn edge_induced<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges = edges.into_iter().collect_vec();

        let mut mapping = vec![INVALID_NODE; self.len()];
        for &Edge(u, v) in &edges {
            mapping[u as usize] = 0;
            mapping[v as usize] = 0;
        }

        let mut names = Vec::new();
        for u in self.vertices() {
            if mapping[u as usize] != INVALID_NODE {
                mapping[u as usize] = names.len() as Node;
                names.push(self.names[u as usize].clone());
            }
        }

        let k = names.len();
        let mut matrix = vec![W::zero(); k * k];
        for Edge(u, v) in edges {
            debug_assert!(self.has_edge(u, v));
            matrix[mapping[u as usize] as usize * k + mapping[v as usize] as usize] =
                self.weight(u, v);
        }

        Self::from_parts(names, matrix, Vec::new())
    }

    /// Returns the spanning tree formed by the given edges.
    /// If there are none, the tree is the single vertex `root` without edges.
    pub(crate) fn spanning_tree<I>(&self, root: Node, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut edges = edges.into_iter().peekable();
        if edges.peek().is_none() {
            return Self::from_parts(
                vec![self.name_of(root).to_string()],
                vec![W::zero()],
                Vec::new(),
            );
        }
        self.edge_induced(edges)
    }

    /// Returns a copy of `self` with the additional edge `(u, v)` of weight `weight`
    pub(crate) fn with_edge(&self, u: Node, v: Node, weight: W) -> Self {
        assert!(u != v && weight.is_edge());

        let n = self.len();
        let mut matrix = self.matrix.to_vec();
        matrix[u as usize * n + v as usize] = weight;

        Self::from_parts(self.names.to_vec(), matrix, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn edge_induced_keeps_name_order() {
        let graph = graph_c();
        let sub = graph.edge_induced([Edge(5, 6), Edge(2, 1)]);

        assert_eq!(sub.names(), &["B", "C", "F", "G"]);
        assert_eq!(
            sub.matrix(),
            vec![
                vec![0, 0, 0, 0],
                vec![10, 0, 0, 0],
                vec![0, 0, 0, 5],
                vec![0, 0, 0, 0],
            ]
        );
        assert!(sub.is_subgraph_of(&graph));
    }

    #[test]
    fn no_edges() {
        let graph = graph_a();
        assert!(graph.edge_induced([]).is_empty());

        let tree = graph.spanning_tree(4, []);
        assert_eq!(tree.names(), &["e"]);
        assert_eq!(tree.matrix(), vec![vec![0]]);
    }

    #[test]
    fn add_edge() {
        let graph = graph_a();
        let closed = graph.with_edge(2, 0, 9);

        assert_eq!(closed.number_of_edges(), graph.number_of_edges() + 1);
        assert_eq!(closed.weight(2, 0), 9);
        assert!(graph.is_subgraph_of(&closed));
        assert!(!closed.is_subgraph_of(&graph));
    }
}

use ahash::AHashSet;

use crate::error::Error;

/// A weighted, undirected graph in compressed sparse row format.
///
/// Each node carries one non-negative, finite weight. The graph is immutable
/// after construction, which is when all structural invariants are checked.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    offsets: Vec<u32>,
    edges: Vec<u32>,
    weights: Vec<f64>,
}

impl Graph {
    /// Construct a graph from per-node weights and an undirected edge list.
    ///
    /// Duplicate edges are deduplicated and self-loops dropped, since neither
    /// can change a district's contiguity or weight. Fails with
    /// [`Error::MalformedGraph`] if an edge endpoint is out of range or a
    /// weight is negative or non-finite.
    pub fn new(weights: Vec<f64>, edges: &[(usize, usize)]) -> Result<Self, Error> {
        let num_nodes = weights.len();

        for (node, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::MalformedGraph {
                    detail: format!("node {node} has invalid weight {weight}"),
                });
            }
        }

        let mut seen = AHashSet::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); num_nodes];
        for &(u, v) in edges {
            if u >= num_nodes || v >= num_nodes {
                return Err(Error::MalformedGraph {
                    detail: format!("edge ({u}, {v}) references a node outside 0..{num_nodes}"),
                });
            }
            if u == v { continue }
            if !seen.insert(if u < v { (u, v) } else { (v, u) }) { continue }
            adjacency[u].push(v as u32);
            adjacency[v].push(u as u32);
        }
        adjacency.iter_mut().for_each(|nbrs| nbrs.sort_unstable());

        Ok(Self {
            offsets: std::iter::once(0u32).chain(
                adjacency.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: adjacency.iter().flatten().copied().collect(),
            weights,
        })
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.weights.len() }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() / 2 }

    /// Get the weight of a given node.
    #[inline] pub fn weight(&self, node: usize) -> f64 { self.weights[node] }

    /// Get the weights of all nodes.
    #[inline] pub fn weights(&self) -> &[f64] { &self.weights }

    /// Get the total weight of all nodes.
    #[inline] pub fn total_weight(&self) -> f64 { self.weights.iter().sum() }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }
}

use serde::Serialize;

/// A partition of a graph into contiguous, weight-balanced parts (districts).
///
/// The representation is canonical: each group lists its nodes in ascending
/// order, and groups are ordered by their smallest member (the order in which
/// the search opened them). Two equal partitions therefore compare equal and
/// serialize identically, regardless of how they were produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Partition {
    groups: Vec<Vec<usize>>,
    weights: Vec<f64>,
}

impl Partition {
    /// Assemble a partition from canonical groups and their total weights.
    pub(crate) fn from_parts(groups: Vec<Vec<usize>>, weights: Vec<f64>) -> Self {
        debug_assert!(groups.len() == weights.len(), "one weight per group");
        debug_assert!(groups.iter().all(|group| !group.is_empty()), "groups must be nonempty");
        debug_assert!(
            groups.iter().all(|group| group.windows(2).all(|w| w[0] < w[1])),
            "group members must be sorted ascending",
        );

        Self { groups, weights }
    }

    /// Get the number of districts.
    #[inline] pub fn num_groups(&self) -> usize { self.groups.len() }

    /// Get the number of nodes covered by the partition.
    #[inline] pub fn num_nodes(&self) -> usize { self.groups.iter().map(|group| group.len()).sum() }

    /// Get all districts, each a sorted list of node indices.
    #[inline] pub fn groups(&self) -> &[Vec<usize>] { &self.groups }

    /// Get the nodes of a single district.
    #[inline] pub fn group(&self, index: usize) -> &[usize] { &self.groups[index] }

    /// Get the total node weight of a single district.
    #[inline] pub fn group_weight(&self, index: usize) -> f64 { self.weights[index] }

    /// Get the total node weight of each district.
    #[inline] pub fn group_weights(&self) -> &[f64] { &self.weights }

    /// Get a complete vector of district assignments, one per node.
    pub fn assignments(&self) -> Vec<usize> {
        let mut assignments = vec![0; self.num_nodes()];
        for (part, group) in self.groups.iter().enumerate() {
            for &node in group { assignments[node] = part }
        }
        assignments
    }
}

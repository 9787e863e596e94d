use smallvec::SmallVec;

use crate::{
    error::Error,
    graph::Graph,
    partition::{Limits, Partition, contiguity},
};

/// Enumerate every partition of `graph` into exactly `num_parts` districts
/// such that each district induces a connected subgraph and its total weight
/// differs from the ideal (average) weight by no more than a factor of
/// `max_ratio`.
///
/// Returns a lazy iterator over the valid partitions. Enumeration is
/// deterministic: nodes are considered in index order and groups are
/// canonicalized by order of first appearance, so each unordered partition
/// appears exactly once and repeated calls produce the same sequence.
pub fn partitions(graph: &Graph, num_parts: usize, max_ratio: f64) -> Result<Partitions<'_>, Error> {
    Partitions::new(graph, num_parts, max_ratio)
}

/// Collect every valid partition into a vector.
///
/// Convenience for the intended regime (graphs of a few tens of nodes) where
/// the full result set comfortably fits in memory.
pub fn enumerate_partitions(graph: &Graph, num_parts: usize, max_ratio: f64) -> Result<Vec<Partition>, Error> {
    Ok(partitions(graph, num_parts, max_ratio)?.collect())
}

impl Graph {
    /// Enumerate valid districtings of this graph. See [`partitions`].
    pub fn partitions(&self, num_parts: usize, max_ratio: f64) -> Result<Partitions<'_>, Error> {
        partitions(self, num_parts, max_ratio)
    }
}

/// One level of the search: the node being placed and the next group to try.
#[derive(Debug)]
struct Frame {
    node: usize,
    next_group: usize,
}

/// Lazy enumerator of all balanced, contiguous partitions of a graph.
///
/// A backtracking depth-first search over node placements, driven by an
/// explicit frame stack (depth = node count) rather than native recursion.
/// Node `i` may join any already-open group, or open group `k` when exactly
/// `k` groups are open and slots remain (the restricted-growth-string
/// scheme), which produces each unordered partition exactly once. Every
/// tentative placement is vetted immediately so invalid branches are
/// abandoned near the root of the search tree.
#[derive(Debug)]
pub struct Partitions<'a> {
    graph: &'a Graph,
    num_parts: usize,
    limits: Limits,
    assignment: Vec<Option<usize>>,       // assignment[v] = group holding v, if placed
    groups: Vec<SmallVec<[usize; 8]>>,    // members of each group, in placement order
    weights: Vec<f64>,                    // running total weight of each group
    open: usize,                          // groups opened so far (a prefix of `groups`)
    remaining: f64,                       // total weight of unassigned nodes
    stack: Vec<Frame>,
}

impl<'a> Partitions<'a> {
    pub(crate) fn new(graph: &'a Graph, num_parts: usize, max_ratio: f64) -> Result<Self, Error> {
        let nodes = graph.node_count();
        if num_parts == 0 || num_parts > nodes {
            return Err(Error::InvalidParameter {
                detail: format!("num_parts must be in 1..={nodes}, got {num_parts}"),
            });
        }
        if !max_ratio.is_finite() || max_ratio < 1.0 {
            return Err(Error::InvalidParameter {
                detail: format!("max_ratio must be a finite number >= 1.0, got {max_ratio}"),
            });
        }

        Ok(Self {
            limits: Limits::new(graph.total_weight(), num_parts, max_ratio),
            assignment: vec![None; nodes],
            groups: vec![SmallVec::new(); num_parts],
            weights: vec![0.0; num_parts],
            open: 0,
            remaining: graph.total_weight(),
            stack: vec![Frame { node: 0, next_group: 0 }],
            graph,
            num_parts,
        })
    }

    /// Tentatively place `node` into `group`, opening the group if needed.
    fn place(&mut self, node: usize, group: usize) {
        debug_assert!(self.assignment[node].is_none(), "node already placed");
        debug_assert!(group <= self.open && group < self.num_parts, "group out of order");

        if group == self.open { self.open += 1 }
        self.assignment[node] = Some(group);
        self.groups[group].push(node);
        self.weights[group] += self.graph.weight(node);
        self.remaining -= self.graph.weight(node);
    }

    /// Undo the most recent placement of `node`.
    fn unplace(&mut self, node: usize) {
        let group = self.assignment[node].take().unwrap();
        let last = self.groups[group].pop().unwrap();
        debug_assert!(last == node, "placements must unwind in reverse order");

        self.weights[group] -= self.graph.weight(node);
        self.remaining += self.graph.weight(node);
        if self.groups[group].is_empty() {
            debug_assert!(group + 1 == self.open, "only the newest group can close");
            self.open -= 1;
        }
    }

    /// Check whether the partial assignment, after placing `node`, can still
    /// extend to a valid complete partition. On the final node (nothing left
    /// unassigned) these checks are exact, so a surviving leaf is a valid
    /// partition outright.
    fn viable(&self, node: usize) -> bool {
        // Enough unassigned nodes left to open the remaining groups.
        let left = self.graph.node_count() - node - 1;
        if self.num_parts - self.open > left { return false }

        // The receiving group must not overshoot the weight window.
        let group = self.assignment[node].unwrap();
        if self.limits.exceeds_max(self.weights[group]) { return false }

        // Underweight open groups and still-unopened groups must be able to
        // reach the window minimum from the weight that remains.
        let deficit = self.weights[..self.open].iter()
            .map(|&weight| (self.limits.min() - weight).max(0.0))
            .sum::<f64>()
            + (self.num_parts - self.open) as f64 * self.limits.min();
        if deficit > self.remaining { return false }

        // Every open group must still be able to span a connected district.
        (0..self.open).all(|g| contiguity::can_span(self.graph, &self.groups[g], &self.assignment, g))
    }

    /// Clone the current complete assignment into a canonical partition.
    fn snapshot(&self) -> Partition {
        debug_assert!(
            self.groups.iter().all(|group| contiguity::is_connected(self.graph, group)),
            "every emitted district must be connected",
        );

        Partition::from_parts(
            self.groups.iter().map(|group| group.to_vec()).collect(),
            self.weights.clone(),
        )
    }
}

impl<'a> Iterator for Partitions<'a> {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        loop {
            let Some(top) = self.stack.last() else { return None };
            let (node, mut group) = (top.node, top.next_group);

            // Re-entering a frame (after a child was exhausted, or after this
            // frame emitted a result) unwinds its placement before moving on.
            if self.assignment[node].is_some() { self.unplace(node) }

            // Candidate groups: every open group, plus one fresh slot if any remain.
            let last_group = (self.open + 1).min(self.num_parts);
            let mut advanced = false;
            while group < last_group {
                self.place(node, group);
                group += 1;
                if self.viable(node) { advanced = true; break }
                self.unplace(node);
            }

            let top = self.stack.last_mut().unwrap();
            top.next_group = group;

            if !advanced {
                self.stack.pop();
                continue;
            }

            if node + 1 == self.graph.node_count() {
                debug_assert!(self.open == self.num_parts, "leaf must use all groups");
                return Some(self.snapshot());
            }
            self.stack.push(Frame { node: node + 1, next_group: 0 });
        }
    }
}

use std::collections::VecDeque;

use crate::graph::Graph;

/// Check if `members` induces a connected subgraph.
/// Empty and singleton sets are trivially connected.
pub(crate) fn is_connected(graph: &Graph, members: &[usize]) -> bool {
    if members.len() <= 1 { return true }

    let mut passable = vec![false; graph.node_count()];
    for &u in members { passable[u] = true }

    reaches_all(graph, members, &passable)
}

/// Check if a district under construction can still end up connected.
///
/// Every member must be reachable from the first through nodes that belong to
/// `group` or are still unassigned; nodes held by other districts cannot act
/// as bridges. If the members are split even with every unassigned node
/// available, no completion of the search can reconnect them. With nothing
/// left unassigned this is exactly the strict connectivity check.
pub(crate) fn can_span(
    graph: &Graph,
    members: &[usize],
    assignment: &[Option<usize>],
    group: usize,
) -> bool {
    if members.len() <= 1 { return true }

    let passable = assignment.iter()
        .map(|&a| a.map_or(true, |g| g == group))
        .collect::<Vec<_>>();

    reaches_all(graph, members, &passable)
}

/// BFS from `members[0]` over passable nodes, confirming every member is reached.
fn reaches_all(graph: &Graph, members: &[usize], passable: &[bool]) -> bool {
    // Track which members have been reached, for early exit.
    let mut targets = vec![false; graph.node_count()];
    for &u in members {
        debug_assert!(passable[u], "members must be passable");
        targets[u] = true;
    }

    let mut visited = vec![false; graph.node_count()];
    visited[members[0]] = true;

    let mut remaining = members.len() - 1;
    let mut queue = VecDeque::from([members[0]]);
    while let Some(u) = queue.pop_front() {
        for v in graph.edges(u) {
            if passable[v] && !visited[v] {
                visited[v] = true;
                queue.push_back(v);

                if targets[v] { remaining -= 1; if remaining == 0 { return true } }
            }
        }
    }

    false
}

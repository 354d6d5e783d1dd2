//! Topology classification: which reduction rule applies next.

use std::collections::HashMap;

use ohm_core::{EdgeId, NodeId};
use ohm_graph::Network;

/// The classifier's decision: one applicable local reduction, or none.
///
/// Parallel merges are always found before series eliminations. A series sum
/// taken at a junction whose incident pair is still a parallel bundle would
/// read a resistance that is about to change; exhausting parallel merges
/// first removes that ordering hazard. Within a rule the lowest-ID candidate
/// wins, so a given network always reduces the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// All live edges between `a` and `b` (at least 2).
    Parallel {
        a: NodeId,
        b: NodeId,
        edges: Vec<EdgeId>,
    },
    /// A non-terminal junction of degree exactly 2 and its incident edges.
    Series {
        node: NodeId,
        left: EdgeId,
        right: EdgeId,
    },
    /// No local rule applies; the network needs the global fallback.
    Irreducible,
}

/// Inspect the network and pick the next reduction.
pub fn classify(network: &Network) -> Reduction {
    // Parallel rule: the first pair to show a second live edge, scanning in
    // edge ID order.
    let mut seen: HashMap<(NodeId, NodeId), EdgeId> = HashMap::new();
    for edge in network.live_edges() {
        let key = if edge.a <= edge.b {
            (edge.a, edge.b)
        } else {
            (edge.b, edge.a)
        };
        if seen.contains_key(&key) {
            let (a, b) = key;
            return Reduction::Parallel {
                a,
                b,
                edges: network.edges_between(a, b),
            };
        }
        seen.insert(key, edge.id);
    }

    // Series rule: the lowest-ID non-terminal junction of degree 2.
    for node in network.live_nodes() {
        if network.is_terminal(node.id) {
            continue;
        }
        let incident = network.incident_edges(node.id);
        if incident.len() == 2 {
            return Reduction::Series {
                node: node.id,
                left: incident[0],
                right: incident[1],
            };
        }
    }

    Reduction::Irreducible
}

//! Network validation logic.

use ohm_core::{NodeId, Resistance};

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Edge, Node};

/// A resistance is acceptable if it is positive and finite, or `+inf`
/// (an explicit open circuit). Zero, negatives and NaN are rejected.
fn resistance_ok(r: Resistance) -> bool {
    let v = r.value;
    (v.is_finite() && v > 0.0) || v == f64::INFINITY
}

/// Validate a single resistor at insertion time.
pub(crate) fn validate_resistor(
    name: &str,
    a: NodeId,
    b: NodeId,
    r: Resistance,
) -> NetworkResult<()> {
    if a == b {
        return Err(NetworkError::InvalidEdge {
            edge: name.to_string(),
            what: "connects a junction to itself",
        });
    }
    if !resistance_ok(r) {
        return Err(NetworkError::InvalidEdge {
            edge: name.to_string(),
            what: "resistance must be positive (or +inf for an open circuit)",
        });
    }
    Ok(())
}

/// Validate the arena as a whole: IDs contiguous, endpoints in range, weights
/// acceptable. `add_resistor` already enforces all of this edge by edge; the
/// whole-arena pass guards against a hand-assembled or corrupted builder.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[Edge]) -> NetworkResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id.index() as usize != i {
            return Err(NetworkError::UnknownNode { node: node.id });
        }
    }

    for (i, edge) in edges.iter().enumerate() {
        if edge.id.index() as usize != i {
            return Err(NetworkError::InvalidEdgeRef { edge: edge.id });
        }
        for node in [edge.a, edge.b] {
            if node.index() as usize >= nodes.len() {
                return Err(NetworkError::InvalidEdgeRef { edge: edge.id });
            }
        }
        validate_resistor(&edge.name, edge.a, edge.b, edge.resistance)?;
    }

    Ok(())
}

/// Terminals must be distinct junctions that exist in the arena.
pub(crate) fn validate_terminals(
    nodes: &[Node],
    start: NodeId,
    end: NodeId,
) -> NetworkResult<()> {
    for node in [start, end] {
        if node.index() as usize >= nodes.len() {
            return Err(NetworkError::UnknownNode { node });
        }
    }
    if start == end {
        return Err(NetworkError::IdenticalTerminals { node: start });
    }
    Ok(())
}

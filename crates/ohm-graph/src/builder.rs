//! Incremental network builder.

use ohm_core::{EdgeId, NodeId, Resistance};

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Edge, Network, Node};
use crate::validate;

/// Builder for constructing a resistor network incrementally.
///
/// Use `add_node` and `add_resistor` to lay out the multigraph, then call
/// `build(start, end)` to validate it and freeze the terminal pair. Invalid
/// resistors (self-loops, non-positive finite resistance) are rejected at
/// insertion so no partially-broken network is ever handed to a solver.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u32,
    next_edge_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a junction to the network and return its ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            name: name.into(),
        });
        id
    }

    /// Add one resistor instance between junctions `a` and `b`.
    ///
    /// Parallel resistors are added by calling this repeatedly with the same
    /// pair. Fails with `InvalidEdge` for a self-loop or a resistance that is
    /// neither positive-finite nor `+inf`, and with `UnknownNode` for an
    /// endpoint that was never added.
    pub fn add_resistor(
        &mut self,
        name: impl Into<String>,
        a: NodeId,
        b: NodeId,
        r: Resistance,
    ) -> NetworkResult<EdgeId> {
        let name = name.into();
        for node in [a, b] {
            if node.index() as usize >= self.nodes.len() {
                return Err(NetworkError::UnknownNode { node });
            }
        }
        validate::validate_resistor(&name, a, b, r)?;

        let id = EdgeId::from_index(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            name,
            a,
            b,
            resistance: r,
        });
        Ok(id)
    }

    /// Rename a junction (useful for post-construction adjustments).
    pub fn rename_node(&mut self, node_id: NodeId, new_name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(node_id.index() as usize) {
            node.name = new_name.into();
        }
    }

    /// Validate and freeze the network with the given terminal pair.
    ///
    /// The returned `Network` is mutable: the reduction engine consumes it
    /// destructively. Terminals must be distinct existing junctions.
    pub fn build(self, start: NodeId, end: NodeId) -> NetworkResult<Network> {
        validate::validate_structure(&self.nodes, &self.edges)?;
        validate::validate_terminals(&self.nodes, start, end)?;

        let node_alive = vec![true; self.nodes.len()];
        let edge_alive = vec![true; self.edges.len()];
        Ok(Network {
            nodes: self.nodes,
            edges: self.edges,
            node_alive,
            edge_alive,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohm_core::units::{ohm, open_circuit};

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        let r1 = builder.add_resistor("R1", a, b, ohm(4.7)).unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(r1.index(), 0);

        let network = builder.build(a, b).unwrap();
        assert_eq!(network.live_node_count(), 2);
        assert_eq!(network.live_edge_count(), 1);
        assert_eq!(network.terminals(), (a, b));
    }

    #[test]
    fn self_loop_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let err = builder.add_resistor("Rloop", a, a, ohm(5.0)).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidEdge { .. }));
        // The failed insertion left nothing behind.
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, b, ohm(1.0)).unwrap();
        let network = builder.build(a, b).unwrap();
        assert_eq!(network.live_edge_count(), 1);
    }

    #[test]
    fn non_positive_resistance_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        for bad in [0.0, -3.0, f64::NAN, f64::NEG_INFINITY] {
            let err = builder.add_resistor("Rbad", a, b, ohm(bad)).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidEdge { .. }), "{bad}");
        }
    }

    #[test]
    fn open_circuit_accepted() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        builder.add_resistor("Ropen", a, b, open_circuit()).unwrap();
        assert!(builder.build(a, b).is_ok());
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let ghost = NodeId::from_index(99);
        let err = builder.add_resistor("R1", a, ghost, ohm(1.0)).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode { .. }));
    }

    #[test]
    fn identical_terminals_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, b, ohm(1.0)).unwrap();
        let err = builder.build(a, a).unwrap_err();
        assert!(matches!(err, NetworkError::IdenticalTerminals { .. }));
    }

    #[test]
    fn missing_terminal_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, b, ohm(1.0)).unwrap();
        let ghost = NodeId::from_index(99);
        let err = builder.build(a, ghost).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode { .. }));
    }

    #[test]
    fn builder_rename() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("old");
        builder.rename_node(a, "new");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, b, ohm(1.0)).unwrap();
        let network = builder.build(a, b).unwrap();
        assert_eq!(network.node(a).unwrap().name, "new");
    }
}

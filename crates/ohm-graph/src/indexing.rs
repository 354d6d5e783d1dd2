//! Stable indexing for solver integration.
//!
//! Maps a chosen set of live node IDs to contiguous indices `0..N`, so a
//! solver can address matrix rows/columns by node. Arena IDs stay sparse
//! after reductions tombstone slots; the map bridges the two worlds.

use ohm_core::NodeId;

use crate::network::Network;

/// Bidirectional map between node IDs and contiguous solver indices.
#[derive(Debug, Clone)]
pub struct IndexMap {
    /// Contiguous list of node IDs (index -> NodeId).
    node_ids: Vec<NodeId>,

    /// Reverse lookup: NodeId -> index.
    /// Sized to max(NodeId.index) + 1; None if that ID isn't in the map.
    node_to_idx: Vec<Option<usize>>,
}

impl IndexMap {
    /// Build an index map over an explicit node set (e.g. one connected
    /// component), in the iteration order given.
    pub fn from_nodes(ids: impl IntoIterator<Item = NodeId>) -> Self {
        let node_ids: Vec<NodeId> = ids.into_iter().collect();
        let max_idx = node_ids
            .iter()
            .map(|id| id.index() as usize)
            .max()
            .unwrap_or(0);

        let mut node_to_idx = vec![None; max_idx + 1];
        for (i, &id) in node_ids.iter().enumerate() {
            node_to_idx[id.index() as usize] = Some(i);
        }

        Self {
            node_ids,
            node_to_idx,
        }
    }

    /// Build an index map over all live nodes of a network.
    pub fn from_network(network: &Network) -> Self {
        Self::from_nodes(network.live_nodes().map(|n| n.id))
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Get the contiguous index for a node ID, if the node is in the map.
    pub fn node_idx(&self, id: NodeId) -> Option<usize> {
        self.node_to_idx.get(id.index() as usize).copied().flatten()
    }

    /// Get the node ID for a contiguous index (panics if out of bounds).
    pub fn node_id(&self, i: usize) -> NodeId {
        self.node_ids[i]
    }

    /// All node IDs in index order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;
    use ohm_core::units::ohm;

    #[test]
    fn index_map_round_trip() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let m = builder.add_node("M");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, m, ohm(1.0)).unwrap();
        builder.add_resistor("R2", m, b, ohm(2.0)).unwrap();
        let network = builder.build(a, b).unwrap();

        let map = IndexMap::from_network(&network);
        assert_eq!(map.node_count(), 3);
        for node in network.live_nodes() {
            let i = map.node_idx(node.id).unwrap();
            assert_eq!(map.node_id(i), node.id);
        }
    }

    #[test]
    fn index_map_skips_dead_nodes() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let m = builder.add_node("M");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, m, ohm(1.0)).unwrap();
        builder.add_resistor("R2", m, b, ohm(2.0)).unwrap();
        let mut network = builder.build(a, b).unwrap();
        network.eliminate_series_node(m);

        let map = IndexMap::from_network(&network);
        assert_eq!(map.node_count(), 2);
        assert!(map.node_idx(m).is_none());
        // Remaining indices are contiguous despite the hole in the arena.
        assert_eq!(map.node_idx(a), Some(0));
        assert_eq!(map.node_idx(b), Some(1));
    }

    #[test]
    fn index_map_unknown_id() {
        let map = IndexMap::from_nodes([NodeId::from_index(0)]);
        assert!(map.node_idx(NodeId::from_index(42)).is_none());
    }

    #[test]
    fn index_map_subset() {
        // A map over an explicit subset, as the fallback solver builds for
        // the terminal component.
        let ids = [NodeId::from_index(3), NodeId::from_index(1)];
        let map = IndexMap::from_nodes(ids);
        assert_eq!(map.node_count(), 2);
        assert_eq!(map.node_idx(NodeId::from_index(3)), Some(0));
        assert_eq!(map.node_idx(NodeId::from_index(1)), Some(1));
        assert!(map.node_idx(NodeId::from_index(0)).is_none());
        assert_eq!(map.node_ids(), &ids);
    }
}

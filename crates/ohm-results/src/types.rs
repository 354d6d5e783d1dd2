//! Snapshot and trace data types.

use ohm_graph::Network;
use serde::{Deserialize, Serialize};

/// One resistor as it appeared at snapshot time.
///
/// `r_ohm` is `None` for an open circuit (`+inf` does not survive JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub name: String,
    pub a: String,
    pub b: String,
    pub r_ohm: Option<f64>,
}

/// The live portion of a network at one instant of the reduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSnapshot>,
    pub start: String,
    pub end: String,
}

impl NetworkSnapshot {
    /// Capture the live nodes and edges of `network` by display name.
    pub fn of(network: &Network) -> Self {
        let name_of = |id| {
            network
                .node(id)
                .map(|n| n.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let nodes = network.live_nodes().map(|n| n.name.clone()).collect();
        let edges = network
            .live_edges()
            .map(|e| EdgeSnapshot {
                name: e.name.clone(),
                a: name_of(e.a),
                b: name_of(e.b),
                r_ohm: e.resistance.value.is_finite().then_some(e.resistance.value),
            })
            .collect();

        let (start, end) = network.terminals();
        Self {
            nodes,
            edges,
            start: name_of(start),
            end: name_of(end),
        }
    }
}

/// Which reduction rule produced a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StepKind {
    MergeParallel { a: String, b: String },
    EliminateSeries { node: String },
    Fallback,
}

/// One completed reduction step and the network state after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionStep {
    pub kind: StepKind,
    pub after: NetworkSnapshot,
}

/// The ordered sequence of intermediate network states of one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionTrace {
    pub initial: NetworkSnapshot,
    pub steps: Vec<ReductionStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohm_core::units::{ohm, open_circuit};
    use ohm_graph::NetworkBuilder;

    fn sample_network() -> Network {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("in");
        let b = builder.add_node("out");
        builder.add_resistor("R1", a, b, ohm(10.0)).unwrap();
        builder.add_resistor("Ropen", a, b, open_circuit()).unwrap();
        builder.build(a, b).unwrap()
    }

    #[test]
    fn snapshot_captures_live_state() {
        let snap = NetworkSnapshot::of(&sample_network());
        assert_eq!(snap.nodes, vec!["in", "out"]);
        assert_eq!(snap.edges.len(), 2);
        assert_eq!(snap.start, "in");
        assert_eq!(snap.end, "out");
        assert_eq!(snap.edges[0].r_ohm, Some(10.0));
        // Open circuits serialize as absent, not as a lossy float.
        assert_eq!(snap.edges[1].r_ohm, None);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snap = NetworkSnapshot::of(&sample_network());
        let json = serde_json::to_string(&snap).unwrap();
        let back: NetworkSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.nodes, snap.nodes);
        assert_eq!(back.edges.len(), snap.edges.len());
    }

    #[test]
    fn step_kind_tags_in_json() {
        let kind = StepKind::EliminateSeries {
            node: "m1".into(),
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"kind\":\"EliminateSeries\""));
    }
}

//! Core network data structure and its destructive reduction primitives.

use std::collections::VecDeque;

use ohm_core::{EdgeId, NodeId, Real, Resistance, conductance, ohm};

/// A junction in the resistor network.
///
/// Nodes are minimal: identity plus a name for human reference. Degree is
/// derived from the live edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// One resistor instance between two junctions.
///
/// Parallel resistors between the same pair of junctions are kept as separate
/// edges until `merge_parallel` combines them; collapsing early would lose the
/// intermediate states a reporter wants to show and the multiplicity the
/// classifier keys on.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub name: String,
    pub a: NodeId,
    pub b: NodeId,
    pub resistance: Resistance,
}

impl Edge {
    /// The endpoint opposite `node`.
    ///
    /// # Panics
    /// Panics if `node` is not an endpoint of this edge.
    pub fn other(&self, node: NodeId) -> NodeId {
        if node == self.a {
            self.b
        } else if node == self.b {
            self.a
        } else {
            panic!("node {} is not an endpoint of edge {}", node, self.id)
        }
    }

    /// Whether this edge joins the unordered pair `(a, b)`.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }
}

/// The resistor network: a weighted undirected multigraph with two fixed
/// terminal junctions.
///
/// Nodes and edges live in arenas addressed by stable IDs; removal tombstones
/// a slot instead of shifting, so IDs held by the classifier or a trace never
/// dangle. Neighbor and degree queries are derived by scanning the live edges.
///
/// A `Network` is exclusively owned by the one solve mutating it. Terminals
/// are fixed for the lifetime of the network and are never eliminated.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) node_alive: Vec<bool>,
    pub(crate) edge_alive: Vec<bool>,
    pub(crate) start: NodeId,
    pub(crate) end: NodeId,
}

impl Network {
    /// The `(start, end)` terminal pair.
    pub fn terminals(&self) -> (NodeId, NodeId) {
        (self.start, self.end)
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        node == self.start || node == self.end
    }

    /// Get a live node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let idx = id.index() as usize;
        if *self.node_alive.get(idx)? {
            self.nodes.get(idx)
        } else {
            None
        }
    }

    /// Get a live edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        let idx = id.index() as usize;
        if *self.edge_alive.get(idx)? {
            self.edges.get(idx)
        } else {
            None
        }
    }

    /// Iterate over live nodes in ID order.
    pub fn live_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|n| self.node_alive[n.id.index() as usize])
    }

    /// Iterate over live edges in ID order.
    pub fn live_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| self.edge_alive[e.id.index() as usize])
    }

    pub fn live_node_count(&self) -> usize {
        self.node_alive.iter().filter(|a| **a).count()
    }

    pub fn live_edge_count(&self) -> usize {
        self.edge_alive.iter().filter(|a| **a).count()
    }

    /// Number of live edges incident to `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.live_edges()
            .filter(|e| e.a == node || e.b == node)
            .count()
    }

    /// The multiset of `(edge, neighbor, resistance)` triples around `node`.
    pub fn neighbors(&self, node: NodeId) -> Vec<(EdgeId, NodeId, Resistance)> {
        self.live_edges()
            .filter(|e| e.a == node || e.b == node)
            .map(|e| (e.id, e.other(node), e.resistance))
            .collect()
    }

    /// IDs of live edges incident to `node`, in ID order.
    pub fn incident_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.live_edges()
            .filter(|e| e.a == node || e.b == node)
            .map(|e| e.id)
            .collect()
    }

    /// IDs of all live edges between the unordered pair `(a, b)`, in ID order.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> Vec<EdgeId> {
        self.live_edges()
            .filter(|e| e.joins(a, b))
            .map(|e| e.id)
            .collect()
    }

    /// Remove one specific parallel edge instance. Other edges between the
    /// same pair of junctions are untouched.
    ///
    /// # Panics
    /// Panics if the edge is not live.
    pub fn remove_edge(&mut self, id: EdgeId) {
        let idx = id.index() as usize;
        assert!(self.edge_alive[idx], "remove_edge: edge {id} is not live");
        self.edge_alive[idx] = false;
    }

    /// Replace all live edges between `(a, b)` with a single edge carrying
    /// their parallel combination `1 / sum(1/r_i)`.
    ///
    /// An open circuit contributes zero conductance; if every edge is open the
    /// result is open. A dead short wins outright.
    ///
    /// # Panics
    /// Panics if there is no live edge between `a` and `b`.
    pub fn merge_parallel(&mut self, a: NodeId, b: NodeId) -> EdgeId {
        let ids = self.edges_between(a, b);
        assert!(
            !ids.is_empty(),
            "merge_parallel: no live edge between {a} and {b}"
        );

        let mut g_sum = 0.0;
        let mut shorted = false;
        let mut names = Vec::with_capacity(ids.len());
        for &id in &ids {
            let e = &self.edges[id.index() as usize];
            names.push(e.name.clone());
            let r = e.resistance.value;
            if r == 0.0 {
                shorted = true;
            } else {
                g_sum += conductance(r);
            }
        }

        let combined = if shorted {
            0.0
        } else if g_sum == 0.0 {
            Real::INFINITY
        } else {
            1.0 / g_sum
        };

        for &id in &ids {
            self.edge_alive[id.index() as usize] = false;
        }

        let name = match names.as_mut_slice() {
            [only] => std::mem::take(only),
            _ => names.join("||"),
        };
        self.push_edge(name, a, b, ohm(combined))
    }

    /// Eliminate a degree-2 non-terminal node, splicing its two incident
    /// edges `(a, n, r1)` and `(n, b, r2)` into one edge `(a, b, r1 + r2)`.
    ///
    /// If the two far endpoints coincide the spliced edge would be a
    /// self-loop: a resistive loop with no effect on the terminal-to-terminal
    /// resistance. It is discarded and `None` is returned. (Under
    /// parallel-first rule priority this cannot happen — two edges to the
    /// same neighbor are a parallel pair — but the operation stays correct
    /// on its own.)
    ///
    /// # Panics
    /// Panics if `n` is a terminal or its degree is not exactly 2; that is a
    /// classifier bug, not a property of the input.
    pub fn eliminate_series_node(&mut self, n: NodeId) -> Option<EdgeId> {
        assert!(
            !self.is_terminal(n),
            "eliminate_series_node: node {n} is a terminal"
        );
        let incident = self.incident_edges(n);
        assert_eq!(
            incident.len(),
            2,
            "eliminate_series_node: node {n} has degree {}",
            incident.len()
        );

        let (left, right) = (incident[0], incident[1]);
        let (a, r1, name1) = {
            let e = &self.edges[left.index() as usize];
            (e.other(n), e.resistance, e.name.clone())
        };
        let (b, r2, name2) = {
            let e = &self.edges[right.index() as usize];
            (e.other(n), e.resistance, e.name.clone())
        };

        self.edge_alive[left.index() as usize] = false;
        self.edge_alive[right.index() as usize] = false;
        self.node_alive[n.index() as usize] = false;

        if a == b {
            return None;
        }
        Some(self.push_edge(format!("{name1}+{name2}"), a, b, r1 + r2))
    }

    /// Nodes reachable from `from` through live edges accepted by `keep`.
    pub fn component<F>(&self, from: NodeId, keep: F) -> Vec<NodeId>
    where
        F: Fn(&Edge) -> bool,
    {
        let mut seen = vec![false; self.nodes.len()];
        let from_idx = from.index() as usize;
        if !self.node_alive.get(from_idx).copied().unwrap_or(false) {
            return Vec::new();
        }
        seen[from_idx] = true;

        let mut queue = VecDeque::from([from]);
        while let Some(n) = queue.pop_front() {
            for e in self.live_edges() {
                if !keep(e) {
                    continue;
                }
                let next = if e.a == n {
                    e.b
                } else if e.b == n {
                    e.a
                } else {
                    continue;
                };
                let next_idx = next.index() as usize;
                if !seen[next_idx] {
                    seen[next_idx] = true;
                    queue.push_back(next);
                }
            }
        }

        self.nodes
            .iter()
            .filter(|n| seen[n.id.index() as usize])
            .map(|n| n.id)
            .collect()
    }

    /// Whether a path of live edges joins the terminals. Open circuits count:
    /// structural connectivity is what separates "open network" (`+inf`) from
    /// the `Disconnected` error state.
    pub fn terminals_connected(&self) -> bool {
        self.component(self.start, |_| true).contains(&self.end)
    }

    /// If the network has collapsed to a single live edge joining the
    /// terminals, return its resistance: the solve is done.
    pub fn fully_reduced(&self) -> Option<Resistance> {
        if self.live_edge_count() != 1 {
            return None;
        }
        let e = self.live_edges().next()?;
        if e.joins(self.start, self.end) {
            Some(e.resistance)
        } else {
            None
        }
    }

    fn push_edge(&mut self, name: String, a: NodeId, b: NodeId, r: Resistance) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            name,
            a,
            b,
            resistance: r,
        });
        self.edge_alive.push(true);
        id
    }
}

//! The reduction engine: a fixpoint loop over local rules, with the
//! Laplacian fallback for whatever the local rules cannot reach.

use ohm_core::{NodeId, Resistance};
use ohm_graph::Network;
use ohm_results::{NetworkSnapshot, ReductionStep, ReductionTrace, StepKind};
use rayon::prelude::*;
use tracing::debug;

use crate::classify::{Reduction, classify};
use crate::error::{SolverError, SolverResult};
use crate::laplacian;

/// Outcome of one solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The equivalent resistance between the terminals. `+inf` means an
    /// open network.
    pub resistance: Resistance,
    /// Completed local reduction steps.
    pub steps: usize,
    /// Whether the Laplacian fallback finished the job.
    pub used_fallback: bool,
}

/// Compute the equivalent resistance of `network` between its terminals.
///
/// The network is consumed: reduction rewrites it destructively until a
/// single terminal-to-terminal edge remains or no local rule applies, at
/// which point the global fallback answers without further mutation.
pub fn solve(network: Network) -> SolverResult<Solution> {
    let (solution, _) = solve_inner(network, false)?;
    Ok(solution)
}

/// Like [`solve`], additionally recording a snapshot after every completed
/// step. Snapshots are taken between steps, never during a mutation, so each
/// one is a consistent network state a reporter can draw.
pub fn solve_with_trace(network: Network) -> SolverResult<(Solution, ReductionTrace)> {
    let (solution, trace) = solve_inner(network, true)?;
    Ok((solution, trace.expect("trace recorded when requested")))
}

/// Solve many independent networks, one exclusively-owned network per solve.
/// There is no shared mutable state, so the solves parallelize freely.
pub fn solve_batch(networks: Vec<Network>) -> Vec<SolverResult<Solution>> {
    networks.into_par_iter().map(solve).collect()
}

fn node_name(network: &Network, id: NodeId) -> String {
    network
        .node(id)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn solve_inner(
    mut network: Network,
    record: bool,
) -> SolverResult<(Solution, Option<ReductionTrace>)> {
    if !network.terminals_connected() {
        return Err(SolverError::Disconnected);
    }

    let mut trace = record.then(|| ReductionTrace {
        initial: NetworkSnapshot::of(&network),
        steps: Vec::new(),
    });

    // Every local step removes at least one edge, so the bound can only trip
    // on an engine bug.
    let budget = network.live_node_count() + network.live_edge_count();
    let mut steps = 0usize;

    loop {
        if let Some(r) = network.fully_reduced() {
            debug!(steps, resistance_ohm = r.value, "network fully reduced");
            return Ok((
                Solution {
                    resistance: r,
                    steps,
                    used_fallback: false,
                },
                trace,
            ));
        }

        let kind = match classify(&network) {
            Reduction::Parallel { a, b, edges } => {
                debug!(%a, %b, count = edges.len(), "merging parallel bundle");
                network.merge_parallel(a, b);
                StepKind::MergeParallel {
                    a: node_name(&network, a),
                    b: node_name(&network, b),
                }
            }
            Reduction::Series { node, .. } => {
                debug!(%node, "eliminating series junction");
                let name = node_name(&network, node);
                network.eliminate_series_node(node);
                StepKind::EliminateSeries { node: name }
            }
            Reduction::Irreducible => {
                debug!(steps, "no local rule applies, delegating to fallback");
                let r = laplacian::effective_resistance(&network)?;
                if let Some(t) = trace.as_mut() {
                    t.steps.push(ReductionStep {
                        kind: StepKind::Fallback,
                        after: NetworkSnapshot::of(&network),
                    });
                }
                return Ok((
                    Solution {
                        resistance: r,
                        steps,
                        used_fallback: true,
                    },
                    trace,
                ));
            }
        };

        steps += 1;
        if let Some(t) = trace.as_mut() {
            t.steps.push(ReductionStep {
                kind,
                after: NetworkSnapshot::of(&network),
            });
        }

        if steps > budget {
            return Err(SolverError::Internal {
                what: format!("reduction did not terminate within {budget} steps"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohm_core::units::ohm;
    use ohm_graph::NetworkBuilder;

    #[test]
    fn single_edge_needs_no_steps() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        builder.add_resistor("R1", a, b, ohm(7.0)).unwrap();
        let network = builder.build(a, b).unwrap();

        let solution = solve(network).unwrap();
        assert_eq!(solution.resistance.value, 7.0);
        assert_eq!(solution.steps, 0);
        assert!(!solution.used_fallback);
    }

    #[test]
    fn disconnected_network_is_an_error() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        let c = builder.add_node("C");
        let d = builder.add_node("D");
        builder.add_resistor("R1", a, b, ohm(1.0)).unwrap();
        builder.add_resistor("R2", c, d, ohm(1.0)).unwrap();
        let network = builder.build(a, c).unwrap();

        match solve(network) {
            Err(SolverError::Disconnected) => {}
            other => panic!("expected Disconnected, got {other:?}"),
        }
    }
}

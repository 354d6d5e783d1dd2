//! Effective resistance via the weighted graph Laplacian.
//!
//! The local rules handle series chains and parallel bundles; bridge-like
//! topologies reduce to neither and need a global answer. Injecting a unit
//! current at `start`, extracting it at `end` and solving the Kirchhoff
//! system for node potentials gives the effective resistance directly as the
//! potential difference across the terminals.

use nalgebra::{DMatrix, DVector};
use ohm_core::{Real, Resistance, conductance, ohm};
use ohm_graph::{Edge, IndexMap, Network};
use tracing::debug;

use crate::error::{SolverError, SolverResult};

fn finite(edge: &Edge) -> bool {
    edge.resistance.value.is_finite()
}

/// Effective resistance between the terminals, computed globally.
///
/// Builds the weighted Laplacian of the finite-conductance component
/// containing `start` (multi-edges summed), pins `end` at zero potential by
/// dropping its row and column, and solves for the potential at `start`
/// under unit current injection.
///
/// Open-circuit edges carry no current: if they are all that joins the
/// terminals, no current can flow and the result is `+inf` rather than an
/// error. `Singular` is reserved for an LU failure on the pinned system,
/// which a connected component cannot produce.
pub fn effective_resistance(network: &Network) -> SolverResult<Resistance> {
    let (start, end) = network.terminals();

    let component = network.component(start, finite);
    if !component.contains(&end) {
        debug!("terminals joined only by open circuits");
        return Ok(ohm(Real::INFINITY));
    }

    let map = IndexMap::from_nodes(component);
    let n = map.node_count();
    debug!(nodes = n, "assembling weighted Laplacian");

    let mut lap = DMatrix::<Real>::zeros(n, n);
    for edge in network.live_edges() {
        if !finite(edge) {
            continue;
        }
        let (Some(i), Some(j)) = (map.node_idx(edge.a), map.node_idx(edge.b)) else {
            // Edge lies outside the terminal component.
            continue;
        };
        let g = conductance(edge.resistance.value);
        lap[(i, i)] += g;
        lap[(j, j)] += g;
        lap[(i, j)] -= g;
        lap[(j, i)] -= g;
    }

    let start_idx = map.node_idx(start).ok_or_else(|| SolverError::Internal {
        what: "start terminal missing from its own component".to_string(),
    })?;
    let end_idx = map.node_idx(end).ok_or_else(|| SolverError::Internal {
        what: "end terminal missing from the terminal component".to_string(),
    })?;

    // Pin `end` to zero potential: drop its row and column. The remaining
    // system is nonsingular for a connected component.
    let pinned = lap.remove_row(end_idx).remove_column(end_idx);
    let reduced_start = if start_idx > end_idx {
        start_idx - 1
    } else {
        start_idx
    };

    let mut rhs = DVector::<Real>::zeros(n - 1);
    rhs[reduced_start] = 1.0;

    let potentials = pinned.lu().solve(&rhs).ok_or(SolverError::Singular)?;
    let r_eff = potentials[reduced_start];

    if !r_eff.is_finite() || r_eff < 0.0 {
        return Err(SolverError::Internal {
            what: format!("effective resistance came out as {r_eff}"),
        });
    }
    Ok(ohm(r_eff))
}

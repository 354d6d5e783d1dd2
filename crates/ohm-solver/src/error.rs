//! Error types for solver operations.

use ohm_graph::NetworkError;
use thiserror::Error;

/// Errors that can occur while solving a network.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The terminals do not share a connected component. Fatal for the
    /// solve; there is no partial equivalent resistance.
    #[error("Disconnected network: no path joins the terminals")]
    Disconnected,

    /// The fallback linear system had no solution. Connectivity is verified
    /// before the fallback runs, so this is an internal-consistency failure,
    /// kept distinct so it stays diagnosable.
    #[error("Singular network: the effective-resistance system has no solution")]
    Singular,

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Internal error: {what}")]
    Internal { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

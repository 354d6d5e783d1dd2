//! Equivalent-resistance solver for resistor networks.
//!
//! This crate reduces a two-terminal resistor network to a single scalar by
//! repeatedly applying local rewrite rules — merging parallel bundles and
//! splicing out series junctions — and falling back to a graph-Laplacian
//! effective-resistance computation for topologies (e.g. a Wheatstone
//! bridge) that no local rule can touch.
//!
//! # Example
//!
//! ```
//! use ohm_core::units::ohm;
//! use ohm_graph::NetworkBuilder;
//! use ohm_solver::solve;
//!
//! let mut builder = NetworkBuilder::new();
//! let a = builder.add_node("A");
//! let b = builder.add_node("B");
//! builder.add_resistor("R1", a, b, ohm(10.0)).unwrap();
//! builder.add_resistor("R2", a, b, ohm(10.0)).unwrap();
//! let network = builder.build(a, b).unwrap();
//!
//! let solution = solve(network).unwrap();
//! assert_eq!(solution.resistance.value, 5.0);
//! ```

pub mod classify;
pub mod error;
pub mod laplacian;
pub mod solve;

pub use classify::{Reduction, classify};
pub use error::{SolverError, SolverResult};
pub use laplacian::effective_resistance;
pub use solve::{Solution, solve, solve_batch, solve_with_trace};

//! ohm-graph: network model layer for ohmnet.
//!
//! Provides:
//! - The weighted undirected multigraph of a resistor network (`Network`)
//! - Incremental builder with fail-fast validation (`NetworkBuilder`)
//! - Stable indexing for solver integration (`IndexMap`)
//!
//! # Example
//!
//! ```
//! use ohm_core::units::ohm;
//! use ohm_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! let a = builder.add_node("A");
//! let b = builder.add_node("B");
//! builder.add_resistor("R1", a, b, ohm(10.0)).unwrap();
//! builder.add_resistor("R2", a, b, ohm(10.0)).unwrap();
//! let network = builder.build(a, b).unwrap();
//!
//! assert_eq!(network.live_node_count(), 2);
//! assert_eq!(network.degree(a), 2);
//! ```

pub mod builder;
pub mod error;
pub mod indexing;
pub mod network;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use indexing::IndexMap;
pub use network::{Edge, Network, Node};

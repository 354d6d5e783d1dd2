//! ohm-core: stable foundation for ohmnet.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for network objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;

//! ohm-results: serializable solve artifacts for external reporters.
//!
//! The solver records what happened — intermediate network states and the
//! final scalar — and this crate gives those records a stable, serializable
//! shape. Rendering (tables, plots, schematics) belongs to the consumer.

pub mod report;
pub mod types;

pub use report::{ReportError, SolveReport};
pub use types::{EdgeSnapshot, NetworkSnapshot, ReductionStep, ReductionTrace, StepKind};

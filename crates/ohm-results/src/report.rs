//! Final solve report for external consumers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ReductionTrace;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything a reporter needs from one finished solve.
///
/// `resistance_ohm` is `None` for an open network (`+inf` equivalent
/// resistance), matching the edge-snapshot convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub resistance_ohm: Option<f64>,
    pub steps: usize,
    pub used_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<ReductionTrace>,
}

impl SolveReport {
    pub fn new(resistance_ohm: f64, steps: usize, used_fallback: bool) -> Self {
        Self {
            resistance_ohm: resistance_ohm.is_finite().then_some(resistance_ohm),
            steps,
            used_fallback,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: ReductionTrace) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_json_shape() {
        let report = SolveReport::new(23.5714, 3, false);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"resistance_ohm\""));
        assert!(json.contains("\"used_fallback\": false"));
        // No trace recorded, no trace key emitted.
        assert!(!json.contains("\"trace\""));
    }

    #[test]
    fn open_network_reports_none() {
        let report = SolveReport::new(f64::INFINITY, 1, false);
        assert_eq!(report.resistance_ohm, None);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"resistance_ohm\": null"));
    }

    #[test]
    fn report_round_trips() {
        let report = SolveReport::new(5.0, 2, true);
        let json = report.to_json().unwrap();
        let back: SolveReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.resistance_ohm, Some(5.0));
        assert_eq!(back.steps, 2);
        assert!(back.used_fallback);
    }
}

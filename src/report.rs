//! Presentation of an estimate as text or JSON.
//!
//! A single template covers every form layout; [`ReportView`] selects which
//! inputs are taken into account and which figures are shown.

use crate::abbreviate::abbreviate_count;
use crate::error::{CalculatorError, Result};
use crate::estimator::{
    bytes_to_gb, estimate, CalculationInput, CalculationResult, BYTES_PER_COMPONENT,
    BYTES_PER_CONNECTION, NAIVE_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which fields a report exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// Dimensions only; one million objects are assumed. Naive estimate.
    Basic,
    /// Dimensions and object count. Naive estimate.
    Objects,
    /// All three inputs. Naive and accurate estimates with the breakdown.
    #[default]
    Detailed,
}

impl ReportView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportView::Basic => "basic",
            ReportView::Objects => "objects",
            ReportView::Detailed => "detailed",
        }
    }

    /// Restrict an input to the fields this view exposes; hidden fields fall
    /// back to their defaults.
    pub fn effective_input(&self, input: &CalculationInput) -> CalculationInput {
        match self {
            ReportView::Basic => CalculationInput::with_dimensions(input.dimensions),
            ReportView::Objects => CalculationInput {
                max_connections: CalculationInput::default().max_connections,
                ..*input
            },
            ReportView::Detailed => *input,
        }
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breakdown shown only by [`ReportView::Detailed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedFigures {
    pub max_connections: u64,
    pub bytes_per_vector: u64,
    pub bytes_per_vector_kb: f64,
    pub raw_memory_bytes: u64,
    pub raw_memory_gb: f64,
    pub connection_overhead_bytes: u64,
    pub connection_overhead_gb: f64,
    pub accurate_estimate_bytes: u64,
    pub accurate_estimate_gb: f64,
}

/// A rendered estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub view: ReportView,
    pub dimensions: u64,
    pub object_count: u64,
    /// Object count in words, e.g. "1 Million".
    pub objects_label: String,
    pub naive_estimate_bytes: u64,
    pub naive_estimate_gb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailedFigures>,
}

impl Report {
    /// Run the estimator once for `input` and keep the fields `view` exposes.
    pub fn build(view: ReportView, input: &CalculationInput) -> Self {
        let input = view.effective_input(input);
        let result = estimate(&input);
        tracing::debug!(%view, ?input, ?result, "estimate computed");
        Self::from_result(view, &input, &result)
    }

    fn from_result(view: ReportView, input: &CalculationInput, result: &CalculationResult) -> Self {
        let detail = match view {
            ReportView::Detailed => Some(DetailedFigures {
                max_connections: input.max_connections,
                bytes_per_vector: result.bytes_per_vector,
                bytes_per_vector_kb: result.bytes_per_vector_kb(),
                raw_memory_bytes: result.raw_memory_bytes,
                raw_memory_gb: result.raw_gb(),
                connection_overhead_bytes: result.connection_overhead_bytes,
                connection_overhead_gb: result.overhead_gb(),
                accurate_estimate_bytes: result.accurate_estimate_bytes,
                accurate_estimate_gb: result.accurate_gb(),
            }),
            ReportView::Basic | ReportView::Objects => None,
        };

        Self {
            view,
            dimensions: input.dimensions,
            object_count: input.object_count,
            objects_label: abbreviate_count(input.object_count),
            naive_estimate_bytes: result.naive_estimate_bytes,
            naive_estimate_gb: bytes_to_gb(result.naive_estimate_bytes),
            detail,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalculatorError::SerializationError(e.to_string()))
    }

    /// Read back a report produced by [`Report::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CalculatorError::SerializationError(e.to_string()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            None => {
                writeln!(
                    f,
                    "For {} objects with {} dimensions, you will need {} * {} * ({} * {}):",
                    self.objects_label,
                    self.dimensions,
                    NAIVE_MULTIPLIER,
                    self.object_count,
                    self.dimensions,
                    BYTES_PER_COMPONENT,
                )?;
                writeln!(f, "{:.2} GB", self.naive_estimate_gb)
            }
            Some(detail) => {
                writeln!(
                    f,
                    "For {} objects with {} dimensions and {} max connections:",
                    self.objects_label, self.dimensions, detail.max_connections,
                )?;
                writeln!(
                    f,
                    "  Vector size:          {:.2} KB per object",
                    detail.bytes_per_vector_kb
                )?;
                writeln!(f, "  Raw vector memory:    {:.2} GB", detail.raw_memory_gb)?;
                writeln!(
                    f,
                    "  Naive estimate ({}x):  {:.2} GB",
                    NAIVE_MULTIPLIER, self.naive_estimate_gb
                )?;
                writeln!(
                    f,
                    "  Connection overhead:  {:.2} GB ({} * {} * {} bytes)",
                    detail.connection_overhead_gb,
                    self.object_count,
                    detail.max_connections,
                    BYTES_PER_CONNECTION,
                )?;
                writeln!(
                    f,
                    "  Accurate estimate:    {:.2} GB",
                    detail.accurate_estimate_gb
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_view_assumes_one_million() {
        let report = Report::build(ReportView::Basic, &CalculationInput::new(256, 42_000, 8));

        assert_eq!(report.object_count, 1_000_000);
        assert_eq!(report.objects_label, "1 Million");
        assert_eq!(report.naive_estimate_bytes, 2_048_000_000);
        assert!(report.detail.is_none());
    }

    #[test]
    fn test_basic_text() {
        let report = Report::build(ReportView::Basic, &CalculationInput::with_dimensions(384));
        let text = report.to_string();

        assert_eq!(
            text,
            "For 1 Million objects with 384 dimensions, you will need 2 * 1000000 * (384 * 4):\n2.86 GB\n"
        );
    }

    #[test]
    fn test_objects_view_uses_object_count() {
        let report = Report::build(ReportView::Objects, &CalculationInput::new(384, 2_000_000, 64));

        assert_eq!(report.object_count, 2_000_000);
        assert_eq!(report.objects_label, "2 Million");
        assert_eq!(report.naive_estimate_bytes, 6_144_000_000);
        assert!(report.detail.is_none());
    }

    #[test]
    fn test_detailed_view() {
        let report = Report::build(ReportView::Detailed, &CalculationInput::default());
        let detail = report.detail.as_ref().unwrap();

        assert_eq!(detail.max_connections, 32);
        assert_eq!(detail.bytes_per_vector, 1536);
        assert_eq!(detail.connection_overhead_bytes, 320_000_000);
        assert_eq!(detail.accurate_estimate_bytes, 1_856_000_000);

        let text = report.to_string();
        assert!(text.starts_with("For 1 Million objects with 384 dimensions and 32 max connections:"));
        assert!(text.contains("Vector size:          1.50 KB per object"));
        assert!(text.contains("Naive estimate (2x):  2.86 GB"));
        assert!(text.contains("Connection overhead:  0.30 GB (1000000 * 32 * 10 bytes)"));
        assert!(text.contains("Accurate estimate:    1.73 GB"));
    }

    #[test]
    fn test_json_detailed() {
        let report = Report::build(ReportView::Detailed, &CalculationInput::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["view"], "detailed");
        assert_eq!(value["objects_label"], "1 Million");
        assert_eq!(value["naive_estimate_bytes"], 3_072_000_000u64);
        assert_eq!(value["detail"]["accurate_estimate_bytes"], 1_856_000_000u64);
    }

    #[test]
    fn test_json_omits_detail_for_naive_views() {
        let report = Report::build(ReportView::Objects, &CalculationInput::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["view"], "objects");
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_json_round_trip_every_view() {
        let input = CalculationInput::new(1536, 7_250_000, 48);

        for view in [ReportView::Basic, ReportView::Objects, ReportView::Detailed] {
            let report = Report::build(view, &input);
            let restored = Report::from_json(&report.to_json().unwrap()).unwrap();
            assert_eq!(restored, report);
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Report::from_json("{\"view\": \"sideways\"}"),
            Err(CalculatorError::SerializationError(_))
        ));
    }

    #[test]
    fn test_effective_input() {
        let input = CalculationInput::new(128, 50_000, 16);

        assert_eq!(ReportView::Detailed.effective_input(&input), input);
        assert_eq!(
            ReportView::Objects.effective_input(&input),
            CalculationInput::new(128, 50_000, 32)
        );
        assert_eq!(
            ReportView::Basic.effective_input(&input),
            CalculationInput::new(128, 1_000_000, 32)
        );
    }
}

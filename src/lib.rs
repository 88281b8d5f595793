//! # Vector Resource Calculator
//!
//! Estimates the memory a vector database needs for a given workload.
//!
//! This library provides:
//! - A naive estimate (twice the raw vector storage)
//! - An accurate estimate (raw storage plus graph-connection overhead)
//! - Abbreviation of large object counts ("1 Million")
//! - Input bounds and text/JSON reports
//!
//! ## Example
//!
//! ```rust
//! use vector_resource_calculator::{abbreviate, estimate, CalculationInput};
//!
//! let input = CalculationInput::new(384, 1_000_000, 32);
//! let result = estimate(&input);
//!
//! assert_eq!(result.naive_estimate_bytes, 3_072_000_000);
//! assert_eq!(result.accurate_estimate_bytes, 1_856_000_000);
//! assert_eq!(abbreviate(input.object_count as f64), "1 Million");
//! println!("{:.2} GB", result.accurate_gb());
//! ```

pub mod abbreviate;
pub mod config;
pub mod error;
pub mod estimator;
pub mod report;

pub use abbreviate::{abbreviate, abbreviate_count};
pub use config::{ClampAdjustment, FieldBounds, InputBounds, InputField};
pub use error::{CalculatorError, Result};
pub use estimator::{bytes_to_gb, bytes_to_kb, estimate, CalculationInput, CalculationResult};
pub use report::{DetailedFigures, Report, ReportView};

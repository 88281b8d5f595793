//! Input bounds for the calculator form.
//!
//! The estimator accepts any values; bounds are applied by the presentation
//! layer, either by clamping (the default) or by strict validation.

use crate::error::{CalculatorError, Result};
use crate::estimator::CalculationInput;
use std::fmt;

/// Inclusive range for one numeric field. `max` of `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: u64,
    pub max: Option<u64>,
}

impl FieldBounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    pub fn clamp(&self, value: u64) -> u64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Which input field a [`ClampAdjustment`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Dimensions,
    ObjectCount,
    MaxConnections,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Dimensions => "dimensions",
            InputField::ObjectCount => "object_count",
            InputField::MaxConnections => "max_connections",
        };
        f.write_str(name)
    }
}

/// A field whose value was moved onto its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampAdjustment {
    pub field: InputField,
    pub requested: u64,
    pub applied: u64,
}

/// Bounds for all three calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBounds {
    pub dimensions: FieldBounds,
    pub object_count: FieldBounds,
    pub max_connections: FieldBounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            dimensions: FieldBounds::new(1, 10_000),
            object_count: FieldBounds::at_least(10_000),
            max_connections: FieldBounds::new(1, 10_000),
        }
    }
}

impl InputBounds {
    /// Clamp every field into range, returning the clamped input and the
    /// fields that changed.
    pub fn clamp(&self, input: &CalculationInput) -> (CalculationInput, Vec<ClampAdjustment>) {
        let mut adjustments = Vec::new();
        let mut apply = |field: InputField, bounds: &FieldBounds, requested: u64| {
            let applied = bounds.clamp(requested);
            if applied != requested {
                adjustments.push(ClampAdjustment {
                    field,
                    requested,
                    applied,
                });
            }
            applied
        };

        let clamped = CalculationInput {
            dimensions: apply(InputField::Dimensions, &self.dimensions, input.dimensions),
            object_count: apply(
                InputField::ObjectCount,
                &self.object_count,
                input.object_count,
            ),
            max_connections: apply(
                InputField::MaxConnections,
                &self.max_connections,
                input.max_connections,
            ),
        };
        (clamped, adjustments)
    }

    /// Reject the input if any field is out of range. Fields are checked in
    /// declaration order; the first violation is returned.
    pub fn validate(&self, input: &CalculationInput) -> Result<()> {
        if !self.dimensions.contains(input.dimensions) {
            return Err(CalculatorError::InvalidDimensions {
                value: input.dimensions,
                min: self.dimensions.min,
                max: self.dimensions.max.unwrap_or(u64::MAX),
            });
        }
        if !self.object_count.contains(input.object_count) {
            return Err(CalculatorError::InvalidObjectCount {
                value: input.object_count,
                min: self.object_count.min,
            });
        }
        if !self.max_connections.contains(input.max_connections) {
            return Err(CalculatorError::InvalidMaxConnections {
                value: input.max_connections,
                min: self.max_connections.min,
                max: self.max_connections.max.unwrap_or(u64::MAX),
            });
        }
        Ok(())
    }

    /// Bring the input into range: reject it when `strict`, otherwise clamp
    /// and log each adjusted field.
    pub fn apply(&self, input: &CalculationInput, strict: bool) -> Result<CalculationInput> {
        if strict {
            self.validate(input)?;
            return Ok(*input);
        }

        let (clamped, adjustments) = self.clamp(input);
        for adjustment in &adjustments {
            tracing::warn!(
                field = %adjustment.field,
                requested = adjustment.requested,
                applied = adjustment.applied,
                "input out of range, clamped"
            );
        }
        Ok(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_in_bounds() {
        let bounds = InputBounds::default();
        let input = CalculationInput::default();

        assert!(bounds.validate(&input).is_ok());
        let (clamped, adjustments) = bounds.clamp(&input);
        assert_eq!(clamped, input);
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_clamp_to_lower_bounds() {
        let bounds = InputBounds::default();
        let (clamped, adjustments) = bounds.clamp(&CalculationInput::new(0, 5, 0));

        assert_eq!(clamped, CalculationInput::new(1, 10_000, 1));
        assert_eq!(adjustments.len(), 3);
        assert_eq!(
            adjustments[1],
            ClampAdjustment {
                field: InputField::ObjectCount,
                requested: 5,
                applied: 10_000,
            }
        );
    }

    #[test]
    fn test_clamp_to_upper_bounds() {
        let bounds = InputBounds::default();
        let (clamped, adjustments) =
            bounds.clamp(&CalculationInput::new(20_000, u64::MAX, 10_001));

        assert_eq!(clamped, CalculationInput::new(10_000, u64::MAX, 10_000));
        let fields: Vec<InputField> = adjustments.iter().map(|a| a.field).collect();
        assert_eq!(fields, vec![InputField::Dimensions, InputField::MaxConnections]);
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let bounds = InputBounds::default();

        assert_eq!(
            bounds.validate(&CalculationInput::new(0, 1_000_000, 32)),
            Err(CalculatorError::InvalidDimensions {
                value: 0,
                min: 1,
                max: 10_000
            })
        );
        assert_eq!(
            bounds.validate(&CalculationInput::new(384, 9_999, 32)),
            Err(CalculatorError::InvalidObjectCount {
                value: 9_999,
                min: 10_000
            })
        );
        assert!(matches!(
            bounds.validate(&CalculationInput::new(384, 1_000_000, 10_001)),
            Err(CalculatorError::InvalidMaxConnections { value: 10_001, .. })
        ));
    }

    #[test]
    fn test_bounds_edges_are_inclusive() {
        let bounds = InputBounds::default();
        assert!(bounds.validate(&CalculationInput::new(1, 10_000, 1)).is_ok());
        assert!(bounds
            .validate(&CalculationInput::new(10_000, 10_000, 10_000))
            .is_ok());
    }

    #[test]
    fn test_apply_clamps_unless_strict() {
        let bounds = InputBounds::default();
        let input = CalculationInput::new(0, 1_000_000, 20_000);

        assert_eq!(
            bounds.apply(&input, false),
            Ok(CalculationInput::new(1, 1_000_000, 10_000))
        );
        assert!(matches!(
            bounds.apply(&input, true),
            Err(CalculatorError::InvalidDimensions { value: 0, .. })
        ));
    }

    #[test]
    fn test_apply_passes_valid_input_through() {
        let bounds = InputBounds::default();
        let input = CalculationInput::new(768, 50_000, 64);

        assert_eq!(bounds.apply(&input, false), Ok(input));
        assert_eq!(bounds.apply(&input, true), Ok(input));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(InputField::MaxConnections.to_string(), "max_connections");
    }
}

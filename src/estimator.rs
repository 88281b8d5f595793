//! Memory estimation for a vector index.
//!
//! Two estimates are produced from the same inputs:
//! - a naive one that doubles the raw vector storage, and
//! - an accurate one that adds per-object graph-connection overhead.

/// Bytes per vector component (`f32`).
pub const BYTES_PER_COMPONENT: u64 = 4;

/// Bytes attributed to each graph connection of an object.
pub const BYTES_PER_CONNECTION: u64 = 10;

/// Multiplier applied to raw vector storage by the naive estimate.
pub const NAIVE_MULTIPLIER: u64 = 2;

/// Bytes in a gigabyte (binary convention, 1024^3).
pub const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Bytes in a kilobyte (binary convention).
pub const BYTES_PER_KB: f64 = 1024.0;

/// Object count assumed when only the dimensionality is given.
pub const DEFAULT_OBJECT_COUNT: u64 = 1_000_000;

/// Default vector dimensionality.
pub const DEFAULT_DIMENSIONS: u64 = 384;

/// Default graph connections per object.
pub const DEFAULT_MAX_CONNECTIONS: u64 = 32;

/// The three user-supplied parameters of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalculationInput {
    /// Vector dimensionality.
    pub dimensions: u64,
    /// Number of stored vectors.
    pub object_count: u64,
    /// Graph connections per object.
    pub max_connections: u64,
}

impl CalculationInput {
    pub fn new(dimensions: u64, object_count: u64, max_connections: u64) -> Self {
        Self {
            dimensions,
            object_count,
            max_connections,
        }
    }

    /// Input for the single-field form: one million objects, default
    /// connections.
    pub fn with_dimensions(dimensions: u64) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            object_count: DEFAULT_OBJECT_COUNT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Derived memory figures, all in bytes.
///
/// Built in one step from a [`CalculationInput`]; nothing is updated
/// afterwards. `accurate_estimate_bytes` may exceed `naive_estimate_bytes`
/// when `max_connections` is large relative to `dimensions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalculationResult {
    pub bytes_per_vector: u64,
    pub raw_memory_bytes: u64,
    pub naive_estimate_bytes: u64,
    pub connection_overhead_bytes: u64,
    pub accurate_estimate_bytes: u64,
}

impl CalculationResult {
    /// Compute every derived field. Inputs are not validated: zero or
    /// out-of-range values yield degenerate figures, and products saturate
    /// at `u64::MAX` rather than overflow.
    pub fn compute(dimensions: u64, object_count: u64, max_connections: u64) -> Self {
        let bytes_per_vector = dimensions.saturating_mul(BYTES_PER_COMPONENT);
        let raw_memory_bytes = object_count.saturating_mul(bytes_per_vector);
        let naive_estimate_bytes = raw_memory_bytes.saturating_mul(NAIVE_MULTIPLIER);
        let connection_overhead_bytes = object_count
            .saturating_mul(max_connections)
            .saturating_mul(BYTES_PER_CONNECTION);
        let accurate_estimate_bytes = raw_memory_bytes.saturating_add(connection_overhead_bytes);

        Self {
            bytes_per_vector,
            raw_memory_bytes,
            naive_estimate_bytes,
            connection_overhead_bytes,
            accurate_estimate_bytes,
        }
    }

    pub fn bytes_per_vector_kb(&self) -> f64 {
        bytes_to_kb(self.bytes_per_vector)
    }

    pub fn raw_gb(&self) -> f64 {
        bytes_to_gb(self.raw_memory_bytes)
    }

    pub fn naive_gb(&self) -> f64 {
        bytes_to_gb(self.naive_estimate_bytes)
    }

    pub fn overhead_gb(&self) -> f64 {
        bytes_to_gb(self.connection_overhead_bytes)
    }

    pub fn accurate_gb(&self) -> f64 {
        bytes_to_gb(self.accurate_estimate_bytes)
    }
}

/// Estimate memory requirements for the given input.
pub fn estimate(input: &CalculationInput) -> CalculationResult {
    CalculationResult::compute(input.dimensions, input.object_count, input.max_connections)
}

/// Convert bytes to gigabytes (divides by 1024^3).
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Convert bytes to kilobytes (divides by 1024).
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB
}

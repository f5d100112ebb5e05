use thiserror::Error;

/// Errors surfaced by the derivation and aggregation steps. Both are pure
/// synchronous functions; nothing is swallowed internally except the
/// documented chemistry-tag fallback in `ChemistryType::from_tag`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// Aggregation divides by the result count; it needs at least one cell.
    #[error("cannot aggregate an empty result set")]
    EmptyResultSet,

    /// Capacity is voltage times current; a zero, negative, or non-finite
    /// current would silently produce a nonsensical capacity.
    #[error("cell current must be a positive finite value in amperes, got {current}")]
    NonPositiveCurrent { current: f64 },
}

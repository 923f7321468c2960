//! Position assignment - the external authority that allocates a spot in the
//! queue.
//!
//! The source is injected into the effect handler as an explicit dependency,
//! so the reducer stays pure and tests run without a backend. Today the only
//! implementation is a fixed placeholder standing in for a real allocation
//! service.

/// Placeholder position handed out when no real backend is configured.
pub const DEFAULT_POSITION: u64 = 7;

/// Position assignment failure.
#[derive(Debug)]
pub enum PositionError {
    /// The assignment authority could not allocate a position.
    Unavailable(String),
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionError::Unavailable(reason) => {
                write!(f, "Position assignment unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// The external source of queue positions.
///
/// Given the join request fields, returns a position >= 1. Treated as an
/// opaque, possibly-failing call so a real backend can slot in later.
pub trait PositionSource: Send + Sync {
    fn assign(&self, business_name: &str, queue_id: &str) -> Result<u64, PositionError>;
}

/// Mock source that always assigns the same position and never fails.
#[derive(Clone, Copy, Debug)]
pub struct FixedPosition(pub u64);

impl Default for FixedPosition {
    fn default() -> Self {
        Self(DEFAULT_POSITION)
    }
}

impl PositionSource for FixedPosition {
    fn assign(&self, _business_name: &str, _queue_id: &str) -> Result<u64, PositionError> {
        // Positions start at 1; guard against a zero constant.
        Ok(self.0.max(1))
    }
}

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolarError {
    /// Site parameter rejected at construction.
    #[error("site parameter '{name}' out of range: {value}")]
    Configuration { name: &'static str, value: f64 },

    /// Inverse-trig argument left its valid domain, either beyond the
    /// clamping policy's reach (non-finite) or under `DomainPolicy::Fail`.
    #[error("argument of {quantity} outside [-1, 1]: {value}")]
    Domain { quantity: &'static str, value: f64 },
}

//! Error types for the scd-core crate.

use crate::scd_kind::ScdKind;
use crate::types::ValidationError;

/// Error type for SCD calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScdError {
    /// An input was rejected before any arithmetic ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A computed date cannot be represented on the real calendar.
    #[error("{} falls outside the supported calendar range", .scd.label())]
    OutOfRange {
        /// The date that could not be resolved.
        scd: ScdKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputRef;

    #[test]
    fn error_out_of_range() {
        let e = ScdError::OutOfRange { scd: ScdKind::Rif };
        assert_eq!(e.to_string(), "RIF SCD falls outside the supported calendar range");
    }

    #[test]
    fn error_validation_is_transparent() {
        let inner = ValidationError::InvalidInput {
            input: InputRef::Lwop(2),
            field: "end date",
            value: "soon".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        let e = ScdError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ScdError>();
    }
}

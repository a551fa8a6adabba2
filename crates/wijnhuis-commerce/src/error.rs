//! Storefront error types.
//!
//! Field-level validation outcomes are not errors in this taxonomy: they
//! are returned as data (maps keyed `group.field`) so the checkout
//! orchestrator stays a plain state container. The variants here cover
//! the cases where an operation as a whole cannot proceed.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Order validation failed; the per-field map lives on the session.
    #[error("Bestelling onvolledig: {0} veld(en) ongeldig")]
    ValidationFailed(usize),

    /// A submission is already in flight; the caller must wait for it.
    #[error("Er wordt al een bestelling verzonden")]
    SubmissionInFlight,

    /// The order gateway rejected the submission.
    #[error("Bestelling geweigerd: {0}")]
    OrderRejected(String),

    /// No address was found for the given postcode and house number.
    #[error("Geen adres gevonden voor {postcode} {house_number}")]
    AddressNotFound {
        postcode: String,
        house_number: String,
    },

    /// Persisting or loading state failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(feature = "storage")]
impl From<wijnhuis_store::StoreError> for StorefrontError {
    fn from(e: wijnhuis_store::StoreError) -> Self {
        StorefrontError::Storage(e.to_string())
    }
}

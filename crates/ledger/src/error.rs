use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Everything that can go wrong inside the ledger.
///
/// Each variant maps to one client-facing failure mode; the HTTP layer owns
/// the translation to status codes and wire messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Missing or malformed bet fields.
    #[error("invalid bet data: {0}")]
    Validation(String),
    /// Mutating action attempted after the outcome was fixed.
    #[error("gender has already been revealed")]
    AlreadyRevealed,
    /// Outcome string outside the two-value enumeration.
    #[error("invalid gender: {0}")]
    InvalidOutcome(String),
    /// The closing quote frozen at reveal is corrupt. Payouts are never
    /// recomputed from pools to paper over this; the caller must treat it
    /// as a data-integrity failure.
    #[error("corrupt closing odds for outcome {0}")]
    Integrity(String),
}

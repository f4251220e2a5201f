//! Boundary to the external fraud-prediction service.
//!
//! The dashboard never decides fraud itself; it submits a transaction and
//! receives a verdict. [`FraudModel`] is that seam, covering the three calls
//! the dashboard makes: score one transaction, report over the history, and
//! produce synthetic demo transactions. Callers hold a `dyn FraudModel` and
//! stay ignorant of what sits behind it; tests plug in scripted doubles.

use crate::transaction::{Prediction, Transaction, TransactionInput};
use std::fmt;

/// Largest batch the synthetic-transaction call accepts.
pub const MAX_SYNTHETIC_BATCH: usize = 20;

/// The prediction service's interface.
///
/// Implementations are expected to be side-effect free from the caller's
/// point of view: same input may yield different verdicts across calls (a
/// remote model is not deterministic), but nothing in this crate depends on
/// the verdict's content beyond its shape.
pub trait FraudModel {
    /// Scores one transaction.
    fn predict(&self, input: &TransactionInput) -> Result<Prediction, ModelError>;

    /// Produces a free-text report over a transaction history.
    ///
    /// Returns an error when `transactions` is empty; there is nothing to
    /// analyze.
    fn analyze(&self, transactions: &[Transaction]) -> Result<String, ModelError>;

    /// Produces `count` synthetic transactions to seed the dashboard.
    ///
    /// `count` must be between 1 and [`MAX_SYNTHETIC_BATCH`]; implementations
    /// reject anything else with [`ModelError::InvalidCount`] (see
    /// [`check_batch_count`]).
    fn generate_transactions(&self, count: usize) -> Result<Vec<TransactionInput>, ModelError>;
}

/// Validates the batch size for [`FraudModel::generate_transactions`].
///
/// Shared by implementations so they all enforce the same 1..=20 bound.
pub fn check_batch_count(count: usize) -> Result<(), ModelError> {
    if count == 0 || count > MAX_SYNTHETIC_BATCH {
        return Err(ModelError::InvalidCount { count });
    }
    Ok(())
}

/// Failures crossing the prediction boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The service was unreachable or returned a transport-level error.
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The service answered with something that could not be interpreted
    /// as a verdict.
    MalformedResponse {
        /// Human-readable cause.
        reason: String,
    },
    /// Analysis was requested over an empty history.
    NothingToAnalyze,
    /// Synthetic batch size outside 1..=[`MAX_SYNTHETIC_BATCH`].
    InvalidCount {
        /// The rejected count.
        count: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "prediction service unavailable: {}", reason)
            }
            Self::MalformedResponse { reason } => {
                write!(f, "malformed prediction response: {}", reason)
            }
            Self::NothingToAnalyze => write!(f, "no transactions to analyze"),
            Self::InvalidCount { count } => write!(
                f,
                "batch size must be between 1 and {}, got {}",
                MAX_SYNTHETIC_BATCH, count
            ),
        }
    }
}

impl std::error::Error for ModelError {}

//! Transaction and prediction types.
//!
//! These are the documents the dashboard round-trips: a simulated transaction
//! goes out to the prediction service, and the transaction plus its
//! prediction is what the history table and stats widget consume. Serde
//! derives sit behind the `serde` feature for the API/persistence boundary.

use std::fmt;

/// A simulated transaction as entered in the dashboard form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionInput {
    /// Amount in INR.
    pub amount: f64,
    /// Transaction time, datetime-local format (`2026-08-29T14:30`).
    pub time: String,
    /// Free-text location, e.g. "Mumbai, India".
    pub location: String,
    /// Free-text merchant details, e.g. "Online Store".
    pub merchant: String,
}

impl TransactionInput {
    /// Applies the form's validation rules: amount at least 1, time present,
    /// location and merchant at least two characters.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.amount < 1.0 || !self.amount.is_finite() {
            return Err(TransactionError::InvalidAmount {
                amount: self.amount,
            });
        }
        if self.time.trim().is_empty() {
            return Err(TransactionError::MissingTime);
        }
        if self.location.trim().len() < 2 {
            return Err(TransactionError::LocationTooShort);
        }
        if self.merchant.trim().len() < 2 {
            return Err(TransactionError::MerchantTooShort);
        }
        Ok(())
    }
}

/// The prediction service's verdict for one transaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// Whether the transaction was flagged as fraudulent.
    pub fraudulent: bool,
    /// Confidence of the verdict, 0.0 to 1.0.
    pub confidence: f64,
    /// Free-text reasoning accompanying the verdict.
    pub reasoning: String,
}

impl Prediction {
    /// Builds a prediction with the confidence clamped to 0..=1.
    pub fn new(fraudulent: bool, confidence: f64, reasoning: impl Into<String>) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            fraudulent,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

/// A transaction together with its prediction, as persisted and listed in
/// the history table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    /// Caller-supplied identifier, e.g. `txn-1a2b3c4d`.
    pub id: String,
    /// The simulated input.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub input: TransactionInput,
    /// The service's verdict.
    pub prediction: Prediction,
}

impl Transaction {
    /// Builds a transaction, applying the form validation rules.
    pub fn new(
        id: impl Into<String>,
        input: TransactionInput,
        prediction: Prediction,
    ) -> Result<Self, TransactionError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TransactionError::MissingId);
        }
        input.validate()?;
        Ok(Self {
            id,
            input,
            prediction,
        })
    }
}

/// Violations of the transaction form's rules.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionError {
    /// Transaction id is empty.
    MissingId,
    /// Amount below 1 or not a finite number.
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
    },
    /// Time field is empty.
    MissingTime,
    /// Location shorter than two characters.
    LocationTooShort,
    /// Merchant details shorter than two characters.
    MerchantTooShort,
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "transaction id is required"),
            Self::InvalidAmount { amount } => {
                write!(f, "amount must be at least 1, got {}", amount)
            }
            Self::MissingTime => write!(f, "time is required"),
            Self::LocationTooShort => write!(f, "location must be at least 2 characters"),
            Self::MerchantTooShort => write!(f, "merchant details must be at least 2 characters"),
        }
    }
}

impl std::error::Error for TransactionError {}

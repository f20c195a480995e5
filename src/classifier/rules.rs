use crate::catalog::CatalogEntry;
use crate::types::{ErrorCategory, NormalizedError, Severity};

pub const NETWORK_INDICATORS: &[&str] = &["fetch", "network", "failed to fetch", "cors"];
pub const CANCELLATION_INDICATORS: &[&str] = &["user rejected", "cancelled"];
pub const WALLET_INDICATORS: &[&str] = &["freighter", "wallet"];

pub const NETWORK_MESSAGE: &str = "Network connection error.";
pub const NETWORK_ACTION: &str = "Check your internet connection and RPC settings.";
pub const CANCELLED_MESSAGE: &str = "Transaction cancelled.";
pub const CANCELLED_ACTION: &str = "You'll need to sign the transaction to proceed.";
pub const WALLET_MESSAGE: &str = "Wallet communication error.";
pub const WALLET_ACTION: &str = "Ensure your wallet extension is unlocked and active.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";
pub const UNEXPECTED_ACTION: &str = "Refresh the page or contact support if this persists.";

/// Conditions recognised from exception text before the catalog is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Network,
    Cancelled,
    Wallet,
}

/// Checked in this order; the first hit wins.
const CONDITIONS: &[(Condition, &[&str])] = &[
    (Condition::Network, NETWORK_INDICATORS),
    (Condition::Cancelled, CANCELLATION_INDICATORS),
    (Condition::Wallet, WALLET_INDICATORS),
];

/// `lowered` must already be lower-cased.
pub fn detect_condition(lowered: &str) -> Option<Condition> {
    CONDITIONS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| lowered.contains(i)))
        .map(|(condition, _)| *condition)
}

/// Fixed record for a detected condition. Cancellations drop the raw text.
pub fn condition_error(condition: Condition, raw: String) -> NormalizedError {
    match condition {
        Condition::Network => NormalizedError {
            message: NETWORK_MESSAGE.to_string(),
            category: ErrorCategory::Network,
            severity: Severity::Error,
            actionable_step: Some(NETWORK_ACTION.to_string()),
            technical_details: Some(raw),
        },
        Condition::Cancelled => NormalizedError {
            message: CANCELLED_MESSAGE.to_string(),
            category: ErrorCategory::Wallet,
            severity: Severity::Warning,
            actionable_step: Some(CANCELLED_ACTION.to_string()),
            technical_details: None,
        },
        Condition::Wallet => NormalizedError {
            message: WALLET_MESSAGE.to_string(),
            category: ErrorCategory::Wallet,
            severity: Severity::Error,
            actionable_step: Some(WALLET_ACTION.to_string()),
            technical_details: Some(raw),
        },
    }
}

pub fn catalog_error(entry: &CatalogEntry, raw: String) -> NormalizedError {
    NormalizedError {
        message: entry.message.to_string(),
        category: ErrorCategory::Contract,
        severity: Severity::Error,
        actionable_step: entry.action.map(str::to_string),
        technical_details: Some(raw),
    }
}

pub fn passthrough_error(message: String, technical_details: Option<String>) -> NormalizedError {
    NormalizedError {
        message,
        category: ErrorCategory::Unknown,
        severity: Severity::Error,
        actionable_step: None,
        technical_details,
    }
}

pub fn unexpected_error(technical_details: Option<String>) -> NormalizedError {
    NormalizedError {
        message: UNEXPECTED_MESSAGE.to_string(),
        category: ErrorCategory::Unknown,
        severity: Severity::Error,
        actionable_step: Some(UNEXPECTED_ACTION.to_string()),
        technical_details,
    }
}

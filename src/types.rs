use serde::Serialize;

/// Origin of a failure, independent of its message text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ErrorCategory {
    Network,
    Contract,
    Validation,
    Wallet,
    Unknown,
}

/// Presentation urgency. `Warning` is reserved for user-initiated cancellations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The single user-facing record produced for any failure signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedError {
    /// End-user safe text. Never empty.
    pub message: String,
    #[serde(rename = "type")]
    pub category: ErrorCategory,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionable_step: Option<String>,
    /// Raw text or stack for diagnostics. Only for debug builds of the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<String>,
}

impl NormalizedError {
    /// Technical details gated on the caller's debug mode.
    pub fn visible_details(&self, debug: bool) -> Option<&str> {
        if debug {
            self.technical_details.as_deref()
        } else {
            None
        }
    }
}

pub mod rules;

use crate::catalog::ErrorCatalog;
use crate::signal::FailureSignal;
use crate::types::NormalizedError;

use rules::{Condition, catalog_error, condition_error, passthrough_error, unexpected_error};

/// Which link of the precedence chain produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MatchedRule {
    TextCatalog,
    TextPassthrough,
    Network,
    Cancelled,
    Wallet,
    FailureCatalog,
    FailurePassthrough,
    EmptyMessage,
    Opaque,
}

impl From<Condition> for MatchedRule {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Network => Self::Network,
            Condition::Cancelled => Self::Cancelled,
            Condition::Wallet => Self::Wallet,
        }
    }
}

/// Turns any [`FailureSignal`] into exactly one [`NormalizedError`].
///
/// Total and side-effect free apart from a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    catalog: ErrorCatalog,
}

impl Translator {
    pub const fn new() -> Self {
        Self::with_catalog(ErrorCatalog::builtin())
    }

    pub const fn with_catalog(catalog: ErrorCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> ErrorCatalog {
        self.catalog
    }

    pub fn translate(&self, signal: impl Into<FailureSignal>) -> NormalizedError {
        self.classify(signal.into()).1
    }

    pub fn classify(&self, signal: FailureSignal) -> (MatchedRule, NormalizedError) {
        let (rule, normalized) = match signal {
            FailureSignal::Text(text) => self.classify_text(text),
            FailureSignal::Failure { message, stack } => self.classify_failure(message, stack),
            FailureSignal::Opaque => (MatchedRule::Opaque, unexpected_error(None)),
        };
        tracing::debug!(
            rule = %rule,
            category = %normalized.category,
            severity = %normalized.severity,
            "classified failure signal"
        );
        (rule, normalized)
    }

    fn classify_text(&self, text: String) -> (MatchedRule, NormalizedError) {
        if let Some(entry) = self.catalog.find(&text) {
            return (MatchedRule::TextCatalog, catalog_error(entry, text));
        }
        if text.trim().is_empty() {
            return (MatchedRule::EmptyMessage, unexpected_error(None));
        }
        (MatchedRule::TextPassthrough, passthrough_error(text, None))
    }

    fn classify_failure(
        &self,
        message: String,
        stack: Option<String>,
    ) -> (MatchedRule, NormalizedError) {
        let lowered = message.to_lowercase();
        if let Some(condition) = rules::detect_condition(&lowered) {
            return (condition.into(), condition_error(condition, message));
        }
        if let Some(entry) = self.catalog.find_lowered(&lowered) {
            return (MatchedRule::FailureCatalog, catalog_error(entry, message));
        }
        if message.trim().is_empty() {
            return (MatchedRule::EmptyMessage, unexpected_error(stack));
        }
        (
            MatchedRule::FailurePassthrough,
            passthrough_error(message, stack),
        )
    }
}

/// Translate with the built-in catalog.
pub fn translate(input: impl Into<FailureSignal>) -> NormalizedError {
    Translator::new().translate(input)
}

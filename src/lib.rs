#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod signal;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::{CatalogEntry, ErrorCatalog};
pub use classifier::{MatchedRule, Translator, translate};
pub use error::Error;
pub use signal::FailureSignal;
pub use types::{ErrorCategory, NormalizedError, Severity};

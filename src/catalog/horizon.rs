//! Result codes returned by the network's transaction submission endpoint.

use super::CatalogEntry;

pub const TX_INSUFFICIENT_BALANCE: &str = "tx_insufficient_balance";
pub const TX_BAD_SEQ: &str = "tx_bad_seq";
pub const TX_TOO_LATE: &str = "tx_too_late";
pub const TX_BAD_AUTH_EXTRA: &str = "tx_bad_auth_extra";
pub const TX_BAD_AUTH: &str = "tx_bad_auth";
pub const OP_CROSS_SELF: &str = "op_cross_self";
pub const OP_NO_DESTINATION: &str = "op_no_destination";

/// `tx_bad_auth_extra` precedes `tx_bad_auth`: the latter is a substring of the former.
pub const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(
        TX_INSUFFICIENT_BALANCE,
        "Insufficient balance to cover this transaction.",
        "Add funds to your account and try again.",
    ),
    CatalogEntry::new(
        TX_BAD_SEQ,
        "Outdated account sequence number.",
        "Refresh the page and try again.",
    ),
    CatalogEntry::new(
        TX_TOO_LATE,
        "The transaction expired before it was processed.",
        "Submit the transaction again.",
    ),
    CatalogEntry::new(
        TX_BAD_AUTH_EXTRA,
        "The transaction carries unused signatures.",
        "Sign with only the required account and try again.",
    ),
    CatalogEntry::new(
        TX_BAD_AUTH,
        "Invalid transaction signature.",
        "Make sure you are signing with the correct account.",
    ),
    CatalogEntry::new(
        OP_CROSS_SELF,
        "You cannot send funds to your own account.",
        "Choose a different recipient.",
    ),
    CatalogEntry::new(
        OP_NO_DESTINATION,
        "The destination account does not exist.",
        "Check the recipient address or fund the account first.",
    ),
];

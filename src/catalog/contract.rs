//! Payroll contract errors as rendered by the contract host: `Error(Contract, #<code>)`.

use super::CatalogEntry;

pub const ALREADY_INITIALIZED: u32 = 1001;
pub const NOT_INITIALIZED: u32 = 1002;
pub const UNAUTHORIZED: u32 = 1003;
pub const INSUFFICIENT_PERMISSIONS: u32 = 1004;
pub const INVALID_AMOUNT: u32 = 1005;
pub const INSUFFICIENT_BALANCE: u32 = 1006;
pub const PROTOCOL_PAUSED: u32 = 1007;
pub const VERSION_NOT_SET: u32 = 1008;
pub const STORAGE_ERROR: u32 = 1009;
pub const INVALID_ADDRESS: u32 = 1010;
pub const STREAM_NOT_FOUND: u32 = 1011;
pub const STREAM_EXPIRED: u32 = 1012;
pub const AGENT_NOT_FOUND: u32 = 1013;
pub const INVALID_TOKEN: u32 = 1014;
pub const TRANSFER_FAILED: u32 = 1015;
pub const UPGRADE_FAILED: u32 = 1016;
pub const CUSTOM: u32 = 1999;

// Codes include the closing parenthesis so `#1001` never matches `#10010`.
pub const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::without_action(
        "Error(Contract, #1001)",
        "This contract has already been initialized.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1002)",
        "This contract has not been initialized yet.",
        "Contact the administrator.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1003)",
        "You are not authorized to perform this action.",
        "Connect with an authorized account.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1004)",
        "Your account lacks the required permissions.",
        "Ask an administrator to grant access.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1005)",
        "The amount must be greater than zero.",
        "Enter a positive amount.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1006)",
        "Insufficient balance in the payroll vault.",
        "Deposit more funds into the vault.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1007)",
        "The protocol is currently paused.",
        "Try again once the protocol resumes.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1008)",
        "The contract version has not been configured.",
        "Contact the administrator.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1009)",
        "The contract could not read or write its data.",
        "Try again later or contact support if this persists.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1010)",
        "The address provided is invalid.",
        "Check the address and try again.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1011)",
        "Payroll stream not found.",
        "Refresh the page and try again.",
    ),
    CatalogEntry::without_action("Error(Contract, #1012)", "This payroll stream has expired."),
    CatalogEntry::new(
        "Error(Contract, #1013)",
        "Automation agent not found.",
        "Register the agent before using it.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1014)",
        "The token is not supported.",
        "Choose a supported token.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1015)",
        "The token transfer failed.",
        "Check your balance and try again.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1016)",
        "The contract upgrade failed.",
        "Contact the administrator.",
    ),
    CatalogEntry::new(
        "Error(Contract, #1999)",
        "The contract rejected this request.",
        "Refresh the page or contact support if this persists.",
    ),
];

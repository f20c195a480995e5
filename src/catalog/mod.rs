pub mod contract;
pub mod horizon;

use serde::Serialize;

/// A known failure code and the user-facing text it maps to.
///
/// Codes are compared ASCII case-insensitively; any non-ASCII letters in a
/// code must be lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

impl CatalogEntry {
    pub const fn new(code: &'static str, message: &'static str, action: &'static str) -> Self {
        Self {
            code,
            message,
            action: Some(action),
        }
    }

    pub const fn without_action(code: &'static str, message: &'static str) -> Self {
        Self {
            code,
            message,
            action: None,
        }
    }

    /// Case-insensitive containment. `lowered` must already be lower-cased.
    fn matches(&self, lowered: &str) -> bool {
        let code = self.code.as_bytes();
        code.is_empty()
            || lowered
                .as_bytes()
                .windows(code.len())
                .any(|window| window.eq_ignore_ascii_case(code))
    }
}

/// Ordered, read-only list of catalog sections.
///
/// Lookup walks sections in order and entries within a section in declared
/// order; the first containing match wins.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCatalog {
    sections: &'static [&'static [CatalogEntry]],
}

const BUILTIN_SECTIONS: &[&[CatalogEntry]] = &[horizon::ENTRIES, contract::ENTRIES];

impl ErrorCatalog {
    pub const fn new(sections: &'static [&'static [CatalogEntry]]) -> Self {
        Self { sections }
    }

    pub const fn builtin() -> Self {
        Self::new(BUILTIN_SECTIONS)
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static CatalogEntry> + use<> {
        self.sections.iter().flat_map(|section| section.iter())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, text: &str) -> Option<&'static CatalogEntry> {
        self.find_lowered(&text.to_lowercase())
    }

    /// Same as [`find`](Self::find) for text the caller has already lower-cased.
    pub fn find_lowered(&self, lowered: &str) -> Option<&'static CatalogEntry> {
        self.entries().find(|entry| entry.matches(lowered))
    }
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

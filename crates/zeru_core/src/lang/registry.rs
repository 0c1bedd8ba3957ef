//! Shareable metadata for `zeru_core::lang` registries.
//!
//! The registries in `zeru_core::lang` are `const` tables. This submodule provides the small, dependency-free
//! metadata types reused across all of them.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling, docs and diagnostics; enforcement of syntax rules lives in the scanner/parser.

/// Identify the language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use zeru_core::lang::registry::Since;
///
/// let since = Since(0, 1);
/// assert_eq!(since.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. warning on a deprecated spelling), not for feature gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

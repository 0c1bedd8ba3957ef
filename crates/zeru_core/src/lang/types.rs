//! Builtin type-name vocabulary.
//!
//! This registry covers the fixed set of primitive type spellings (`i8` .. `u64`, `f32`, `f64`, `bool`, `str`,
//! `void`) plus the name of the builtin fixed-size array constructor (`Array<T, N>`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`I32` is a user-defined name).
//! - Primitive names are ordinary identifiers at the token level; the type parser consults this registry.
//! - This module is vocabulary only (spellings + metadata), not type-system semantics.
//!
//! ## Examples
//! ```rust
//! use zeru_core::lang::types::{self, PrimitiveKind, PrimitiveTypeId};
//!
//! assert_eq!(types::from_str("u16"), Some(PrimitiveTypeId::U16));
//! assert_eq!(types::info_for(PrimitiveTypeId::U16).bits, Some(16));
//! assert_eq!(types::info_for(PrimitiveTypeId::F64).kind, PrimitiveKind::Float);
//! assert_eq!(types::from_str("Array"), None);
//! ```

use super::registry::{Since, Stability};

/// Spelling of the builtin fixed-size array type constructor (`Array<T, N>`).
pub const ARRAY_TYPE_NAME: &str = "Array";

/// Stable identifier for primitive types.
///
/// ## Notes
/// - The discriminant order matches [`PRIMITIVE_TYPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Str,
    Void,
}

/// Coarse classification of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
    Str,
    Void,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveTypeId,
    pub canonical: &'static str,
    pub kind: PrimitiveKind,
    /// Width in bits for numeric primitives.
    pub bits: Option<u8>,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of primitive types, ordered by [`PrimitiveTypeId`] discriminant.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveTypeId::I8, "i8", PrimitiveKind::SignedInt, Some(8)),
    info(PrimitiveTypeId::I16, "i16", PrimitiveKind::SignedInt, Some(16)),
    info(PrimitiveTypeId::I32, "i32", PrimitiveKind::SignedInt, Some(32)),
    info(PrimitiveTypeId::I64, "i64", PrimitiveKind::SignedInt, Some(64)),
    info(PrimitiveTypeId::U8, "u8", PrimitiveKind::UnsignedInt, Some(8)),
    info(PrimitiveTypeId::U16, "u16", PrimitiveKind::UnsignedInt, Some(16)),
    info(PrimitiveTypeId::U32, "u32", PrimitiveKind::UnsignedInt, Some(32)),
    info(PrimitiveTypeId::U64, "u64", PrimitiveKind::UnsignedInt, Some(64)),
    info(PrimitiveTypeId::F32, "f32", PrimitiveKind::Float, Some(32)),
    info(PrimitiveTypeId::F64, "f64", PrimitiveKind::Float, Some(64)),
    info(PrimitiveTypeId::Bool, "bool", PrimitiveKind::Bool, None),
    info(PrimitiveTypeId::Str, "str", PrimitiveKind::Str, None),
    info(PrimitiveTypeId::Void, "void", PrimitiveKind::Void, None),
];

/// Resolve a type name to a [`PrimitiveTypeId`].
///
/// ## Returns
/// - `Some(PrimitiveTypeId)` if `name` is a primitive spelling.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the canonical spelling for a primitive type.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a primitive type.
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    &PRIMITIVE_TYPES[id as usize]
}

const fn info(id: PrimitiveTypeId, canonical: &'static str, kind: PrimitiveKind, bits: Option<u8>) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        kind,
        bits,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

//! Error types for WKB decoding and EWKB normalization.

use thiserror::Error;

use crate::model::GeometryKind;

/// Error categories reported by every decoding entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// W001: Fewer bytes available than the current step requires
    TruncatedInput,
    /// W002: Type word encodes conflicting or unrecognized flags or kind
    MalformedType,
    /// W003: A multipolygon member is not a polygon
    UnexpectedMemberType,
    /// W004: Byte-order marker is neither 0 nor 1
    InvalidByteOrder,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TruncatedInput => "W001",
            ErrorCode::MalformedType => "W002",
            ErrorCode::UnexpectedMemberType => "W003",
            ErrorCode::InvalidByteOrder => "W004",
        }
    }
}

/// Error during WKB decoding or EWKB normalization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === W001: Truncated input ===
    #[error("[W001] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    // === W002: Malformed type ===
    #[error("[W002] unknown geometry kind in type word {type_word:#010x}")]
    UnknownGeometryKind { type_word: u32 },

    #[error("[W002] type word {type_word:#010x} mixes ISO dimension offset with EWKB flags")]
    ConflictingTypeFlags { type_word: u32 },

    #[error("[W002] expected {expected:?}, found {found:?}")]
    UnexpectedGeometryType {
        expected: GeometryKind,
        found: GeometryKind,
    },

    // === W003: Unexpected member type ===
    #[error("[W003] multipolygon member {index} is a {found:?}, expected Polygon")]
    UnexpectedMemberType { index: u32, found: GeometryKind },

    // === W004: Invalid byte order ===
    #[error("[W004] invalid byte order marker: {marker} (expected 0 or 1)")]
    InvalidByteOrder { marker: u8 },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnexpectedEof { .. } => ErrorCode::TruncatedInput,
            DecodeError::UnknownGeometryKind { .. }
            | DecodeError::ConflictingTypeFlags { .. }
            | DecodeError::UnexpectedGeometryType { .. } => ErrorCode::MalformedType,
            DecodeError::UnexpectedMemberType { .. } => ErrorCode::UnexpectedMemberType,
            DecodeError::InvalidByteOrder { .. } => ErrorCode::InvalidByteOrder,
        }
    }
}

//! Data model types for WKB geometries.
//!
//! This module contains the decoded forms of the WKB framing:
//! - Byte order and geometry kinds
//! - Geometry type descriptors (kind plus dimensionality)
//! - Headers and normalized EWKB views

pub mod geometry;
pub mod wkb;

pub use geometry::{ByteOrder, GeometryKind, GeometryType, TypeDialect};
pub use wkb::{NormalizedWkb, WkbHeader};

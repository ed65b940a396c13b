//! Streaming decoding of Well-Known Binary (WKB) geometries.
//!
//! This crate reads just enough of a WKB buffer to answer questions about
//! it, without building a geometry object graph.
//!
//! # Overview
//!
//! - **Type queries**: decode the geometry type word under the ISO SQL/MM,
//!   legacy 2.5D and PostGIS EWKB conventions
//! - **Polygon area**: planar area of Polygon and MultiPolygon geometries,
//!   straight from the byte stream, holes subtracted
//! - **EWKB normalization**: rewrite PostGIS EWKB into canonical ISO WKB in
//!   place, extracting the SRID
//!
//! # Quick Start
//!
//! ```rust
//! use wkb_codec::{geometry_area, wkb_from_ewkb, ByteOrder, Writer};
//!
//! // EWKB polygon, SRID 4326, unit square
//! let mut writer = Writer::new(ByteOrder::LittleEndian);
//! writer.write_header(0x2000_0003);
//! writer.write_i32(4326);
//! writer.write_u32(1);
//! writer.write_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], 0);
//! let mut buf = writer.into_bytes();
//!
//! let normalized = wkb_from_ewkb(&mut buf).unwrap();
//! assert_eq!(normalized.srid, Some(4326));
//! assert_eq!(geometry_area(normalized.wkb).unwrap(), 1.0);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Byte order, geometry kinds and type descriptors
//! - [`codec`]: Cursor, header decoding, area and EWKB normalization
//! - [`error`]: Error types
//! - [`limits`]: Wire constants
//!
//! # Safety of untrusted input
//!
//! Every read is bounds checked. Declared ring, point and member counts are
//! checked against the bytes actually remaining before they are iterated, so
//! malformed input fails with [`DecodeError::UnexpectedEof`] instead of
//! reading out of bounds or looping on garbage counts.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    decode_header, geometry_area, get_geom_type, multipolygon_area, polygon_area, read_header,
    wkb_from_ewkb, Reader, Writer,
};
pub use error::{DecodeError, ErrorCode};
pub use limits::SRID_ABSENT;
pub use model::{ByteOrder, GeometryKind, GeometryType, NormalizedWkb, TypeDialect, WkbHeader};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

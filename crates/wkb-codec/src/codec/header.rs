//! Geometry header decoding.
//!
//! Every WKB geometry, including each member of a collection, starts with a
//! byte-order marker and a 4-byte type word. PostGIS EWKB may follow the
//! type word with a 4-byte SRID.

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::WKB_HEADER_SIZE;
use crate::model::{GeometryType, WkbHeader};

/// Reads the raw geometry type word of a WKB buffer.
///
/// Returns whether multi-byte values must be byte-swapped on this host, and
/// the type word (already swapped) without interpreting any dialect bits.
/// Fails if fewer than 5 bytes are available or the marker is not 0 or 1.
pub fn get_geom_type(wkb: &[u8]) -> Result<(bool, u32), DecodeError> {
    if wkb.len() < WKB_HEADER_SIZE {
        return Err(DecodeError::UnexpectedEof { context: "wkb_header" });
    }
    let mut reader = Reader::new(wkb);
    let order = reader.read_byte_order()?;
    let type_word = reader.read_u32(order, "geometry_type")?;
    Ok((order.needs_swap(), type_word))
}

/// Reads a geometry header, advancing the reader past it.
///
/// If the EWKB SRID flag is set, the SRID is consumed as well so the reader
/// is left at the start of the geometry body.
pub fn read_header(reader: &mut Reader<'_>) -> Result<WkbHeader, DecodeError> {
    let byte_order = reader.read_byte_order()?;
    let type_word = reader.read_u32(byte_order, "geometry_type")?;
    let geometry_type = GeometryType::from_wkb_type(type_word)?;
    let srid = if geometry_type.has_srid {
        Some(reader.read_i32(byte_order, "srid")?)
    } else {
        None
    };
    log::trace!(
        "decoded header {:?} (word {:#010x}, {:?}, srid {:?})",
        geometry_type.kind,
        type_word,
        byte_order,
        srid
    );
    Ok(WkbHeader {
        byte_order,
        type_word,
        geometry_type,
        srid,
    })
}

/// Decodes the header at the start of a WKB or EWKB buffer.
pub fn decode_header(wkb: &[u8]) -> Result<WkbHeader, DecodeError> {
    let mut reader = Reader::new(wkb);
    read_header(&mut reader)
}

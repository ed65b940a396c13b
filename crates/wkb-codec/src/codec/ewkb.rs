//! PostGIS Extended WKB to ISO WKB normalization.
//!
//! EWKB differs from ISO WKB only in the framing of the outermost header:
//! dimensionality is flagged with high bits of the type word, and an
//! optional SRID sits between the type word and the body. Normalization
//! rewrites that header in place inside the caller's buffer.

use crate::codec::primitives::{put_u32, Reader};
use crate::error::DecodeError;
use crate::limits::{EWKB_SRID_SIZE, WKB_HEADER_SIZE};
use crate::model::{GeometryType, NormalizedWkb};

/// Converts a PostGIS EWKB geometry into canonical ISO WKB, in place.
///
/// The buffer is owned by the caller and stays owned by the caller. On
/// success the returned view aliases it:
/// - canonical input is returned untouched with no SRID;
/// - EWKB without SRID gets its type word rewritten to the ISO code
///   (e.g. `0x80000001` becomes `1001`) and the view covers the whole buffer;
/// - EWKB with SRID has the SRID extracted, the byte-order marker moved
///   4 bytes forward and the ISO type word written where the SRID was. The
///   view then starts 4 bytes into the buffer and is 4 bytes shorter; the
///   4 leading bytes are zeroed.
///
/// The original byte order is preserved. On error the buffer may have been
/// left partly rewritten and must be discarded.
pub fn wkb_from_ewkb(buf: &mut [u8]) -> Result<NormalizedWkb<'_>, DecodeError> {
    if buf.len() < WKB_HEADER_SIZE {
        return Err(DecodeError::UnexpectedEof { context: "wkb_header" });
    }

    let mut reader = Reader::new(buf);
    let order = reader.read_byte_order()?;
    let type_word = reader.read_u32(order, "geometry_type")?;
    let geometry_type = GeometryType::from_wkb_type(type_word)?;

    if geometry_type.is_canonical() {
        return Ok(NormalizedWkb {
            wkb: buf,
            srid: None,
        });
    }

    let iso_code = geometry_type.iso_code();
    if !geometry_type.has_srid {
        log::debug!("rewriting EWKB type {:#010x} as {}", type_word, iso_code);
        put_u32(buf, 1, iso_code, order);
        return Ok(NormalizedWkb {
            wkb: buf,
            srid: None,
        });
    }

    let srid = reader.read_i32(order, "srid")?;
    log::debug!(
        "stripping SRID {} from EWKB type {:#010x}, rewriting as {}",
        srid,
        type_word,
        iso_code
    );
    buf[EWKB_SRID_SIZE] = buf[0];
    put_u32(buf, EWKB_SRID_SIZE + 1, iso_code, order);
    buf[..EWKB_SRID_SIZE].fill(0);

    Ok(NormalizedWkb {
        wkb: &buf[EWKB_SRID_SIZE..],
        srid: Some(srid),
    })
}

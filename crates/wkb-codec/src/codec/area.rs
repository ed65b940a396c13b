//! Planar area of polygonal geometries, computed straight from WKB bytes.
//!
//! Nothing is materialized: rings are consumed vertex by vertex into a
//! running shoelace sum. The exterior ring adds its area, every following
//! ring is a hole and subtracts its area. Each ring's magnitude is taken
//! independently, so winding order does not matter.

use crate::codec::header::{decode_header, read_header};
use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::{COORD_SIZE, COUNT_SIZE, MIN_RING_POINTS, WKB_HEADER_SIZE};
use crate::model::{ByteOrder, GeometryKind, WkbHeader};

/// Smallest possible encoded polygon: header plus an empty ring count.
const MIN_POLYGON_SIZE: usize = WKB_HEADER_SIZE + COUNT_SIZE;

/// Computes the area of the Polygon at the reader's position.
///
/// Accepts any dimensionality under any type dialect; Z and M ordinates are
/// skipped. On success the reader is positioned right after the polygon, so
/// this can be used as one step of parsing an enclosing geometry. After an
/// error the reader must not be used further.
pub fn polygon_area(reader: &mut Reader<'_>) -> Result<f64, DecodeError> {
    let header = read_header(reader)?;
    expect_kind(&header, GeometryKind::Polygon)?;
    polygon_body_area(reader, &header)
}

/// Computes the summed area of the MultiPolygon at the reader's position.
///
/// Every member carries its own header (and may use its own byte order).
/// A member that is not a Polygon fails with
/// [`DecodeError::UnexpectedMemberType`]. The first error stops decoding.
pub fn multipolygon_area(reader: &mut Reader<'_>) -> Result<f64, DecodeError> {
    let header = read_header(reader)?;
    expect_kind(&header, GeometryKind::MultiPolygon)?;

    let member_count = reader.read_u32(header.byte_order, "member_count")?;
    if reader.remaining_len() / MIN_POLYGON_SIZE < member_count as usize {
        return Err(DecodeError::UnexpectedEof { context: "members" });
    }

    let mut area = 0.0;
    for index in 0..member_count {
        let member = read_header(reader)?;
        let found = member.geometry_type.kind;
        if found != GeometryKind::Polygon {
            return Err(DecodeError::UnexpectedMemberType { index, found });
        }
        area += polygon_body_area(reader, &member)?;
    }
    Ok(area)
}

/// Computes the area of a whole Polygon or MultiPolygon buffer.
pub fn geometry_area(wkb: &[u8]) -> Result<f64, DecodeError> {
    let header = decode_header(wkb)?;
    let mut reader = Reader::new(wkb);
    match header.geometry_type.kind {
        GeometryKind::Polygon => polygon_area(&mut reader),
        GeometryKind::MultiPolygon => multipolygon_area(&mut reader),
        found => Err(DecodeError::UnexpectedGeometryType {
            expected: GeometryKind::Polygon,
            found,
        }),
    }
}

fn expect_kind(header: &WkbHeader, expected: GeometryKind) -> Result<(), DecodeError> {
    let found = header.geometry_type.kind;
    if found != expected {
        return Err(DecodeError::UnexpectedGeometryType { expected, found });
    }
    Ok(())
}

/// Reads the ring count and rings that follow a Polygon header.
fn polygon_body_area(reader: &mut Reader<'_>, header: &WkbHeader) -> Result<f64, DecodeError> {
    let order = header.byte_order;
    let dims = header.geometry_type.coordinate_dimension();

    let ring_count = reader.read_u32(order, "ring_count")?;
    if reader.remaining_len() / COUNT_SIZE < ring_count as usize {
        return Err(DecodeError::UnexpectedEof { context: "rings" });
    }

    let mut area = 0.0;
    for index in 0..ring_count {
        let ring = ring_area(reader, order, dims)?;
        if index == 0 {
            area = ring;
        } else {
            area -= ring;
        }
    }
    Ok(area)
}

/// Returns the unsigned area enclosed by one ring.
///
/// Vertices are taken relative to the first one, which leaves the shoelace
/// sum unchanged for a closed ring and keeps large coordinates precise.
/// A ring that does not repeat its first point is treated as closed.
fn ring_area(reader: &mut Reader<'_>, order: ByteOrder, dims: usize) -> Result<f64, DecodeError> {
    let point_count = reader.read_u32(order, "point_count")?;
    let stride = dims * COORD_SIZE;
    if reader.remaining_len() / stride < point_count as usize {
        return Err(DecodeError::UnexpectedEof { context: "ring_points" });
    }

    if point_count < MIN_RING_POINTS {
        log::debug!("degenerate ring with {} points contributes no area", point_count);
        reader.skip(point_count as usize * stride, "ring_points")?;
        return Ok(0.0);
    }

    let extra = stride - 2 * COORD_SIZE;
    let (x0, y0) = read_xy(reader, order, extra)?;
    let (mut prev_x, mut prev_y) = (0.0, 0.0);
    let mut sum = 0.0;
    for _ in 1..point_count {
        let (x, y) = read_xy(reader, order, extra)?;
        let (x, y) = (x - x0, y - y0);
        sum += prev_x * y - x * prev_y;
        prev_x = x;
        prev_y = y;
    }
    Ok(0.5 * sum.abs())
}

#[inline]
fn read_xy(reader: &mut Reader<'_>, order: ByteOrder, extra: usize) -> Result<(f64, f64), DecodeError> {
    let x = reader.read_f64(order, "x")?;
    let y = reader.read_f64(order, "y")?;
    if extra > 0 {
        reader.skip(extra, "zm")?;
    }
    Ok((x, y))
}

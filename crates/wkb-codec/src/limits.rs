//! Wire constants for WKB and PostGIS EWKB framing.

/// Byte-order marker (1 byte) plus geometry type word (4 bytes).
pub const WKB_HEADER_SIZE: usize = 5;

/// Size of the SRID that follows the type word when [`EWKB_SRID_FLAG`] is set.
pub const EWKB_SRID_SIZE: usize = 4;

/// Size of a `u32` count field (rings, points, members).
pub const COUNT_SIZE: usize = 4;

/// Size of a single encoded coordinate value.
pub const COORD_SIZE: usize = 8;

/// EWKB (and legacy GEOS/OGR 2.5D) Z flag.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;

/// EWKB M flag.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

/// EWKB SRID-present flag.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// All EWKB high bits.
pub const EWKB_FLAGS_MASK: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// ISO SQL/MM offset for geometries with Z.
pub const ISO_Z_OFFSET: u32 = 1000;

/// ISO SQL/MM offset for geometries with M.
pub const ISO_M_OFFSET: u32 = 2000;

/// A ring needs four tuples (first == last) to enclose any area.
pub const MIN_RING_POINTS: u32 = 4;

/// Sentinel reported for "no SRID" at boundaries that cannot carry an `Option`.
pub const SRID_ABSENT: i32 = i32::MIN;

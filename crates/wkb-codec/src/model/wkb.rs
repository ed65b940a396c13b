//! Decoded WKB headers and normalized EWKB views.

use crate::limits::SRID_ABSENT;
use crate::model::{ByteOrder, GeometryType};

/// The decoded header of one (sub-)geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbHeader {
    pub byte_order: ByteOrder,
    /// Type word as read, already corrected for byte order.
    pub type_word: u32,
    pub geometry_type: GeometryType,
    /// SRID that followed the type word, if the EWKB SRID flag was set.
    pub srid: Option<i32>,
}

impl WkbHeader {
    /// Returns true if multi-byte values of this geometry must be swapped on the host.
    pub fn needs_swap(&self) -> bool {
        self.byte_order.needs_swap()
    }
}

/// Canonical WKB produced by [`wkb_from_ewkb`](crate::codec::wkb_from_ewkb).
///
/// `wkb` aliases the caller's buffer: it is either the whole buffer or starts
/// 4 bytes into it. It never owns memory and lives only as long as that buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWkb<'a> {
    pub wkb: &'a [u8],
    pub srid: Option<i32>,
}

impl<'a> NormalizedWkb<'a> {
    /// Returns the size in bytes of the canonical WKB.
    pub fn len(&self) -> usize {
        self.wkb.len()
    }

    /// Returns true if the view is empty (never the case for a successful normalization).
    pub fn is_empty(&self) -> bool {
        self.wkb.is_empty()
    }

    /// Returns the SRID, or [`SRID_ABSENT`] if the input carried none.
    pub fn srid_or_sentinel(&self) -> i32 {
        self.srid.unwrap_or(SRID_ABSENT)
    }

    /// Returns the canonical WKB bytes.
    pub fn into_inner(self) -> &'a [u8] {
        self.wkb
    }
}

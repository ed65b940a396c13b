//! Geometry type descriptors decoded from the WKB type word.
//!
//! Three dialects share the same 4-byte word:
//! - ISO SQL/MM: `kind + 1000` (Z), `+ 2000` (M), `+ 3000` (ZM)
//! - legacy GEOS/OGR 2.5D: `kind | 0x80000000` for Z
//! - PostGIS EWKB: `0x80000000` (Z), `0x40000000` (M), `0x20000000` (SRID)
//!
//! [`GeometryType::from_wkb_type`] is the only place that looks at those bits.

use crate::error::DecodeError;
use crate::limits::{
    EWKB_FLAGS_MASK, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG, ISO_M_OFFSET, ISO_Z_OFFSET,
};

/// Byte order of a WKB geometry (first byte of every header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteOrder {
    /// XDR, marker 0
    BigEndian = 0,
    /// NDR, marker 1
    LittleEndian = 1,
}

impl ByteOrder {
    /// Creates a ByteOrder from its wire marker.
    pub fn from_u8(v: u8) -> Option<ByteOrder> {
        match v {
            0 => Some(ByteOrder::BigEndian),
            1 => Some(ByteOrder::LittleEndian),
            _ => None,
        }
    }

    /// Byte order of the host.
    pub const fn native() -> ByteOrder {
        if cfg!(target_endian = "little") {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Returns true if values in this order must be swapped on the host.
    pub fn needs_swap(self) -> bool {
        self != ByteOrder::native()
    }
}

/// Base geometry kinds (ISO SQL/MM codes 1-17).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    CircularString = 8,
    CompoundCurve = 9,
    CurvePolygon = 10,
    MultiCurve = 11,
    MultiSurface = 12,
    /// Abstract ISO Curve
    Curve = 13,
    /// Abstract ISO Surface
    Surface = 14,
    PolyhedralSurface = 15,
    Tin = 16,
    Triangle = 17,
}

impl GeometryKind {
    /// Creates a GeometryKind from its base code.
    pub fn from_u32(v: u32) -> Option<GeometryKind> {
        match v {
            1 => Some(GeometryKind::Point),
            2 => Some(GeometryKind::LineString),
            3 => Some(GeometryKind::Polygon),
            4 => Some(GeometryKind::MultiPoint),
            5 => Some(GeometryKind::MultiLineString),
            6 => Some(GeometryKind::MultiPolygon),
            7 => Some(GeometryKind::GeometryCollection),
            8 => Some(GeometryKind::CircularString),
            9 => Some(GeometryKind::CompoundCurve),
            10 => Some(GeometryKind::CurvePolygon),
            11 => Some(GeometryKind::MultiCurve),
            12 => Some(GeometryKind::MultiSurface),
            13 => Some(GeometryKind::Curve),
            14 => Some(GeometryKind::Surface),
            15 => Some(GeometryKind::PolyhedralSurface),
            16 => Some(GeometryKind::Tin),
            17 => Some(GeometryKind::Triangle),
            _ => None,
        }
    }

    /// Returns the base code of this kind.
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Which type-word convention a geometry type was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDialect {
    /// Plain 2D code or ISO SQL/MM dimension offset.
    Iso,
    /// High-bit flags (PostGIS EWKB, or the legacy 2.5D Z bit).
    Extended,
}

/// A decoded geometry type: base kind plus dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryType {
    pub kind: GeometryKind,
    pub has_z: bool,
    pub has_m: bool,
    /// Only ever set for [`TypeDialect::Extended`].
    pub has_srid: bool,
    pub dialect: TypeDialect,
}

impl GeometryType {
    /// Creates a plain ISO geometry type.
    pub fn new(kind: GeometryKind, has_z: bool, has_m: bool) -> Self {
        Self {
            kind,
            has_z,
            has_m,
            has_srid: false,
            dialect: TypeDialect::Iso,
        }
    }

    /// Decodes a (byte-order corrected) WKB type word under any dialect.
    ///
    /// Fails with [`DecodeError::UnknownGeometryKind`] if the base code is
    /// outside 1-17 or the dimension offset is not one of 0/1000/2000/3000,
    /// and with [`DecodeError::ConflictingTypeFlags`] if an ISO offset is
    /// combined with any EWKB flag bit.
    pub fn from_wkb_type(type_word: u32) -> Result<GeometryType, DecodeError> {
        let flags = type_word & EWKB_FLAGS_MASK;
        let code = type_word & !EWKB_FLAGS_MASK;

        let (iso_z, iso_m) = match code / ISO_Z_OFFSET {
            0 => (false, false),
            1 => (true, false),
            2 => (false, true),
            3 => (true, true),
            _ => return Err(DecodeError::UnknownGeometryKind { type_word }),
        };
        let kind = GeometryKind::from_u32(code % ISO_Z_OFFSET)
            .ok_or(DecodeError::UnknownGeometryKind { type_word })?;

        if flags == 0 {
            return Ok(GeometryType::new(kind, iso_z, iso_m));
        }
        if iso_z || iso_m {
            return Err(DecodeError::ConflictingTypeFlags { type_word });
        }

        Ok(GeometryType {
            kind,
            has_z: flags & EWKB_Z_FLAG != 0,
            has_m: flags & EWKB_M_FLAG != 0,
            has_srid: flags & EWKB_SRID_FLAG != 0,
            dialect: TypeDialect::Extended,
        })
    }

    /// Returns the canonical ISO SQL/MM type code.
    pub fn iso_code(&self) -> u32 {
        let mut code = self.kind.code();
        if self.has_z {
            code += ISO_Z_OFFSET;
        }
        if self.has_m {
            code += ISO_M_OFFSET;
        }
        code
    }

    /// Returns the PostGIS EWKB type word (with the SRID flag if `has_srid`).
    pub fn ewkb_code(&self) -> u32 {
        let mut code = self.kind.code();
        if self.has_z {
            code |= EWKB_Z_FLAG;
        }
        if self.has_m {
            code |= EWKB_M_FLAG;
        }
        if self.has_srid {
            code |= EWKB_SRID_FLAG;
        }
        code
    }

    /// Returns true if this type was encoded as canonical ISO WKB.
    pub fn is_canonical(&self) -> bool {
        self.dialect == TypeDialect::Iso
    }

    /// Number of `f64` values per vertex (2, 3 or 4).
    pub fn coordinate_dimension(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }

    /// Returns the same type as it reads after normalization to ISO WKB.
    pub fn to_canonical(&self) -> GeometryType {
        GeometryType::new(self.kind, self.has_z, self.has_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_codes() {
        let t = GeometryType::from_wkb_type(3).unwrap();
        assert_eq!(t, GeometryType::new(GeometryKind::Polygon, false, false));

        let t = GeometryType::from_wkb_type(1003).unwrap();
        assert!(t.has_z && !t.has_m);
        assert_eq!(t.coordinate_dimension(), 3);

        let t = GeometryType::from_wkb_type(2006).unwrap();
        assert_eq!(t.kind, GeometryKind::MultiPolygon);
        assert!(!t.has_z && t.has_m);

        let t = GeometryType::from_wkb_type(3017).unwrap();
        assert_eq!(t.kind, GeometryKind::Triangle);
        assert_eq!(t.coordinate_dimension(), 4);
        assert!(t.is_canonical());
    }

    #[test]
    fn test_legacy_z_bit() {
        let t = GeometryType::from_wkb_type(0x8000_0003).unwrap();
        assert_eq!(t.kind, GeometryKind::Polygon);
        assert!(t.has_z && !t.has_m && !t.has_srid);
        assert_eq!(t.dialect, TypeDialect::Extended);
        assert_eq!(t.iso_code(), 1003);
    }

    #[test]
    fn test_ewkb_flags() {
        let t = GeometryType::from_wkb_type(0xE000_0001).unwrap();
        assert_eq!(t.kind, GeometryKind::Point);
        assert!(t.has_z && t.has_m && t.has_srid);
        assert_eq!(t.iso_code(), 3001);
        assert_eq!(t.ewkb_code(), 0xE000_0001);

        let t = GeometryType::from_wkb_type(0x2000_0006).unwrap();
        assert!(t.has_srid && !t.has_z && !t.has_m);
        assert_eq!(t.iso_code(), 6);
        assert_eq!(t.to_canonical(), GeometryType::new(GeometryKind::MultiPolygon, false, false));
    }

    #[test]
    fn test_conflicting_flags() {
        let result = GeometryType::from_wkb_type(0x8000_0000 | 1003);
        assert!(matches!(result, Err(DecodeError::ConflictingTypeFlags { .. })));

        let result = GeometryType::from_wkb_type(0x2000_0000 | 2001);
        assert!(matches!(result, Err(DecodeError::ConflictingTypeFlags { .. })));
    }

    #[test]
    fn test_unknown_kind() {
        for word in [0u32, 18, 999, 1000, 1018, 4001, 0x1000_0003, 0x8000_0000] {
            let result = GeometryType::from_wkb_type(word);
            assert!(
                matches!(result, Err(DecodeError::UnknownGeometryKind { .. })),
                "failed for {:#x}",
                word
            );
        }
    }

    #[test]
    fn test_byte_order() {
        assert_eq!(ByteOrder::from_u8(0), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_u8(1), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::from_u8(2), None);
        assert!(!ByteOrder::native().needs_swap());
        if cfg!(target_endian = "little") {
            assert!(ByteOrder::BigEndian.needs_swap());
        }
    }
}

//! Binary decoding for WKB and PostGIS EWKB.
//!
//! All functions work directly on caller-owned byte slices and never allocate.

pub mod area;
pub mod ewkb;
pub mod header;
pub mod primitives;

pub use area::{geometry_area, multipolygon_area, polygon_area};
pub use ewkb::wkb_from_ewkb;
pub use header::{decode_header, get_geom_type, read_header};
pub use primitives::{Reader, Writer};

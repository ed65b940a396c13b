//! Simple inspector for hex-encoded WKB/EWKB geometries.
//!
//! Reads one geometry per line (as printed by PostGIS `ST_AsEWKB` or
//! `ST_AsBinary` in hex), normalizes it and prints its type and area.

use std::fs;

use wkb_codec::{decode_header, geometry_area, wkb_from_ewkb, GeometryKind, SRID_ABSENT};

fn parse_hex(line: &str) -> Option<Vec<u8>> {
    let line = line.trim().trim_start_matches("\\x");
    if !line.is_ascii() || line.len() % 2 != 0 {
        return None;
    }
    (0..line.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&line[i..i + 2], 16).ok())
        .collect()
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "geometries.hex".to_string());

    println!("Reading: {}", path);
    let text = fs::read_to_string(&path).expect("Failed to read file");

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(mut buf) = parse_hex(line) else {
            println!("{:>5}: not hex", lineno + 1);
            continue;
        };
        let ewkb_len = buf.len();

        let normalized = match wkb_from_ewkb(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                println!("{:>5}: {}", lineno + 1, e);
                continue;
            }
        };
        let header = decode_header(normalized.wkb).expect("normalized header decodes");
        let gt = header.geometry_type;
        let srid = match normalized.srid_or_sentinel() {
            SRID_ABSENT => "-".to_string(),
            srid => srid.to_string(),
        };

        print!(
            "{:>5}: {:?}{}{} code={} srid={} bytes={}->{}",
            lineno + 1,
            gt.kind,
            if gt.has_z { " Z" } else { "" },
            if gt.has_m { " M" } else { "" },
            gt.iso_code(),
            srid,
            ewkb_len,
            normalized.len()
        );
        if matches!(gt.kind, GeometryKind::Polygon | GeometryKind::MultiPolygon) {
            match geometry_area(normalized.wkb) {
                Ok(area) => print!(" area={:.6}", area),
                Err(e) => print!(" area error: {}", e),
            }
        }
        println!();
    }
}

//! Benchmark for WKB area computation and EWKB normalization.
//!
//! Loads multipolygon coordinates from a GeoJSON-like JSON file (or
//! synthesizes regular polygons if the file is missing), frames them as
//! PostGIS EWKB, then times normalization, header decoding and area.

use std::f64::consts::TAU;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;
use wkb_codec::{ByteOrder, Writer, decode_header, geometry_area, wkb_from_ewkb};

// =============================================================================
// JSON DATA STRUCTURES
// =============================================================================

/// One feature: `polygons` follows GeoJSON MultiPolygon coordinate nesting.
#[derive(Debug, Deserialize)]
struct Feature {
    id: u32,
    srid: Option<i32>,
    polygons: Vec<Vec<Vec<[f64; 2]>>>,
}

// =============================================================================
// INPUT
// =============================================================================

/// Regular n-gon with a concentric hole of half the radius.
fn synthetic_feature(id: u32) -> Feature {
    let sides = 4 + (id % 60) as usize;
    let cx = (id % 1000) as f64 * 10.0;
    let cy = (id / 1000) as f64 * 10.0;
    let ring = |radius: f64| -> Vec<[f64; 2]> {
        let mut pts: Vec<[f64; 2]> = (0..sides)
            .map(|i| {
                let a = TAU * i as f64 / sides as f64;
                [cx + radius * a.cos(), cy + radius * a.sin()]
            })
            .collect();
        pts.push(pts[0]);
        pts
    };
    Feature {
        id,
        srid: if id % 2 == 0 { Some(4326) } else { None },
        polygons: vec![vec![ring(4.0), ring(2.0)]],
    }
}

fn load_features(path: &str) -> Vec<Feature> {
    if !Path::new(path).exists() {
        println!("{} not found, synthesizing 100000 features", path);
        return (0..100_000).map(synthetic_feature).collect();
    }
    let json_data = fs::read_to_string(path).expect("Failed to read features file");
    serde_json::from_str(&json_data).expect("Failed to parse JSON")
}

/// Frames a feature as EWKB MultiPolygon, alternating byte order by id.
fn encode_feature(feature: &Feature) -> Vec<u8> {
    let order = if feature.id % 3 == 0 {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };
    let mut writer = Writer::new(order);
    match feature.srid {
        Some(srid) => {
            writer.write_header(0x2000_0006);
            writer.write_i32(srid);
        }
        None => writer.write_header(6),
    }
    writer.write_u32(feature.polygons.len() as u32);
    for polygon in &feature.polygons {
        writer.write_header(3);
        writer.write_u32(polygon.len() as u32);
        for ring in polygon {
            let pts: Vec<(f64, f64)> = ring.iter().map(|p| (p[0], p[1])).collect();
            writer.write_ring(&pts, 0);
        }
    }
    writer.into_bytes()
}

fn throughput(bytes: usize, elapsed: Duration) -> f64 {
    (bytes as f64 / 1_000_000.0) / elapsed.as_secs_f64()
}

fn main() {
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../../out/polygons.json".to_string());

    println!("Loading features from: {}", data_path);

    let parse_start = Instant::now();
    let features = load_features(&data_path);
    let parse_time = parse_start.elapsed();
    println!("Loaded {} features in {:?}", features.len(), parse_time);

    let encode_start = Instant::now();
    let mut buffers: Vec<Vec<u8>> = features.iter().map(encode_feature).collect();
    let encode_time = encode_start.elapsed();
    let total_bytes: usize = buffers.iter().map(Vec::len).sum();
    println!("Framed {} bytes of EWKB in {:?}", total_bytes, encode_time);

    // Normalization rewrites in place; keep each view offset for the next passes
    let normalize_start = Instant::now();
    let mut offsets = Vec::with_capacity(buffers.len());
    let mut srid_count = 0;
    for buf in &mut buffers {
        let len = buf.len();
        let normalized = wkb_from_ewkb(buf).expect("Failed to normalize");
        if normalized.srid.is_some() {
            srid_count += 1;
        }
        offsets.push(len - normalized.len());
    }
    let normalize_time = normalize_start.elapsed();
    println!(
        "\nNormalized in {:?} ({} with SRID)",
        normalize_time, srid_count
    );
    println!("  Throughput: {:.2} MB/s", throughput(total_bytes, normalize_time));

    let header_start = Instant::now();
    let mut with_z = 0;
    for (buf, &offset) in buffers.iter().zip(&offsets) {
        let header = decode_header(&buf[offset..]).expect("Failed to decode header");
        if header.geometry_type.has_z {
            with_z += 1;
        }
    }
    let header_time = header_start.elapsed();
    println!("\nDecoded {} headers in {:?} ({} with Z)", buffers.len(), header_time, with_z);

    let area_start = Instant::now();
    let mut total_area = 0.0;
    for (buf, &offset) in buffers.iter().zip(&offsets) {
        total_area += geometry_area(&buf[offset..]).expect("Failed to compute area");
    }
    let area_time = area_start.elapsed();
    println!("\nComputed total area {:.3} in {:?}", total_area, area_time);
    println!("  Throughput: {:.2} MB/s", throughput(total_bytes, area_time));
}

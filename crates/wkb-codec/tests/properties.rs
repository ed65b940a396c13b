use proptest::prelude::*;

use wkb_codec::{
    decode_header, geometry_area, multipolygon_area, polygon_area, wkb_from_ewkb, ByteOrder,
    DecodeError, GeometryKind, Reader, Writer,
};

type Ring = Vec<(f64, f64)>;

fn arb_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

/// A closed ring of 3-12 distinct-ish vertices plus the repeated first vertex.
fn arb_ring() -> impl Strategy<Value = Ring> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 3..12).prop_map(|mut pts| {
        pts.push(pts[0]);
        pts
    })
}

fn arb_polygon() -> impl Strategy<Value = Vec<Ring>> {
    prop::collection::vec(arb_ring(), 0..4)
}

fn shoelace(ring: &[(f64, f64)]) -> f64 {
    let sum: f64 = ring.windows(2).map(|w| w[0].0 * w[1].1 - w[1].0 * w[0].1).sum();
    0.5 * sum.abs()
}

fn write_polygon(writer: &mut Writer, rings: &[Ring]) {
    writer.write_header(3);
    writer.write_u32(rings.len() as u32);
    for ring in rings {
        writer.write_ring(ring, 0);
    }
}

fn polygon_wkb(order: ByteOrder, rings: &[Ring]) -> Vec<u8> {
    let mut writer = Writer::new(order);
    write_polygon(&mut writer, rings);
    writer.into_bytes()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn polygon_area_matches_shoelace(order in arb_order(), rings in arb_polygon()) {
        let wkb = polygon_wkb(order, &rings);
        let expected = match rings.split_first() {
            Some((exterior, holes)) => {
                shoelace(exterior) - holes.iter().map(|r| shoelace(r)).sum::<f64>()
            }
            None => 0.0,
        };

        let mut reader = Reader::new(&wkb);
        let area = polygon_area(&mut reader).unwrap();
        prop_assert!(approx_eq(area, expected), "{} != {}", area, expected);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn polygon_area_ignores_winding(order in arb_order(), rings in arb_polygon(), flips in any::<u8>()) {
        let flipped: Vec<Ring> = rings
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                let mut ring = ring.clone();
                if flips & (1 << i) != 0 {
                    ring.reverse();
                }
                ring
            })
            .collect();

        let a = geometry_area(&polygon_wkb(order, &rings)).unwrap();
        let b = geometry_area(&polygon_wkb(order, &flipped)).unwrap();
        prop_assert!(approx_eq(a, b), "{} != {}", a, b);
    }

    #[test]
    fn multipolygon_area_is_sum_of_members(
        members in prop::collection::vec((arb_order(), arb_polygon()), 0..5),
    ) {
        let mut writer = Writer::new(ByteOrder::LittleEndian);
        writer.write_header(6);
        writer.write_u32(members.len() as u32);
        let mut expected = 0.0;
        for (order, rings) in &members {
            writer.set_byte_order(*order);
            write_polygon(&mut writer, rings);
            expected += geometry_area(&polygon_wkb(*order, rings)).unwrap();
        }

        let mut reader = Reader::new(writer.as_bytes());
        let area = multipolygon_area(&mut reader).unwrap();
        prop_assert!(approx_eq(area, expected), "{} != {}", area, expected);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn canonical_wkb_is_untouched(
        order in arb_order(),
        kind in 1u32..=17,
        offset in prop_oneof![Just(0u32), Just(1000), Just(2000), Just(3000)],
        body in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut writer = Writer::new(order);
        writer.write_header(kind + offset);
        writer.write_bytes(&body);
        let original = writer.into_bytes();

        let mut buf = original.clone();
        let normalized = wkb_from_ewkb(&mut buf).unwrap();
        prop_assert_eq!(normalized.wkb, &original[..]);
        prop_assert_eq!(normalized.srid, None);
    }

    #[test]
    fn ewkb_normalization(
        order in arb_order(),
        kind in 1u32..=17,
        has_z in any::<bool>(),
        has_m in any::<bool>(),
        srid in prop::option::of(any::<i32>()),
        body in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut type_word = kind;
        if has_z {
            type_word |= 0x8000_0000;
        }
        if has_m {
            type_word |= 0x4000_0000;
        }
        if srid.is_some() {
            type_word |= 0x2000_0000;
        }
        let mut writer = Writer::new(order);
        writer.write_header(type_word);
        if let Some(srid) = srid {
            writer.write_i32(srid);
        }
        writer.write_bytes(&body);
        let mut buf = writer.into_bytes();
        let original_len = buf.len();

        let normalized = wkb_from_ewkb(&mut buf).unwrap();
        prop_assert_eq!(normalized.srid, srid);
        let expected_len = if srid.is_some() { original_len - 4 } else { original_len };
        prop_assert_eq!(normalized.len(), expected_len);
        prop_assert_eq!(&normalized.wkb[5..], &body[..]);

        let header = decode_header(normalized.wkb).unwrap();
        prop_assert_eq!(header.byte_order, order);
        prop_assert_eq!(header.geometry_type.kind, GeometryKind::from_u32(kind).unwrap());
        prop_assert_eq!(header.geometry_type.has_z, has_z);
        prop_assert_eq!(header.geometry_type.has_m, has_m);
        prop_assert!(header.geometry_type.is_canonical());

        // A second pass is a no-op.
        let first = normalized.wkb.to_vec();
        let mut again = first.clone();
        let second = wkb_from_ewkb(&mut again).unwrap();
        prop_assert_eq!(second.wkb, &first[..]);
        prop_assert_eq!(second.srid, None);
    }

    #[test]
    fn truncated_polygon_reports_eof(order in arb_order(), rings in arb_polygon(), cut in any::<prop::sample::Index>()) {
        let wkb = polygon_wkb(order, &rings);
        let len = cut.index(wkb.len());
        let result = polygon_area(&mut Reader::new(&wkb[..len]));
        let is_eof = matches!(result, Err(DecodeError::UnexpectedEof { .. }));
        prop_assert!(is_eof);
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = geometry_area(&data);
        let _ = multipolygon_area(&mut Reader::new(&data));
        let mut buf = data.clone();
        let _ = wkb_from_ewkb(&mut buf);
    }
}

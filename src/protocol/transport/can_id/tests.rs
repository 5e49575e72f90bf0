//! Unit tests for the `MessageId` accessors, free codec functions and builder.
use super::*;

//==================================================================================ENCODE_DECODE
#[test]
/// Reference value: miscellaneous device, team-use manufacturer, API 1, device 1.
fn test_encode_reference_value() {
    assert_eq!(encode(10, 8, 1, 1), 0x0A08_0041);
    assert_eq!(MessageId::new(10, 8, 1, 1).raw(), 0x0A08_0041);
}

#[test]
/// All-zero fields produce a zero identifier.
fn test_encode_zero() {
    assert_eq!(encode(0, 0, 0, 0), 0);
    assert_eq!(MessageId::builder().build().raw(), 0);
}

#[test]
/// Decompose the universal heartbeat identifier.
fn test_decode_heartbeat_id() {
    let fields = decode(0x0101_1840);
    assert_eq!(
        fields,
        IdFields {
            device_type: 1,
            manufacturer: 1,
            api: 0x61,
            device_number: 0,
        }
    );
    assert_eq!(fields.encode(), 0x0101_1840);
}

#[test]
/// Field maxima fill exactly the 29-bit space.
fn test_field_maxima_cover_29_bits() {
    let id = encode(0x1F, 0xFF, 0x3FF, 0x3F);
    assert_eq!(id, 0x1FFF_FFFF);
    assert_eq!(id, MESSAGE_ID_MASK);
}

#[test]
/// Field ranges never overlap.
fn test_fields_are_disjoint() {
    let masks = [
        DEVICE_TYPE_MASK << DEVICE_TYPE_LSB,
        MANUFACTURER_MASK << MANUFACTURER_LSB,
        API_MASK << API_LSB,
        DEVICE_NUMBER_MASK << DEVICE_NUMBER_LSB,
    ];
    for (i, a) in masks.iter().enumerate() {
        for b in &masks[i + 1..] {
            assert_eq!(a & b, 0);
        }
    }
}

#[test]
/// decode(encode(f)) == f on a sweep of every field's boundary values.
fn test_round_trip_boundaries() {
    for device_type in [0u8, 1, 0x10, 0x1F] {
        for manufacturer in [0u8, 1, 0x80, 0xFF] {
            for api in [0u16, 1, 0x200, 0x3FF] {
                for device_number in [0u8, 1, 0x20, 0x3F] {
                    let fields = IdFields {
                        device_type,
                        manufacturer,
                        api,
                        device_number,
                    };
                    assert_eq!(decode(fields.encode()), fields);
                }
            }
        }
    }
}

#[test]
/// Oversize inputs keep their low-order bits only.
fn test_encode_truncates_oversize_fields() {
    let id = MessageId::new(0xFF, 0x00, 0xFFFF, 0xFF);
    assert_eq!(id.device_type(), 0x1F);
    assert_eq!(id.api(), 0x3FF);
    assert_eq!(id.device_number(), 0x3F);
    assert_eq!(id.manufacturer(), 0);
    assert_eq!(MessageId::new(0x2A, 0, 0, 0).device_type(), 0x0A);
}

//==================================================================================MESSAGE_ID
#[test]
/// `from_raw` keeps bits above the 29-bit range untouched.
fn test_from_raw_is_pass_through() {
    let id = MessageId::from_raw(0xE101_1840);
    assert_eq!(id.raw(), 0xE101_1840);
    assert_eq!(id.device_type(), 1);
    assert_eq!(u32::from(id), 0xE101_1840);
}

#[test]
/// Replacing one field leaves the three others intact.
fn test_with_field_replaces_only_that_field() {
    let id = MessageId::new(10, 8, 1, 1);
    let moved = id.with_device_number(0x3F);
    assert_eq!(moved.device_number(), 0x3F);
    assert_eq!(moved.device_type(), 10);
    assert_eq!(moved.manufacturer(), 8);
    assert_eq!(moved.api(), 1);

    let moved = id.with_api(0x2AA).with_manufacturer(0x55).with_device_type(2);
    assert_eq!(
        moved.fields(),
        IdFields {
            device_type: 2,
            manufacturer: 0x55,
            api: 0x2AA,
            device_number: 1,
        }
    );
}

#[test]
/// Lookup conversions for assigned and unassigned codes.
fn test_lookup_kinds() {
    let id = MessageId::new(10, 8, 1, 1);
    assert_eq!(id.device_type_kind(), Some(DeviceType::Miscellaneous));
    assert_eq!(id.manufacturer_kind(), Some(Manufacturer::TeamUse));

    let unknown = MessageId::new(20, 200, 0, 0);
    assert_eq!(unknown.device_type_kind(), None);
    assert_eq!(unknown.manufacturer_kind(), None);
}

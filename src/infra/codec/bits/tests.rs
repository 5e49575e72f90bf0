//! Edge cases for the single-byte and straddling bit-field helpers.
use super::*;

//==================================================================================EXTRACT
#[test]
/// Extract an MSB-aligned 5-bit field.
fn test_extract_single_high_bits() {
    let data = [0b1011_0110];
    assert_eq!(extract_single(&data, 0, 3, 0x1F), 0b10110);
}

#[test]
/// Extract a single flag in the middle of a byte.
fn test_extract_single_flag() {
    let data = [0x00, 0b0001_0000];
    assert_eq!(extract_single(&data, 1, 4, 0x01), 1);
    assert_eq!(extract_single(&data, 1, 3, 0x01), 0);
}

#[test]
/// Merge a 3-bit high part with a 3-bit low part from the next byte.
fn test_extract_pair_straddling() {
    // [0]: -----101  [1]: 011-----  -> 0b101_011
    let data = [0b0000_0101, 0b0110_0000];
    assert_eq!(extract_pair(&data, 0, 0, 0x07, 1, 5, 0x07, 3), 0b101011);
}

#[test]
/// Ten-bit value: two high bits plus a full low byte.
fn test_extract_pair_full_low_byte() {
    let data = [0b0000_0010, 0xA5];
    assert_eq!(extract_pair(&data, 0, 0, 0x03, 1, 0, 0xFF, 8), 0x2A5);
}

//==================================================================================INSERT
#[test]
/// Inserting must leave every bit outside the field untouched.
fn test_insert_single_preserves_neighbours() {
    let mut data = [0xFF];
    insert_single(&mut data, 0, 0, 2, 0x07);
    assert_eq!(data, [0b1110_0011]);

    let mut data = [0x00];
    insert_single(&mut data, 0x07, 0, 2, 0x07);
    assert_eq!(data, [0b0001_1100]);
}

#[test]
/// Values wider than the mask are silently truncated to their low bits.
fn test_insert_single_truncates() {
    let mut data = [0x00];
    insert_single(&mut data, 0b1_1010, 0, 0, 0x07);
    assert_eq!(data, [0b0000_0010]);
}

#[test]
/// A straddling insert splits the value over both bytes.
fn test_insert_pair_straddling() {
    let mut data = [0xF8, 0x1F];
    insert_pair(&mut data, 0b011010, 0, 0, 0x07, 1, 5, 0x07, 3);
    assert_eq!(data, [0b1111_1011, 0b0101_1111]);
}

#[test]
/// Round trip across the whole range of a 10-bit split field.
fn test_pair_round_trip_all_values() {
    for value in 0..0x400u16 {
        let mut data = [0u8; 2];
        insert_pair(&mut data, value, 0, 0, 0x03, 1, 0, 0xFF, 8);
        assert_eq!(extract_pair(&data, 0, 0, 0x03, 1, 0, 0xFF, 8), value);
    }
}

//==================================================================================DESCRIPTORS
#[test]
/// Descriptors report their width from the mask.
fn test_descriptor_width() {
    let minute = SplitField::new(BitField::new(0, 0, 0x07), BitField::new(1, 5, 0x07), 3);
    assert_eq!(minute.high.width(), 3);
    assert_eq!(minute.width(), 6);
    assert_eq!(BitField::new(7, 0, 0xFF).width(), 8);
}

#[test]
/// Descriptor accessors go through the free functions.
fn test_descriptor_get_set() {
    let flag = BitField::new(0, 4, 0x01);
    let mut data = [0u8; 1];
    flag.set(&mut data, 1);
    assert_eq!(data, [0b0001_0000]);
    assert_eq!(flag.get(&data), 1);

    let second = SplitField::new(BitField::new(0, 0, 0x1F), BitField::new(1, 7, 0x01), 1);
    let mut data = [0xE0, 0x7F];
    second.set(&mut data, 0x3F);
    assert_eq!(data, [0xFF, 0xFF]);
    assert_eq!(second.get(&data), 0x3F);
}

#[path = "../common/mod.rs"]
mod common;

use rc522::protocol::frame::{parse_atqa, parse_fragment, parse_sak, select_frame};
use rc522::protocol::{crc_a, Received};
use rc522::{CascadeLevel, Error, UidFragment};

#[test]
fn twelve_bit_request_answer_is_rejected() {
    let r = Received::new(vec![0x04, 0x00], 12);
    assert_eq!(
        parse_atqa(&r),
        Err(Error::UnexpectedBits {
            expected: 16,
            actual: 12
        })
    );
}

#[test]
fn sixteen_bit_select_answer_is_rejected() {
    let r = Received::new(vec![0x08, 0xB6], 16);
    assert_eq!(parse_sak(&r), Err(Error::AckRejected { bits: 16 }));
}

#[test]
fn fragment_of_wrong_size_is_rejected() {
    for n in [0usize, 4, 6] {
        let r = Received::new(vec![0u8; n], n * 8);
        assert!(matches!(
            parse_fragment(&r),
            Err(Error::UnexpectedLength { expected: 5, .. })
        ));
    }
}

#[test]
fn select_frame_carries_crc_over_header() {
    let frag = UidFragment::from_bytes([0x04, 0x3F, 0x8A, 0x2B, 0x9A]).unwrap();
    let crc = crc_a(&[0x95, 0x70, 0x04, 0x3F, 0x8A, 0x2B, 0x9A]);
    let frame = select_frame(CascadeLevel::Level2, &frag, crc);
    assert_eq!(frame[0], 0x95);
    assert_eq!(frame[1], 0x70);
    assert_eq!(&frame[7..], &crc);
    assert_eq!(crc_a(&frame), [0x00, 0x00]);
}

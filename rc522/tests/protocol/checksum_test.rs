#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use rc522::protocol::{bcc, crc_a, verify_bcc};
use rc522::{Error, UidFragment};

#[test]
fn bcc_of_sample_uid() {
    assert_eq!(bcc(&common::single_uid()), 0x9A);
}

// 0x04 ^ 0x3F ^ 0x8A ^ 0x2B is 0x9A, so a fragment ending in 0xAE is corrupt
#[test]
fn fragment_with_wrong_check_byte_rejected() {
    assert!(!verify_bcc(&[0x04, 0x3F, 0x8A, 0x2B, 0xAE]));
    assert_eq!(
        UidFragment::from_bytes([0x04, 0x3F, 0x8A, 0x2B, 0xAE]),
        Err(Error::ChecksumMismatch {
            expected: 0x9A,
            actual: 0xAE
        })
    );
}

#[test]
fn crc_a_reference_vectors() {
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    assert_eq!(crc_a(&[0x00, 0x00]), [0xA0, 0x1E]);
    assert_eq!(crc_a(&[0x12, 0x34]), [0x26, 0xCF]);
}

#[test]
fn crc_a_appended_frame_checks_to_zero_residue() {
    // Appending the CRC to a frame makes the CRC of the whole frame constant
    let header = [0x93, 0x70, 0x04, 0x3F, 0x8A, 0x2B, 0x9A];
    let crc = crc_a(&header);
    let mut frame = header.to_vec();
    frame.extend_from_slice(&crc);
    assert_eq!(crc_a(&frame), [0x00, 0x00]);
}

proptest! {
    #[test]
    fn fragment_accepted_iff_bcc_matches(serial in proptest::array::uniform4(any::<u8>()), check in any::<u8>()) {
        let expected = serial[0] ^ serial[1] ^ serial[2] ^ serial[3];
        let bytes = [serial[0], serial[1], serial[2], serial[3], check];
        prop_assert_eq!(verify_bcc(&bytes), check == expected);
        prop_assert_eq!(UidFragment::from_bytes(bytes).is_ok(), check == expected);
    }
}

#[path = "../common/mod.rs"]
mod common;

use rc522::RequestMode;

#[test]
fn single_size_uid() {
    common::init_logging();
    let (shared, mut reader) = common::reader_with(common::card_present(&common::single_uid(), 1));
    let uid = reader.read_uid(RequestMode::Idle).unwrap();
    assert_eq!(uid.as_bytes(), &common::single_uid());
    assert_eq!(uid.to_le_integer(), 0x2B8A_3F04);
    assert_eq!(uid.to_string(), "730480388");
    assert_eq!(uid.to_hex(), hex::encode(common::single_uid()));

    let heads = common::frame_heads(&shared.borrow());
    assert_eq!(heads, vec![vec![0x26], vec![0x93, 0x20], vec![0x93, 0x70]]);
}

#[test]
fn double_size_uid() {
    let (shared, mut reader) = common::reader_with(common::card_present(&common::double_uid(), 1));
    let uid = reader.read_uid(RequestMode::Idle).unwrap();
    assert_eq!(uid.as_bytes(), &common::double_uid());
    assert_eq!(uid.cascade_levels(), 2);
    assert_eq!(shared.borrow().transmitted.len(), 5);
}

#[test]
fn triple_size_uid() {
    let (shared, mut reader) = common::reader_with(common::card_present(&common::triple_uid(), 1));
    let uid = reader.read_uid(RequestMode::Idle).unwrap();
    assert_eq!(uid.as_bytes(), &common::triple_uid());

    let heads = common::frame_heads(&shared.borrow());
    assert_eq!(
        heads,
        vec![
            vec![0x26],
            vec![0x93, 0x20],
            vec![0x93, 0x70],
            vec![0x95, 0x20],
            vec![0x95, 0x70],
            vec![0x97, 0x20],
            vec![0x97, 0x70],
        ]
    );
}

#[test]
fn select_frames_carry_fragment_and_crc() {
    let (shared, mut reader) = common::reader_with(common::card_present(&common::single_uid(), 1));
    reader.read_uid(RequestMode::Idle).unwrap();
    let m = shared.borrow();
    let select = &m.transmitted[2];
    assert_eq!(&select[..7], &[0x93, 0x70, 0x04, 0x3F, 0x8A, 0x2B, 0x9A]);
    assert_eq!(&select[7..], &rc522::protocol::crc_a(&select[..7]));
    // The coprocessor saw exactly the header
    assert_eq!(m.crc_inputs, vec![select[..7].to_vec()]);
}

#[test]
fn request_after_card_left_never_returns_stale_uid() {
    let (_shared, mut reader) = common::reader_with(common::card_present(&common::single_uid(), 1));
    assert!(reader.read_uid(RequestMode::Idle).is_ok());
    assert_eq!(
        reader.read_uid(RequestMode::Idle),
        Err(rc522::Error::NoTag)
    );
}

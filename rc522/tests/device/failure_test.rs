#[path = "../common/mod.rs"]
mod common;

use rc522::device::Register;
use rc522::test_support::{atqa_reply, fragment_reply, sak_reply};
use rc522::transport::mock::CardReply;
use rc522::{Error, RequestMode, Status};

#[test]
fn twelve_bit_atqa_is_error_without_chip_error_bits() {
    let (shared, mut reader) = common::reader_with(vec![CardReply::bits(&[0x04, 0x00], 4)]);
    let result = reader.request(RequestMode::Idle);
    assert_eq!(
        result,
        Err(Error::UnexpectedBits {
            expected: 16,
            actual: 12
        })
    );
    assert_eq!(Status::of(&result), Status::Error);
    assert_eq!(shared.borrow().register(Register::Error), 0);
}

#[test]
fn two_byte_select_ack_aborts_cascade() {
    let (_shared, mut reader) = common::reader_with(vec![
        atqa_reply(4),
        fragment_reply(common::single_uid()),
        CardReply::bytes(&[0x08, 0xB6]),
    ]);
    assert_eq!(
        reader.read_uid(RequestMode::Idle),
        Err(Error::AckRejected { bits: 16 })
    );
}

#[test]
fn failure_at_level_two_surfaces_no_partial_uid() {
    let uid = common::double_uid();
    let (shared, mut reader) = common::reader_with(vec![
        atqa_reply(7),
        fragment_reply([0x88, uid[0], uid[1], uid[2]]),
        sak_reply(0x04),
        // Level 2: card vanished
        CardReply::Silence,
    ]);
    assert_eq!(reader.read_uid(RequestMode::Idle), Err(Error::NoTag));
    assert_eq!(shared.borrow().transmitted.len(), 4);
}

#[test]
fn collision_during_anticollision_is_chip_error() {
    let (_shared, mut reader) = common::reader_with(vec![atqa_reply(4), CardReply::ChipError(0x08)]);
    let result = reader.read_uid(RequestMode::Idle);
    assert_eq!(result, Err(Error::Chip { bits: 0x08 }));
    assert_eq!(Status::of(&result), Status::Error);
}

#[test]
fn stuck_crc_coprocessor_aborts_select() {
    let (shared, mut reader) = common::reader_with(vec![
        atqa_reply(4),
        fragment_reply(common::single_uid()),
    ]);
    shared.borrow_mut().crc_stuck = true;
    assert_eq!(reader.read_uid(RequestMode::Idle), Err(Error::CrcTimeout));
    // Select never went on air
    assert_eq!(shared.borrow().transmitted.len(), 2);
}

#[test]
fn silent_chip_times_out() {
    let (_shared, mut reader) = common::reader_with(vec![CardReply::Hang]);
    let result = reader.request(RequestMode::Idle);
    assert_eq!(result, Err(Error::Timeout));
    assert_eq!(Status::of(&result), Status::Error);
}

#[path = "../common/mod.rs"]
mod common;

use rc522::device::{ChipCommand, Register, RegisterIo};
use rc522::transport::mock::{CardReply, MockTransport, PinEvent};
use rc522::transport::Transport;
use rc522::Error;

#[test]
fn every_register_access_is_its_own_frame() {
    let mut m = MockTransport::new();
    m.write_register(Register::TMode, 0x8D).unwrap();
    m.read_register(Register::TMode).unwrap();
    assert_eq!(
        m.pins,
        vec![
            PinEvent::Select,
            PinEvent::Release,
            PinEvent::Select,
            PinEvent::Release
        ]
    );
}

#[test]
fn unselected_transfer_is_a_transport_fault() {
    let mut m = MockTransport::new();
    let err = m.transfer(Register::Version.read_address()).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn replies_are_consumed_in_order() {
    let mut m = MockTransport::with_replies([
        CardReply::bytes(&[0x04, 0x00]),
        CardReply::Silence,
    ]);
    assert_eq!(m.pending_replies(), 2);
    for _ in 0..2 {
        m.write_register(Register::Command, ChipCommand::Transceive.code())
            .unwrap();
        m.set_bits(Register::BitFraming, 0x80).unwrap();
    }
    assert_eq!(m.pending_replies(), 0);
    assert_eq!(m.transmitted.len(), 2);
}

#[test]
fn bus_failure_surfaces_as_transport_error() {
    let mut m = MockTransport::new();
    m.fail_after = Some(0);
    assert!(matches!(
        m.read_register(Register::Version),
        Err(Error::Transport(_))
    ));
}

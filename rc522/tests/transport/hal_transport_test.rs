#[path = "../common/mod.rs"]
mod common;

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use rc522::device::{Register, RegisterIo};
use rc522::transport::HalTransport;

#[test]
fn register_write_then_read_on_the_wire() {
    let spi = SpiMock::new(&[
        // write TModeReg (0x2A) <- 0x8D
        SpiTransaction::transfer_in_place(vec![0x54], vec![0x00]),
        SpiTransaction::transfer_in_place(vec![0x8D], vec![0x00]),
        SpiTransaction::flush(),
        // read VersionReg (0x37)
        SpiTransaction::transfer_in_place(vec![0xEE], vec![0x00]),
        SpiTransaction::transfer_in_place(vec![0x00], vec![0x92]),
        SpiTransaction::flush(),
    ]);
    let cs = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);
    let rst = PinMock::new(&[]);

    let mut t = HalTransport::new(spi, cs, rst, NoopDelay::new());
    t.write_register(Register::TMode, 0x8D).unwrap();
    assert_eq!(t.read_register(Register::Version).unwrap(), 0x92);

    let (mut spi, mut cs, mut rst, _) = t.release_parts();
    spi.done();
    cs.done();
    rst.done();
}

// fixtures.rs — commonly used UIDs and scripted cards

use rc522::device::{Initialized, Mfrc522};
use rc522::test_support::{self, SharedTransport};
use rc522::transport::mock::{CardReply, MockTransport};

/// Route driver logs to the test harness; RUST_LOG=trace shows register traffic.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn single_uid() -> [u8; 4] {
    [0x04, 0x3F, 0x8A, 0x2B]
}

pub fn double_uid() -> [u8; 7] {
    [0x04, 0x52, 0x61, 0x9A, 0x4B, 0x70, 0x80]
}

pub fn triple_uid() -> [u8; 10] {
    [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99]
}

/// Reader on a simulated chip plus a handle for inspecting it.
pub fn reader_with(replies: Vec<CardReply>) -> (SharedTransport<MockTransport>, Mfrc522<Initialized>) {
    test_support::shared_mock_reader(replies).unwrap()
}

/// Scripted replies for `reads` consecutive reads of the same card.
pub fn card_present(uid: &[u8], reads: usize) -> Vec<CardReply> {
    (0..reads).flat_map(|_| test_support::card_replies(uid)).collect()
}

/// Frames the reader put on air, truncated to their first two bytes.
pub fn frame_heads(m: &MockTransport) -> Vec<Vec<u8>> {
    m.transmitted
        .iter()
        .map(|f| f.iter().take(2).copied().collect())
        .collect()
}

// rc522/src/protocol/checksum.rs

use crate::constants::CRC_A_PRESET;

/// Block check character: XOR of the serial bytes of a UID fragment.
pub fn bcc(serial: &[u8]) -> u8 {
    serial.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// True if `fragment` is 4 serial bytes followed by their BCC.
pub fn verify_bcc(fragment: &[u8]) -> bool {
    fragment.len() == 5 && bcc(&fragment[..4]) == fragment[4]
}

/// Software CRC_A (ISO/IEC 14443-3 Annex B), low byte first.
///
/// Produces the same result as the reader's coprocessor with ModeReg
/// CRCPreset = 01.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc = CRC_A_PRESET;
    for &b in data {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        crc = (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4);
    }
    crc.to_le_bytes()
}

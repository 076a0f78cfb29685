//! Whole-file CRC-32 integrity check.
//!
//! # Responsibility
//! - Compute the file checksum: CRC-32, polynomial 0x04C11DB7, initial
//!   register 0xFFFFFFFF, reflected input/output, XOR-out 0x00000000.
//! - Validate on load via the residue property and append on save.
//!
//! # Invariants
//! - A buffer with its own checksum appended always re-checksums to 0.
//! - The four checksum bytes are stored least-significant first.

/// File checksum over `bytes`.
///
/// With XOR-out 0 this is the raw CRC register, which is the bitwise
/// complement of the IEEE CRC-32 `crc32fast` computes.
pub fn checksum(bytes: &[u8]) -> u32 {
    !crc32fast::hash(bytes)
}

/// Accepts a buffer whose trailing four bytes are its own checksum.
///
/// Computing the checksum over the entire buffer, trailer included, yields
/// exactly 0 for an intact file.
pub fn validate(buffer: &[u8]) -> bool {
    checksum(buffer) == 0
}

/// Appends the checksum of `buffer` to its end, least-significant byte
/// first.
pub fn append(buffer: &mut Vec<u8>) {
    let crc = checksum(buffer);
    buffer.extend_from_slice(&crc.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::{append, checksum, validate};

    #[test]
    fn checksum_matches_known_vector() {
        // JAMCRC check value for the standard "123456789" input.
        assert_eq!(checksum(b"123456789"), 0x340B_C6D9);
    }

    #[test]
    fn append_then_validate_holds() {
        let mut buffer = b"some checklist payload".to_vec();
        append(&mut buffer);
        assert!(validate(&buffer));
    }

    #[test]
    fn validate_rejects_any_single_byte_flip() {
        let mut buffer = b"some checklist payload".to_vec();
        append(&mut buffer);
        for index in 0..buffer.len() {
            let mut corrupted = buffer.clone();
            corrupted[index] ^= 0x01;
            assert!(!validate(&corrupted), "flip at {index} went undetected");
        }
    }

    #[test]
    fn validate_rejects_empty_and_truncated_buffers() {
        assert!(!validate(&[]));
        let mut buffer = b"payload".to_vec();
        append(&mut buffer);
        buffer.pop();
        assert!(!validate(&buffer));
    }
}

//! Conversion of captured register bytes into raw values
//!
//! Bytes dumped by an emulator or debugger arrive least significant byte
//! first. Reversing them and reading the result as a big-endian integer
//! gives the register value; `from_le_bytes` does both steps at once.

use crate::error::{RegisterError, Result};

/// Interpret 4 or 8 captured bytes as a register value
///
/// # Example
///
/// ```
/// use regscope_raw::raw::from_captured_bytes;
///
/// assert_eq!(from_captured_bytes(&[0x23, 0x00, 0x20, 0x0a]).unwrap(), 0x0a20_0023);
/// assert!(from_captured_bytes(&[0x00; 3]).is_err());
/// ```
pub fn from_captured_bytes(bytes: &[u8]) -> Result<u64> {
    if let Ok(word) = <[u8; 4]>::try_from(bytes) {
        return Ok(u32::from_le_bytes(word) as u64);
    }
    if let Ok(dword) = <[u8; 8]>::try_from(bytes) {
        return Ok(u64::from_le_bytes(dword));
    }
    Err(RegisterError::InvalidRawLength(bytes.len()))
}

/// Inverse of [`from_captured_bytes`] for a register of `width` bits
///
/// Registers up to 32 bits produce 4 bytes, wider ones 8.
pub fn to_captured_bytes(raw: u64, width: u32) -> Vec<u8> {
    if width <= 32 {
        (raw as u32).to_le_bytes().to_vec()
    } else {
        raw.to_le_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_byte_reversed() {
        assert_eq!(
            from_captured_bytes(&[0x44, 0x33, 0x22, 0x11]).unwrap(),
            0x1122_3344
        );
        assert_eq!(
            from_captured_bytes(&[0x04, 0x00, 0x00, 0x00]).unwrap(),
            4
        );
    }

    #[test]
    fn test_doubleword() {
        let bytes = [0x01, 0x02, 0x03, 0x81, 0x04, 0x00, 0x00, 0x00];
        assert_eq!(from_captured_bytes(&bytes).unwrap(), 0x0000_0004_8103_0201);
    }

    #[test]
    fn test_bad_length() {
        assert_eq!(
            from_captured_bytes(&[]),
            Err(RegisterError::InvalidRawLength(0))
        );
        assert_eq!(
            from_captured_bytes(&[0; 5]),
            Err(RegisterError::InvalidRawLength(5))
        );
    }

    #[test]
    fn test_to_captured_bytes() {
        assert_eq!(to_captured_bytes(0x0a20_0023, 32), vec![0x23, 0x00, 0x20, 0x0a]);
        assert_eq!(to_captured_bytes(0x0a20_0023, 64).len(), 8);
    }
}

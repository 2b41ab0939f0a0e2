//! Minimal script construction
//!
//! Just enough of the script language to express the two genesis scripts:
//! data pushes, script-number pushes, and a handful of opcodes. Script
//! *execution* lives in validation, outside this crate.

use serde::{Deserialize, Serialize};

/// OP_DUP
pub const OP_DUP: u8 = 0x76;
/// OP_HASH160
pub const OP_HASH160: u8 = 0xa9;
/// OP_EQUALVERIFY
pub const OP_EQUALVERIFY: u8 = 0x88;
/// OP_CHECKSIG
pub const OP_CHECKSIG: u8 = 0xac;

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;

/// A serialized script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a script by pushing elements onto the end
#[derive(Debug, Clone, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    pub fn new() -> Self {
        Builder(Vec::new())
    }

    /// Push a raw opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Push a data element with the shortest push prefix that fits
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Push a non-negative integer as a script-number data push
    /// (little-endian minimal encoding, sign-padded if the top bit is set)
    pub fn push_scriptnum(self, value: i64) -> Self {
        debug_assert!(value >= 0, "genesis scripts only push non-negative numbers");
        let mut bytes = Vec::new();
        let mut v = value as u64;
        while v > 0 {
            bytes.push((v & 0xff) as u8);
            v >>= 8;
        }
        if let Some(&top) = bytes.last() {
            if top & 0x80 != 0 {
                bytes.push(0x00);
            }
        }
        self.push_slice(&bytes)
    }

    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_push_uses_direct_opcode() {
        let script = Builder::new().push_slice(&[0xaa, 0xbb]).into_script();
        assert_eq!(script.as_bytes(), &[0x02, 0xaa, 0xbb]);
    }

    #[test]
    fn test_long_push_uses_pushdata1() {
        let data = [0x55u8; 77];
        let script = Builder::new().push_slice(&data).into_script();
        assert_eq!(script.as_bytes()[0], OP_PUSHDATA1);
        assert_eq!(script.as_bytes()[1], 77);
        assert_eq!(script.len(), 79);
    }

    #[test]
    fn test_scriptnum_single_byte() {
        let script = Builder::new().push_scriptnum(4).into_script();
        assert_eq!(script.as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_scriptnum_difficulty_constant() {
        // 486604799 = 0x1d00ffff, little-endian minimal
        let script = Builder::new().push_scriptnum(486604799).into_script();
        assert_eq!(script.as_bytes(), &[0x04, 0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_scriptnum_sign_padding() {
        // 0xff would read as negative without a padding byte
        let script = Builder::new().push_scriptnum(0xff).into_script();
        assert_eq!(script.as_bytes(), &[0x02, 0xff, 0x00]);
    }

    #[test]
    fn test_p2pkh_shape() {
        let pkh = [0x11u8; 20];
        let script = Builder::new()
            .push_opcode(OP_DUP)
            .push_opcode(OP_HASH160)
            .push_slice(&pkh)
            .push_opcode(OP_EQUALVERIFY)
            .push_opcode(OP_CHECKSIG)
            .into_script();
        assert_eq!(script.len(), 25);
        assert_eq!(script.as_bytes()[0], OP_DUP);
        assert_eq!(script.as_bytes()[24], OP_CHECKSIG);
    }
}

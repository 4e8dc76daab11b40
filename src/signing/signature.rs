//! Signature normalization and wire encoding.
//!
//! Tron puts the raw recovery id (0/1) on the wire; engines that follow the
//! Ethereum legacy convention emit 27/28 instead. Normalization happens once,
//! at construction, so every `TronSignature` in the crate already satisfies
//! `v` in {0, 1}.

use serde::{Deserialize, Serialize};

use crate::engine::RecoverableParts;

/// A normalized recoverable signature: `r`, `s`, and a 0/1 recovery id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TronSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl TronSignature {
    /// Normalize raw engine output into the wire convention.
    pub fn from_parts(parts: RecoverableParts) -> Self {
        let v = if parts.recovery_id >= 27 {
            parts.recovery_id - 27
        } else {
            parts.recovery_id
        };
        Self {
            r: parts.r,
            s: parts.s,
            v,
        }
    }

    /// 65-byte `r || s || v` layout appended to transaction signature lists.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Hex wire form: `0x` + r + s + v, with `v` as two hex digits.
    pub fn to_hex(&self) -> String {
        format!(
            "0x{}{}{:02x}",
            hex::encode(self.r),
            hex::encode(self.s),
            self.v
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(recovery_id: u8) -> RecoverableParts {
        RecoverableParts {
            r: [0x11; 32],
            s: [0x22; 32],
            recovery_id,
        }
    }

    #[test]
    fn normalizes_both_recovery_conventions() {
        assert_eq!(TronSignature::from_parts(parts(27)).v, 0);
        assert_eq!(TronSignature::from_parts(parts(28)).v, 1);
        assert_eq!(TronSignature::from_parts(parts(0)).v, 0);
        assert_eq!(TronSignature::from_parts(parts(1)).v, 1);
    }

    #[test]
    fn wire_layout_is_r_s_v() {
        let sig = TronSignature::from_parts(parts(28));
        let bytes = sig.to_bytes();
        assert_eq!(&bytes[..32], &[0x11; 32]);
        assert_eq!(&bytes[32..64], &[0x22; 32]);
        assert_eq!(bytes[64], 1);
    }

    #[test]
    fn hex_form_has_prefix_and_two_digit_v() {
        let sig = TronSignature::from_parts(parts(27));
        let hex_form = sig.to_hex();
        assert!(hex_form.starts_with("0x"));
        assert_eq!(hex_form.len(), 2 + 64 + 64 + 2);
        assert!(hex_form.ends_with("00"));

        assert!(TronSignature::from_parts(parts(28)).to_hex().ends_with("01"));
    }
}

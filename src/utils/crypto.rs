//! Hash and address helpers shared across the signing modules.

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

/// Tron address version byte (mainnet).
const ADDRESS_PREFIX: u8 = 0x41;

/// SHA-256 hash.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Keccak-256 hash (pre-standard SHA-3 variant used by the protocol).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Base58check-encode a payload with a double-sha256 checksum.
pub fn base58check(payload: &[u8]) -> String {
    let checksum = sha256(&sha256(payload));
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Derive the `T...` address from an uncompressed secp256k1 public key.
///
/// Keccak256 over the 64-byte key body (`0x04` prefix skipped), last 20
/// bytes, `0x41` version byte, base58check.
pub fn tron_address_from_public_key(public_key: &[u8]) -> String {
    // Tolerate both 65-byte (with 0x04 prefix) and 64-byte inputs.
    let body = if public_key.len() == 65 {
        &public_key[1..]
    } else {
        public_key
    };
    let hash = keccak256(body);

    let mut payload = Vec::with_capacity(21);
    payload.push(ADDRESS_PREFIX);
    payload.extend_from_slice(&hash[12..]);
    base58check(&payload)
}

/// Check whether a string is a well-formed mainnet Tron address.
///
/// Round-trips the base58check encoding and requires the `0x41` version byte
/// over a 21-byte payload.
pub fn is_tron_address(address: &str) -> bool {
    if address.is_empty() {
        return false;
    }
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    if decoded.len() != 25 || decoded[0] != ADDRESS_PREFIX {
        return false;
    }
    let (payload, checksum) = decoded.split_at(21);
    let expected = sha256(&sha256(payload));
    checksum == &expected[..4]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        // sha256("abc")
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn keccak256_known_vector() {
        // keccak256("") differs from standardized SHA3-256("")
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn derived_address_is_valid() {
        let secp = secp256k1::Secp256k1::new();
        let secret = secp256k1::SecretKey::from_slice(&[0x11u8; 32]).unwrap();
        let public = secret.public_key(&secp).serialize_uncompressed();

        let address = tron_address_from_public_key(&public);
        assert!(address.starts_with('T'));
        assert!(is_tron_address(&address));
    }

    #[test]
    fn rejects_tampered_address() {
        let secp = secp256k1::Secp256k1::new();
        let secret = secp256k1::SecretKey::from_slice(&[0x22u8; 32]).unwrap();
        let public = secret.public_key(&secp).serialize_uncompressed();
        let mut address = tron_address_from_public_key(&public);

        // Flip the last character; the checksum must catch it.
        let last = address.pop().unwrap();
        address.push(if last == '1' { '2' } else { '1' });
        assert!(!is_tron_address(&address));

        assert!(!is_tron_address(""));
        assert!(!is_tron_address("not base58 !!!"));
    }
}

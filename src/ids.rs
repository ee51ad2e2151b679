// Session-unique identifiers. Formats are an implementation detail, not a
// contract; only within-session uniqueness matters.

use rand::Rng;

const ADDRESS_LEN: usize = 44;
// Base58-style alphabet: no 0, O, I, l.
const ADDRESS_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz123456789";

/// Fresh opaque wallet address for a newly connected session.
pub fn wallet_address<R: Rng>(rng: &mut R) -> String {
    (0..ADDRESS_LEN)
        .map(|_| ADDRESS_CHARSET[rng.gen_range(0..ADDRESS_CHARSET.len())] as char)
        .collect()
}

/// Deterministic transaction id: hex of (timestamp ms, session sequence
/// number). Unique within a session by the sequence alone.
pub fn tx_id(now_ms: u64, seq: u64) -> String {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&now_ms.to_be_bytes());
    bytes[8..].copy_from_slice(&seq.to_be_bytes());
    hex::encode(bytes)
}

use sha3::{Digest, Sha3_256};

/// Passwords are stored as lowercase hex SHA3-256 digests; the cleartext
/// never reaches the database layer.
pub fn sha3_256_hex(data: &str) -> String {
    let mut hasher = Sha3_256::default();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

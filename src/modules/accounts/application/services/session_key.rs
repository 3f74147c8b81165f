use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate an opaque session key. Raw entropy never leaves this function,
/// only the SHA-256 digest is handed out.
pub fn generate_session_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

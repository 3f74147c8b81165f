pub mod argon2_hasher;
pub mod password_hasher;
pub mod session_key;

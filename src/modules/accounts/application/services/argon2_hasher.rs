use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use rand_core::OsRng;

use super::password_hasher::PasswordHasher as HasherTrait;

pub struct Argon2Hasher;

impl HasherTrait for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        match argon2.hash_password(password.as_bytes(), &salt) {
            Ok(password_hash) => Ok(password_hash.to_string()),
            Err(e) => Err(format!("Failed to hash password: {}", e)),
        }
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        match PasswordHash::new(hashed) {
            Ok(parsed_hash) => {
                match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                    Ok(_) => Ok(true),
                    Err(PasswordHashError::Password) => Ok(false),
                    Err(e) => Err(format!("Password verification failed: {}", e)),
                }
            }
            Err(_) => Err("Invalid hash format".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = Argon2Hasher;
        let hashed = hasher.hash_password("SecurePassword123").unwrap();

        assert!(hasher.verify_password("SecurePassword123", &hashed).unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).unwrap());
    }

    #[test]
    fn invalid_hash_format_is_an_error() {
        let hasher = Argon2Hasher;
        assert!(hasher.verify_password("anything", "not-a-hash").is_err());
    }
}

use argon2::{Config, Variant};
use log::error;
use rand::rngs::OsRng;
use rand::TryRngCore;
use shared::error::{info_err, PortalError};

const SALT_LEN: usize = 16;

/// Argon2 cost factors, `None` keeps the library default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HashCost {
    pub mem_cost: Option<u32>,
    pub time_cost: Option<u32>,
}

pub fn hash_password(password: &[u8], cost: HashCost) -> Result<String, PortalError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.try_fill_bytes(&mut salt).map_err(|err| info_err!("Failed to generate salt: {err}"))?;

    let defaults = Config::default();
    let config = Config {
        variant: Variant::Argon2id,
        mem_cost: cost.mem_cost.unwrap_or(defaults.mem_cost),
        time_cost: cost.time_cost.unwrap_or(defaults.time_cost),
        ..defaults
    };
    argon2::hash_encoded(password, &salt, &config).map_err(|err| {
        error!("Password hashing failed: {err}");
        info_err!("Password hashing failed")
    })
}

/// `false` on mismatch and on hashes that can not be parsed.
pub fn verify_password(hash: &str, password: &[u8]) -> bool {
    argon2::verify_encoded(hash, password).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: HashCost = HashCost { mem_cost: Some(1024), time_cost: Some(1) };

    #[test]
    fn hash_and_verify() {
        let hash = hash_password(b"Admin1!123", FAST).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(&hash, b"Admin1!123"));
        assert!(!verify_password(&hash, b"Admin1!124"));
    }

    #[test]
    fn salts_differ() {
        let first = hash_password(b"secret-pass", FAST).unwrap();
        let second = hash_password(b"secret-pass", FAST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("not-a-hash", b"secret-pass"));
        assert!(!verify_password("", b""));
    }
}

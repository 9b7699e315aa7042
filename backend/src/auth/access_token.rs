use crate::model::AuthConfig;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use shared::error::{info_err, PortalError};
use shared::model::{Claims, IdentityDto};
use shared::utils::current_time_secs;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

/// Issues and verifies HS256 session tokens.
///
/// The secret is fixed at construction. Verification is pure, it never
/// looks at persisted users, so claims stay valid until `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], issuer: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked against the caller supplied clock
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.secret.as_bytes(), &config.issuer, config.t_token_ttl_secs)
    }

    pub fn issue(&self, identity: &IdentityDto) -> Result<String, PortalError> {
        self.issue_at(identity, current_time_secs())
    }

    pub fn issue_at(&self, identity: &IdentityDto, now: i64) -> Result<String, PortalError> {
        let claims = Claims {
            sub: identity.id.to_string(),
            role: Some(identity.role),
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
            iss: self.issuer.clone(),
        };
        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, PortalError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| info_err!("Failed to sign token: {err}"))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, current_time_secs())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidIssuer | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        if now >= claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::model::Role;

    const NOW: i64 = 1_700_000_000;
    const TTL: u64 = 3600;

    fn service() -> TokenService {
        TokenService::new(b"test-secret", "novaportal", TTL)
    }

    fn identity(role: Role) -> IdentityDto {
        IdentityDto { id: 42, email: "admin2@demo.local".to_string(), name: "Admin 2".to_string(), role }
    }

    #[test]
    fn issue_verify_round_trip() {
        let tokens = service();
        for role in Role::ALL {
            let token = tokens.issue_at(&identity(role), NOW).unwrap();
            let claims = tokens.verify_at(&token, NOW + 1).unwrap();
            assert_eq!(claims.role, Some(role));
            assert_eq!(claims.sub, "42");
            assert_eq!(claims.email, "admin2@demo.local");
            assert_eq!(claims.name, "Admin 2");
            assert_eq!(claims.iat, NOW);
            assert_eq!(claims.exp, NOW + 3600);
            assert_eq!(claims.iss, "novaportal");
            assert_eq!(claims.identity(), Some(identity(role)));
        }
    }

    #[test]
    fn expiry_boundary() {
        let tokens = service();
        let token = tokens.issue_at(&identity(Role::Admin1), NOW).unwrap();
        let exp = NOW + 3600;
        assert!(tokens.verify_at(&token, exp - 1).is_ok());
        assert_eq!(tokens.verify_at(&token, exp), Err(TokenError::Expired));
        assert_eq!(tokens.verify_at(&token, exp + 1), Err(TokenError::Expired));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let tokens = service();
        let token = tokens.issue_at(&identity(Role::Cliente), NOW).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let payload = parts[1];
        for idx in 0..payload.len() {
            let mut bytes = payload.as_bytes().to_vec();
            bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
            let forged_payload = String::from_utf8(bytes).unwrap();
            if forged_payload == payload {
                continue;
            }
            let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
            assert!(tokens.verify_at(&forged, NOW).is_err(), "accepted tampered byte {idx}");
        }
    }

    #[test]
    fn other_secret_or_issuer_is_invalid_signature() {
        let token = service().issue_at(&identity(Role::Admin1), NOW).unwrap();
        let other_secret = TokenService::new(b"another-secret", "novaportal", TTL);
        assert_eq!(other_secret.verify_at(&token, NOW), Err(TokenError::InvalidSignature));
        let other_issuer = TokenService::new(b"test-secret", "elsewhere", TTL);
        assert_eq!(other_issuer.verify_at(&token, NOW), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        let tokens = service();
        assert_eq!(tokens.verify_at("not-a-token", NOW), Err(TokenError::Malformed));
        assert_eq!(tokens.verify_at("", NOW), Err(TokenError::Malformed));
    }

    #[test]
    fn token_without_role_still_verifies() {
        let tokens = service();
        let claims = Claims {
            sub: "9".to_string(),
            role: None,
            email: "x@demo.local".to_string(),
            name: "X".to_string(),
            iat: NOW,
            exp: NOW + 60,
            iss: "novaportal".to_string(),
        };
        let token = tokens.sign(&claims).unwrap();
        assert_eq!(tokens.verify_at(&token, NOW).unwrap().role, None);
    }
}

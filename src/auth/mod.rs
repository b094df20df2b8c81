use std::collections::HashSet;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod password;

/// Claims carried by a bearer token.
///
/// There is intentionally no `exp` claim: issued tokens stay valid until the
/// signing secret changes, and there is no revocation list. Known gap,
/// preserved for compatibility rather than silently adding expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds).
    pub iat: i64,
}

/// Signs and verifies bearer tokens with a process-wide HS256 secret.
///
/// Built once in `main` and cloned into `AppState`; verification never
/// touches the store.
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenManager {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim, so expiry must neither be required nor
        // validated for decoding to succeed.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token binding the given user id.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id,
            iat: chrono::Utc::now().timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify the signature and decode the bound user id.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

use bcrypt::BcryptError;

/// bcrypt work factor for stored credentials. Fixed so the hashing cost is
/// documented behavior; each hash embeds its own cost, so raising this later
/// only affects new registrations.
pub const HASH_COST: u32 = 10;

/// One-way hash for storage.
pub fn hash(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a candidate password against a stored hash.
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_rejects() {
        let stored = hash("hunter2").expect("hash");
        assert_ne!(stored, "hunter2");
        assert!(verify("hunter2", &stored).expect("verify"));
        assert!(!verify("wrong", &stored).expect("verify"));
    }
}

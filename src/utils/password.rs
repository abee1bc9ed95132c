use bcrypt::BcryptError;

/// Fixed cost factor, matching the ten rounds the API has always used.
const COST: u32 = 10;

pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, COST)
}

pub fn verify(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let digest = hash("secret").unwrap();
        assert!(verify("secret", &digest).unwrap());
        assert!(!verify("wrong", &digest).unwrap());
    }

    #[test]
    fn salts_differ_across_calls() {
        let a = hash("secret").unwrap();
        let b = hash("secret").unwrap();
        assert_ne!(a, b);
        assert!(verify("secret", &a).unwrap());
        assert!(verify("secret", &b).unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify("secret", "not-a-digest").is_err());
    }
}

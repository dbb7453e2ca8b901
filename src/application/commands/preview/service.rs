use sha2::{Digest, Sha256};

/// Outcome of a preview request: whether draft mode should be on for the
/// client, and where to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDecision {
    pub draft: bool,
    pub redirect: String,
}

pub struct PreviewService {
    secret_digest: Option<[u8; 32]>,
}

impl PreviewService {
    /// With no secret configured every enable request is refused.
    pub fn new(secret: Option<String>) -> Self {
        let secret_digest = secret
            .filter(|secret| !secret.is_empty())
            .map(|secret| digest(&secret));
        Self { secret_digest }
    }

    // Compares digests so timing does not depend on the candidate's prefix.
    pub(super) fn secret_matches(&self, candidate: Option<&str>) -> bool {
        let (Some(expected), Some(candidate)) = (self.secret_digest, candidate) else {
            return false;
        };
        let actual = digest(candidate);
        expected
            .iter()
            .zip(actual.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

//! One-time login codes.
//!
//! Codes are held in memory with a bounded TTL and are invalidated on first
//! use. Two kinds exist: the bootstrap code generated at startup when no
//! admin account exists yet, and codes an admin issues for a specific user.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long an issued code stays valid.
const LOGIN_CODE_TTL_SECONDS: u64 = 900;

/// Length of generated codes.
const CODE_LENGTH: usize = 32;

/// What a consumed code grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeGrant {
    /// Claim the admin account; only issued while no admin user exists.
    BootstrapAdmin,
    /// Log in as the given existing user.
    User(i32),
}

struct IssuedCode {
    code: String,
    grant: CodeGrant,
    expires_at: Instant,
}

impl IssuedCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory store of outstanding one-time login codes.
#[derive(Clone, Default)]
pub struct LoginCodeService {
    codes: Arc<RwLock<Vec<IssuedCode>>>,
}

impl LoginCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds a freshly issued code stays valid; surfaced to clients.
    pub fn ttl_seconds(&self) -> u64 {
        LOGIN_CODE_TTL_SECONDS
    }

    /// Generates, stores and returns a new one-time code for `grant`.
    /// Expired codes are purged on the way.
    pub async fn issue(&self, grant: CodeGrant) -> String {
        let code = generate_random_code();

        let mut codes = self.codes.write().await;
        codes.retain(|issued| !issued.is_expired());
        codes.push(IssuedCode {
            code: code.clone(),
            grant,
            expires_at: Instant::now() + Duration::from_secs(LOGIN_CODE_TTL_SECONDS),
        });

        code
    }

    /// Consumes `input` if it matches an outstanding, unexpired code and
    /// returns its grant. A consumed or expired code never validates again.
    pub async fn validate_and_consume(&self, input: &str) -> Option<CodeGrant> {
        let mut codes = self.codes.write().await;
        codes.retain(|issued| !issued.is_expired());

        let position = codes.iter().position(|issued| issued.code == input)?;

        Some(codes.remove(position).grant)
    }

    #[cfg(test)]
    async fn issue_with_ttl(&self, grant: CodeGrant, ttl: Duration) -> String {
        let code = generate_random_code();

        self.codes.write().await.push(IssuedCode {
            code: code.clone(),
            grant,
            expires_at: Instant::now() + ttl,
        });

        code
    }
}

/// Random alphanumeric code from the system RNG.
fn generate_random_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

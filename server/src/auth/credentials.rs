//! Admin credential pair and verification

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use ring::constant_time::verify_slices_are_equal;

/// Development fallback pair; refused at startup in production
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

/// The configured admin credential pair
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load from `ADMIN_USERNAME` / `ADMIN_PASSWORD`, falling back to the
    /// development defaults
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.into()),
        }
    }

    /// Whether the pair still carries the well-known default password
    pub fn is_default(&self) -> bool {
        self.password == DEFAULT_PASSWORD
    }

    /// Constant-time comparison of a supplied pair against the configured one
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = verify_slices_are_equal(username.as_bytes(), self.username.as_bytes());
        let pass_ok = verify_slices_are_equal(password.as_bytes(), self.password.as_bytes());
        // Evaluate both before combining so a username mismatch does not
        // short-circuit the password comparison
        user_ok.is_ok() & pass_ok.is_ok()
    }

    /// Opaque login token: the base64 form of the Basic credential
    pub fn token(&self) -> String {
        BASE64.encode(format!("{}:{}", self.username, self.password))
    }

    /// Verify an `Authorization` header value (`Basic <base64>`)
    pub fn verify_basic_header(&self, header: &str) -> bool {
        let Some(encoded) = header.strip_prefix("Basic ") else {
            return false;
        };
        let Ok(decoded) = BASE64.decode(encoded.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        let Some((username, password)) = decoded.split_once(':') else {
            return false;
        };
        self.verify(username, password)
    }
}

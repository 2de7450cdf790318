//! Admin Authentication
//!
//! A single shared-secret credential pair, injected through configuration,
//! guards the privileged order operations. The login endpoint and the gate
//! middleware verify the same pair: login hands back
//! `base64("username:password")`, which is exactly the credential the
//! Basic-auth gate decodes and compares on every privileged request.
//!
//! There is deliberately no session state — no issuance, rotation, or expiry.

mod credentials;
mod middleware;

pub use credentials::AdminCredentials;
pub use middleware::require_admin;

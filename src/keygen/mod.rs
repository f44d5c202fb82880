//! Key material generation.
//!
//! Every byte comes from the operating system's CSPRNG via [`OsRng`]. RNG
//! failure is fatal and propagates to the caller; there is no fallback to a
//! weaker generator.

use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::constants::{DEV_ADDR_LEN, SESSION_KEY_LEN};
use crate::models::{CredentialSet, DevAddr, SessionKey};

/// Errors during key material generation.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// A zero-length request is rejected at the call boundary rather than
    /// silently producing an empty sequence.
    #[error("invalid byte count {requested}: a positive length is required")]
    InvalidLength { requested: usize },

    /// The OS random source could not produce bytes.
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] rand::rand_core::OsError),
}

fn fill(buf: &mut [u8]) -> Result<(), KeygenError> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// Fill a fresh buffer of `count` cryptographically random bytes.
pub fn generate_bytes(count: usize) -> Result<Vec<u8>, KeygenError> {
    if count == 0 {
        return Err(KeygenError::InvalidLength { requested: count });
    }
    let mut buf = vec![0u8; count];
    fill(&mut buf)?;
    Ok(buf)
}

/// Generate a random 4-byte device address.
pub fn generate_dev_addr() -> Result<DevAddr, KeygenError> {
    let mut bytes = [0u8; DEV_ADDR_LEN];
    fill(&mut bytes)?;
    Ok(DevAddr::new(bytes))
}

/// Generate a random 16-byte session key.
pub fn generate_session_key() -> Result<SessionKey, KeygenError> {
    let mut bytes = [0u8; SESSION_KEY_LEN];
    fill(&mut bytes)?;
    Ok(SessionKey::new(bytes))
}

/// Generate a complete ABP credential set: device address plus network and
/// application session keys, each drawn independently.
pub fn generate_credentials() -> Result<CredentialSet, KeygenError> {
    Ok(CredentialSet {
        dev_addr: generate_dev_addr()?,
        nwk_skey: generate_session_key()?,
        app_skey: generate_session_key()?,
    })
}

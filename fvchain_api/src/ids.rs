//! Device ID and session token generation for mining heartbeats.
//!
//! Both identifiers are `<prefix>_<unix-seconds>_<random [a-z0-9] suffix>`.
//! They correlate heartbeats with a session and are not credentials.

use rand::Rng;

use crate::clock::{Clock, SystemClock};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random part of a device ID.
pub const DEVICE_ID_SUFFIX_LEN: usize = 9;
/// Length of the random part of a session token.
pub const SESSION_TOKEN_SUFFIX_LEN: usize = 15;

fn random_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Builds a device ID from an explicit clock and random source.
pub fn device_id_with<C, R>(clock: &C, rng: &mut R) -> String
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    format!(
        "device_{}_{}",
        clock.unix_seconds(),
        random_suffix(rng, DEVICE_ID_SUFFIX_LEN)
    )
}

/// Builds a session token from an explicit clock and random source.
pub fn session_token_with<C, R>(clock: &C, rng: &mut R) -> String
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    format!(
        "session_{}_{}",
        clock.unix_seconds(),
        random_suffix(rng, SESSION_TOKEN_SUFFIX_LEN)
    )
}

/// Generates `device_<unix-seconds>_<9 chars>` from the system clock.
pub fn generate_device_id() -> String {
    device_id_with(&SystemClock, &mut rand::thread_rng())
}

/// Generates `session_<unix-seconds>_<15 chars>` from the system clock.
pub fn generate_session_token() -> String {
    session_token_with(&SystemClock, &mut rand::thread_rng())
}

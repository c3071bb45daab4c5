/**
 * One-Time Codes
 *
 * Generation and checking of the 6-digit email verification codes issued
 * at signup.
 */

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::backend::auth::users::User;
use crate::backend::error::ChatError;

/// Number of digits in a code
pub const OTP_DIGITS: usize = 6;

/// Generate a uniformly random zero-padded 6-digit code
pub fn generate_otp() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:0width$}", value, width = OTP_DIGITS)
}

/// Result of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStatus {
    /// The user was verified before this request
    AlreadyVerified,
    /// The code matched and has not expired
    Accepted,
}

/// Check a submitted code against the user's pending one
///
/// Verified users short-circuit regardless of the code. A wrong code is
/// reported before expiry, so an expired but correct code is the only way
/// to see "OTP expired".
pub fn check_otp(user: &User, submitted: &str, now: DateTime<Utc>) -> Result<OtpStatus, ChatError> {
    if user.is_verified {
        return Ok(OtpStatus::AlreadyVerified);
    }

    if user.otp.as_deref() != Some(submitted) {
        return Err(ChatError::invalid("Invalid OTP"));
    }

    match user.otp_expires_at {
        Some(expires_at) if now <= expires_at => Ok(OtpStatus::Accepted),
        _ => Err(ChatError::invalid("OTP expired")),
    }
}

//! Contact Discovery Types
//!
//! Request/response bodies for checking which phone numbers from a
//! client's address book belong to verified OneChat users.

use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// Number of trailing digits compared when matching phone numbers
pub const PHONE_SUFFIX_DIGITS: usize = 10;

/// Reduce a phone number to its comparable suffix
///
/// Keeps only ASCII digits and returns the last ten of them, so
/// `+1 (555) 010-9999` and `5550109999` normalize to the same value.
pub fn normalize_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(PHONE_SUFFIX_DIGITS);
    digits[start..].iter().collect()
}

/// Request body for `POST /contacts/check`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckContactsRequest {
    #[serde(default)]
    pub phones: Vec<String>,
}

/// A phone number from the request that belongs to a verified user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMatch {
    /// Phone number exactly as submitted
    pub phone: String,
    pub user_id: UserId,
    pub name: String,
    pub has_account: bool,
}

/// Response for `POST /contacts/check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckContactsResponse {
    pub success: bool,
    pub contacts: Vec<ContactMatch>,
}

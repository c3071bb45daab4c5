//! Phone Number Lookup
//!
//! Each submitted number is reduced to its last ten digits and matched
//! against the end of stored phone numbers, so formatting and country
//! prefixes on either side do not matter.

use sqlx::SqlitePool;

use crate::backend::auth::users::find_verified_by_phone_suffix;
use crate::shared::messaging::contact::normalize_phone;
use crate::shared::ContactMatch;

/// Match each phone to a verified user, keeping only the hits
///
/// Results are in request order and echo the phone exactly as submitted.
/// Numbers without any digits are skipped, since an empty suffix would
/// match every user.
pub async fn match_phones(pool: &SqlitePool, phones: &[String]) -> Result<Vec<ContactMatch>, sqlx::Error> {
    let mut contacts = Vec::new();

    for phone in phones {
        let suffix = normalize_phone(phone);
        if suffix.is_empty() {
            tracing::debug!("Skipping phone without digits: {:?}", phone);
            continue;
        }

        if let Some(user) = find_verified_by_phone_suffix(pool, &suffix).await? {
            contacts.push(ContactMatch {
                phone: phone.clone(),
                user_id: user.id,
                name: user.name,
                has_account: true,
            });
        }
    }

    Ok(contacts)
}

//! Contacts Module
//!
//! Matches address-book phone numbers against verified users.
//!
//! - **`lookup`** - Phone suffix matching against the identity store
//! - **`handlers`** - `POST /contacts/check`

/// Phone matching
pub mod lookup;

/// HTTP handlers
pub mod handlers;

pub use handlers::check_contacts;
pub use lookup::match_phones;

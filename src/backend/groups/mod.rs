//! Groups Module
//!
//! Group creation. Groups are stored with their membership but have no
//! messaging of their own yet.
//!
//! - **`db`** - Group and membership rows
//! - **`handlers`** - `POST /group/create`

/// Database operations for groups
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::Group;
pub use handlers::create_group;

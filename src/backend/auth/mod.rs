//! Authentication Module
//!
//! This module handles user registration, email verification, login and
//! bearer-token sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── otp.rs          - One-time code generation and checking
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, phone and password → unverified user → code mailed
//! 2. **Verify**: email and code → user marked verified
//! 3. **Login**: email and password → JWT token returned (verified users only)
//! 4. **Me**: JWT token → caller profile
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 30 days by default

/// User data model and database operations
pub mod users;

/// One-time verification codes
pub mod otp;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, signup, verify_otp};
pub use sessions::{Claims, SessionKeys};
pub use users::User;

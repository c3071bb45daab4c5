//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── verify.rs   - OTP verification handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration
//! - **`verify_otp`** - POST /auth/verify-otp - Email confirmation
//! - **`login`** - POST /auth/login - User authentication
//! - **`get_me`** - GET /auth/me - Get current user info

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// OTP verification handler
pub mod verify;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, LoginResponse, MeResponse, MessageResponse, SignupRequest, VerifyOtpRequest};

pub use login::login;
pub use me::get_me;
pub use signup::signup;
pub use verify::verify_otp;

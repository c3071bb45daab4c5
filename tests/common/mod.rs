//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture driven through `oneshot`
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;

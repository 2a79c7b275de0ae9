//! Core types and utilities for the login-relay client.
//!
//! This crate provides the foundational pieces shared by the identity and
//! session crates:
//! - Error handling (`Result` alias using rootcause)
//! - The `IdentityToken` bearer credential newtype

pub mod error;
pub mod token;

pub use error::Result;
pub use token::IdentityToken;

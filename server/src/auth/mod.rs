//! Authentication module for the ledger server
//!
//! - bcrypt password hashing on the blocking pool
//! - HS256 session tokens carrying the user id
//! - Registration and login flows

mod jwt;
mod password;
mod service;

pub use jwt::{Claims, TokenKeys};
pub use password::{hash_password, verify_password};
pub use service::AuthService;

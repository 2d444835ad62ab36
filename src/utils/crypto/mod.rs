//! Cryptographic helpers

mod secrets;

pub use secrets::{hash_secret, verify_secret};

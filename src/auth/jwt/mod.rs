//! Signed session tokens

mod handler;
mod types;

#[cfg(test)]
mod tests;

pub use types::{SessionClaims, TokenIssuer};

//! Core domain models

mod account;
mod admin;

pub use account::{Account, ApprovalStatus, NewAccount, UserRole};
pub use admin::SuperAdmin;

//! Core domain layer

pub mod models;

//! Shared configuration and error types for Perch.
//!
//! This crate provides the types used across all other crates:
//! - Environment-driven application configuration
//! - Application-wide error taxonomy

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

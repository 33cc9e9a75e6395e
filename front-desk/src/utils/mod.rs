//! Utilities
//!
//! # Contents
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - text length limits and input checks
//! - [`AppError`] / [`ApiResponse`] - re-exported from `shared::error`

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

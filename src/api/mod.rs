//! Remote Store Client
//!
//! HTTP access to the Studylog backend API.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ApiError;

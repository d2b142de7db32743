//! # Quill Core
//!
//! The domain layer: the blog post record, its validation rules and the
//! persistence ports. This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, ValidationError};

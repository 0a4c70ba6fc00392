//! # blog-core
//!
//! Core types and pure logic for blogcheck.
//!
//! This crate has no I/O and does not log. It provides:
//! - Entity structs for the blog API (users, posts, comments and their
//!   embedded address/company records) plus write payloads
//! - The correlation engine joining users → posts → comments by foreign key
//! - Validation predicates (email format, post content rule)
//! - Entity lookup helpers
//! - The cross-cutting [`CoreError`] type

pub mod correlation;
pub mod entities;
pub mod errors;
pub mod lookup;
pub mod validation;

pub use errors::CoreError;

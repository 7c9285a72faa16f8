//! Shared types for Tajweed annotation.
//!
//! - [`character`] -- code point classification and the Arabic letter tables
//! - [`enums`] -- rule tags, annotation modes and options
//! - [`segment`] -- segment and occurrence types returned by the passes

pub mod character;
pub mod enums;
pub mod segment;

//! Domain types shared by the store and HTTP layers.
//!
//! Holds the error vocabulary, identifier/timestamp aliases and the input
//! validation rules for portfolio projects. Nothing in here performs I/O.

pub mod error;
pub mod types;
pub mod validation;

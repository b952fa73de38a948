//! Core data models for the audit record being rendered

pub mod audit;
pub mod finding;

pub use audit::*;
pub use finding::*;

//! # Application Layer
//!
//! Store interfaces and the domain services that orchestrate them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;

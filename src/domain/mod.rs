//! # Domain Layer
//!
//! Entities, association edges and the service result envelope.
//! This layer is independent of the HTTP boundary and the storage engine.

mod error;
pub mod models;

pub use error::*;
pub use models::*;

//! Core domain types

pub mod error;
pub mod model;
pub mod query;

pub use error::DomainError;
pub use model::ModelTier;
pub use query::Query;

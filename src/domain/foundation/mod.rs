//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the creative DNA domain.

mod errors;
mod ids;
mod timestamp;
mod unit_score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActionId, CreativeDnaId, ProjectId, UserId};
pub use timestamp::Timestamp;
pub use unit_score::UnitScore;

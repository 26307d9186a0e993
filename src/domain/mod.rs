//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `dna` - Creative DNA aggregate, aggregation, insights and projections

pub mod dna;
pub mod foundation;

//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresCreativeDnaRepository` - Profile read and upsert over `creative_dna`
//! - `PostgresActivityReader` - Project and action queries that feed analysis

mod activity_reader;
mod creative_dna_repository;

pub use activity_reader::PostgresActivityReader;
pub use creative_dna_repository::PostgresCreativeDnaRepository;

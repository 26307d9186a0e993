//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repository and activity reader
//! - `memory` - In-memory store for tests and development
//! - `http` - axum REST endpoints

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{api_router, DnaHandlers};
pub use memory::InMemoryDnaStore;
pub use postgres::{PostgresActivityReader, PostgresCreativeDnaRepository};

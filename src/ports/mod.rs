//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CreativeDnaRepository` - Read and upsert a user's creative DNA
//! - `ActivityReader` - Projects and recent actions that feed analysis

mod activity_reader;
mod creative_dna_repository;

pub use activity_reader::ActivityReader;
pub use creative_dna_repository::CreativeDnaRepository;

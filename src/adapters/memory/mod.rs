//! In-memory adapters for tests and local development.

mod dna_store;

pub use dna_store::InMemoryDnaStore;

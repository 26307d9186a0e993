//! Creative DNA - Style and workflow profiling for creative projects
//!
//! This crate aggregates a user's project history and action log into a
//! per-user creative DNA profile, derives insights and recommendations, and
//! uses the profile to enrich generation prompts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! lifeline - first-aid guidance and nearby emergency services.
//!
//! Looks up first-aid steps and emergency service locations from a local
//! SQLite catalog, optionally asking an LLM for richer guidance and falling
//! back to the catalog whenever that call fails.

pub mod config;
pub mod geo;
pub mod llm;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

//! Storage layer for the MLB trivia backend
//!
//! This module provides a clean abstraction over the SQLite database used as
//! a small document store (the production deployment's MongoDB stand-in),
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Document find/upsert operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::DocumentStore;

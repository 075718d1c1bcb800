//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema creation
//! - SQLite pragma configuration
//! - Repository layer for category operations

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;

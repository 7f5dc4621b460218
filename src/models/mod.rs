//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Customer model and request bodies
pub mod customer;

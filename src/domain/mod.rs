//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character catalog, script draft
//! - Value Objects: Team, quota table
//! - Domain Services: filtering, night order, validation

pub mod entities;
pub mod services;
pub mod value_objects;

//! Application services - Use case implementations

pub mod generation_service;

pub use generation_service::{
    generate, GenerationError, GenerationMode, GenerationOutcome, GenerationState,
};

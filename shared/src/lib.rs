//! Shared types and the exposure advisory engine for the TanAI platform
//!
//! This crate contains the pure domain logic shared between the backend,
//! the client (via WASM), and other components of the system.

pub mod advisory;
pub mod models;
pub mod plan;
pub mod validation;

pub use advisory::*;
pub use models::*;
pub use plan::*;
pub use validation::*;

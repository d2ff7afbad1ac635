//! HTTP handlers for the TanAI advisory server

pub mod advisory;
pub mod health;
pub mod plan;
pub mod shade;

pub use advisory::*;
pub use health::*;
pub use plan::*;
pub use shade::*;

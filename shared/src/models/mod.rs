//! Domain models for the TanAI advisory platform

mod advisory;
mod plan;
mod skin;
mod weather;

pub use advisory::*;
pub use plan::*;
pub use skin::*;
pub use weather::*;

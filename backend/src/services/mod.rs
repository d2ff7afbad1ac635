//! Business logic services for the TanAI advisory server

pub mod advisory;

pub use advisory::AdvisoryService;

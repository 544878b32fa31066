//! Domain layer - entities, traits, and core logic

pub mod error;
pub mod generation;
pub mod retry;
pub mod run;
pub mod storage;
pub mod workflow;

pub use error::DomainError;

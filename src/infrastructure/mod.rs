//! Infrastructure layer - concrete backends and services

pub mod generation;
pub mod logging;
pub mod services;
pub mod storage;
pub mod workflow;

//! Run records - persisted workflow executions

mod entity;

pub use entity::{Run, RunId};

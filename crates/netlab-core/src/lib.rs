//! Ambient plumbing shared by netlab services: log setup and storage error
//! classification.

pub mod storage;
pub mod tracing;

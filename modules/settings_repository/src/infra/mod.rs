//! Infrastructure layer - store implementations

pub mod storage;
